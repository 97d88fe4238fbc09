//! Product Model

use serde::{Deserialize, Serialize};

/// Dietary type badge shown on product cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProductType {
    #[default]
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "non-veg",
        }
    }
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in currency unit, always > 0
    pub price: f64,
    /// Category reference (Category.name)
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: ProductType,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// Create product payload
///
/// The remote service has no update operation; changes are delete+recreate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: ProductType,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_wire_values() {
        assert_eq!(serde_json::to_string(&ProductType::Veg).unwrap(), r#""veg""#);
        assert_eq!(
            serde_json::to_string(&ProductType::NonVeg).unwrap(),
            r#""non-veg""#
        );
    }

    #[test]
    fn test_product_deserializes_wire_shape() {
        let json = r#"{
            "id": 7,
            "name": "Kesar Kulfi",
            "price": 80.0,
            "category": "Kulfi",
            "type": "veg",
            "image": "https://img.example/kulfi.jpg",
            "description": "Saffron kulfi on a stick"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.kind, ProductType::Veg);
        assert_eq!(product.category, "Kulfi");
    }
}
