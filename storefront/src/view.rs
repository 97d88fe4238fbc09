//! View rendering
//!
//! Pure functions from state to view models. Nothing in here mutates or
//! stores anything; a redraw is just calling these again on current state.

use shared::models::{CartItem, ProductType};

use crate::cart::CartStore;
use crate::state::{AppState, CategoryFilter};

/// Label of the synthetic tile that clears the category filter
pub const ALL_ITEMS_LABEL: &str = "All Items";

/// Placeholder shown when a catalog entry has no image
pub const FALLBACK_IMAGE: &str = "data:image/svg+xml;base64,\
PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSI4MCIgaGVpZ2h0\
PSI4MCI+PHJlY3Qgd2lkdGg9IjgwIiBoZWlnaHQ9IjgwIiBmaWxsPSIjRjlGOUY5Ii8+PC9zdmc+";

/// One category tile, including the leading "All Items" tile
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTile {
    pub name: String,
    pub image_url: Option<String>,
    pub active: bool,
}

/// One product card in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub badge: &'static str,
    pub image: String,
    pub description: String,
}

/// One rendered cart row
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// Cart panel header/footer numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary {
    pub total_items: u32,
    pub total_amount: f64,
    pub checkout_enabled: bool,
}

fn badge_label(kind: ProductType) -> &'static str {
    match kind {
        ProductType::Veg => "Veg",
        ProductType::NonVeg => "Non-Veg",
    }
}

/// Category strip: "All Items" first, then the catalog in order
pub fn category_tiles(state: &AppState) -> Vec<CategoryTile> {
    let mut tiles = Vec::with_capacity(state.categories.len() + 1);
    tiles.push(CategoryTile {
        name: ALL_ITEMS_LABEL.to_string(),
        image_url: None,
        active: state.filter == CategoryFilter::All,
    });
    for category in &state.categories {
        tiles.push(CategoryTile {
            name: category.name.clone(),
            image_url: category.image_url.clone(),
            active: state.filter == CategoryFilter::Named(category.name.clone()),
        });
    }
    tiles
}

/// Product grid for the active filter
pub fn product_cards(state: &AppState) -> Vec<ProductCard> {
    state
        .filtered_products()
        .into_iter()
        .map(|product| ProductCard {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            badge: badge_label(product.kind),
            image: if product.image.is_empty() {
                FALLBACK_IMAGE.to_string()
            } else {
                product.image.clone()
            },
            description: product.description.clone(),
        })
        .collect()
}

/// Cart rows with per-line totals
pub fn cart_lines(cart: &CartStore) -> Vec<CartLine> {
    cart.items().iter().map(cart_line).collect()
}

fn cart_line(item: &CartItem) -> CartLine {
    CartLine {
        id: item.id,
        name: item.name.clone(),
        price: item.price,
        quantity: item.quantity,
        line_total: item.line_total(),
    }
}

/// Item count, amount, and whether checkout is allowed
pub fn cart_summary(cart: &CartStore) -> CartSummary {
    let total_items = cart.total_items();
    CartSummary {
        total_items,
        total_amount: cart.total_amount(),
        checkout_enabled: total_items > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Category, Product};
    use tempfile::TempDir;

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        state.apply_menu(
            vec![
                Category::new("Kulfi").with_image("https://img.example/k.jpg"),
                Category::new("Shakes"),
            ],
            vec![
                Product {
                    id: 1,
                    name: "Kesar Kulfi".to_string(),
                    price: 80.0,
                    category: "Kulfi".to_string(),
                    kind: ProductType::Veg,
                    image: "https://img.example/kesar.jpg".to_string(),
                    description: String::new(),
                },
                Product {
                    id: 2,
                    name: "Chicken Roll".to_string(),
                    price: 120.0,
                    category: "Snacks".to_string(),
                    kind: ProductType::NonVeg,
                    image: String::new(),
                    description: String::new(),
                },
            ],
        );
        state
    }

    #[test]
    fn test_all_items_tile_leads_and_tracks_filter() {
        let mut state = loaded_state();

        let tiles = category_tiles(&state);
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].name, ALL_ITEMS_LABEL);
        assert!(tiles[0].active);
        assert!(!tiles[1].active);

        state.filter_by_category(Some("Kulfi"));
        let tiles = category_tiles(&state);
        assert!(!tiles[0].active);
        assert!(tiles[1].active);
    }

    #[test]
    fn test_product_cards_badge_and_fallback_image() {
        let state = loaded_state();
        let cards = product_cards(&state);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].badge, "Veg");
        assert_eq!(cards[0].image, "https://img.example/kesar.jpg");
        assert_eq!(cards[1].badge, "Non-Veg");
        assert_eq!(cards[1].image, FALLBACK_IMAGE);
    }

    #[test]
    fn test_cart_summary_enables_checkout_only_with_items() {
        let dir = TempDir::new().unwrap();
        let mut cart = CartStore::load(dir.path());

        let summary = cart_summary(&cart);
        assert_eq!(summary.total_items, 0);
        assert!(!summary.checkout_enabled);

        let state = loaded_state();
        cart.add(state.product(1).unwrap());
        cart.add(state.product(1).unwrap());

        let summary = cart_summary(&cart);
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.total_amount, 160.0);
        assert!(summary.checkout_enabled);

        let lines = cart_lines(&cart);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line_total, 160.0);
    }
}
