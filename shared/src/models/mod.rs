//! Domain models
//!
//! Entity structs mirror the remote service's wire format exactly; serde
//! renames pin the field names the spreadsheet backend emits.

mod cart;
mod category;
mod menu;
mod order;
mod product;
mod stats;

pub use cart::CartItem;
pub use category::Category;
pub use menu::CachedMenu;
pub use order::{Order, OrderDraft, OrderLine, OrderStatus};
pub use product::{NewProduct, Product, ProductType};
pub use stats::DashboardStats;
