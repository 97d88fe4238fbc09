//! Back Office - admin dashboard application core
//!
//! Catalog CRUD, order management, and bill rendering over the same remote
//! service the storefront talks to. Authentication is a shared-password
//! check with no session token; the gate here only guards the local UI.

pub mod admin;
pub mod bill;
pub mod dashboard;
pub mod error;
pub mod image;

pub use admin::{ADMIN_TIMEOUT_SECS, BackOffice, DeleteOutcome};
pub use dashboard::{Dashboard, SalesPoint};
pub use error::{AdminError, AdminResult};
