//! Admin error types

use parlour_client::ClientError;
use thiserror::Error;

/// Admin operation error
#[derive(Debug, Error)]
pub enum AdminError {
    /// A privileged operation ran before a successful login
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The remote rejected the password
    #[error("Invalid password")]
    InvalidPassword,

    /// The underlying remote call failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Result type for admin operations
pub type AdminResult<T> = Result<T, AdminError>;
