//! Password hashing and bearer tokens.

mod error;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use password::{hash_password, verify_dummy_password, verify_password};
pub use token::{Claims, TokenPurpose, TokenService};
