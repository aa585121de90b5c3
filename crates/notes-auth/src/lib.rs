//! Notes Authentication and Authorization
//!
//! This crate provides Argon2 password hashing, JWT issuance and
//! verification, and the bearer-token gate placed in front of the
//! notes API.

pub mod error;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use error::AuthError;
pub use jwt::{Claims, ClaimsUser, JwtManager};
pub use middleware::{AuthUser, require_auth};
pub use password::{hash_password, verify_password};
