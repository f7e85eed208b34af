//! # docportal-auth
//!
//! Password hashing (Argon2id) and JWT token handling for the portal.

pub mod jwt;
pub mod password;

pub use jwt::claims::Claims;
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::{JwtEncoder, TokenPair};
pub use password::hasher::PasswordHasher;
