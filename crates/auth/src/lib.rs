//! JWT identity and credential management.
//!
//! Stateless JWT-based authentication with Argon2 password hashing.
//! Tokens are self-contained: validity is determined purely by
//! signature, issuer, audience, and expiry — nothing is stored
//! server-side, and an issued token is trusted for its full lifetime.
//!
//! ## Identity Types
//!
//! - [`Member`] — Registered account with credentials
//! - [`Claims`] — JWT payload structure
//!
//! ## Security
//!
//! - [`Crypto`] — JWT signing and verification
//! - [`password`] — Argon2 hashing, verification, and strength policy
mod claims;
mod crypto;
mod dto;
mod member;
pub mod password;

pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use member::*;

#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
