//! Authentication primitives shared by the service crates.
//!
//! Provides:
//! - Password hashing and verification (Argon2id, PHC strings)
//! - Signed, expiring access tokens (HS256 JWT)
//! - An `Authenticator` that pairs the two behind one signing secret
//!
//! Credential lookup is deliberately absent: services own their user storage
//! and only hand this crate a plaintext password and the stored digest.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("wonderland").unwrap();
//! assert!(hasher.verify("wonderland", &hash).unwrap());
//! assert!(!hasher.verify("looking-glass", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_subject("alice", Duration::minutes(30));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::{Authenticator, Claims};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Provisioning: hash password
//! let hash = auth.hash_password("wonderland").unwrap();
//!
//! // Login: verify, then issue token
//! assert!(auth.verify_password("wonderland", &hash).unwrap());
//! let token = auth
//!     .generate_token(&Claims::for_subject("alice", Duration::minutes(30)))
//!     .unwrap();
//!
//! // Protected request: validate token
//! let decoded: Claims = auth.validate_token(&token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
