use async_trait::async_trait;
use chrono::Duration;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::AuthError;

/// Port for authentication and authorization operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check a username/password pair.
    ///
    /// # Arguments
    /// * `username` - Username as supplied by the client
    /// * `password` - Plaintext password as supplied by the client
    ///
    /// # Returns
    /// The matching user, or `None` when the user is unknown or the password
    /// is wrong (the two cases are indistinguishable)
    ///
    /// # Errors
    /// * `Password` - Stored digest could not be used for verification
    /// * `DatabaseError` - Credential store lookup failed
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<Option<User>, AuthError>;

    /// Issue a signed access token for `username`.
    ///
    /// # Arguments
    /// * `username` - Subject of the token
    /// * `ttl` - Token lifetime
    ///
    /// # Errors
    /// * `Token` - Signing failed
    fn issue_token(&self, username: &Username, ttl: Duration) -> Result<AccessToken, AuthError>;

    /// Resolve the user a token was issued to.
    ///
    /// # Arguments
    /// * `token` - Raw token string (without scheme prefix)
    ///
    /// # Returns
    /// The active user named by the token subject
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, malformed token or missing subject
    /// * `ExpiredToken` - Token expiry has passed
    /// * `UnknownSubject` - No user with the token subject
    /// * `AccountDisabled` - Subject exists but is disabled
    /// * `DatabaseError` - Credential store lookup failed
    async fn resolve_current_user(&self, token: &str) -> Result<User, AuthError>;
}

/// Read access to stored user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Storage lookup failed or the stored record is invalid
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError>;
}
