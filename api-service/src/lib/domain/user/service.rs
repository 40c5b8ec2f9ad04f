use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use chrono::Duration;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Argon2id digest (default parameters) that matches no password.
///
/// Verified when no user matches, so an unknown username costs the same
/// Argon2 run as a wrong password.
const ABSENT_USER_DIGEST: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$GhZP3jXr6xN8J1yBZiRnfg$nK6/DFfwapzB1OdvQrOMyMIxG3sSqSjsDuD4olthaDQ";

/// Domain service implementation for login and token resolution.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthenticationService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthenticationService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password verifier and token signer
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthenticationService<UR>
where
    UR: UserRepository,
{
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AuthError> {
        // A name that could never have been provisioned is just an unknown user
        let user = match Username::new(username.to_string()) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            if let Err(e) = self.authenticator.verify_password(password, ABSENT_USER_DIGEST) {
                tracing::error!(error = %e, "Absent-user digest is unusable");
            }
            return Ok(None);
        };

        let is_valid = self
            .authenticator
            .verify_password(password, &user.hashed_password)
            .map_err(|e| {
                tracing::error!(username = %user.username, error = %e, "Stored password hash is unusable");
                AuthError::from(e)
            })?;

        Ok(is_valid.then_some(user))
    }

    fn issue_token(&self, username: &Username, ttl: Duration) -> Result<AccessToken, AuthError> {
        let claims = Claims::for_subject(username, ttl);
        let token = self.authenticator.generate_token(&claims)?;

        Ok(AccessToken::new(token, claims.expires_at()))
    }

    async fn resolve_current_user(&self, token: &str) -> Result<User, AuthError> {
        let claims: Claims = self.authenticator.validate_token(token)?;

        let username = Username::new(claims.sub.clone())
            .map_err(|_| AuthError::UnknownSubject(claims.sub.clone()))?;

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or_else(|| AuthError::UnknownSubject(claims.sub))?;

        if !user.is_active() {
            return Err(AuthError::AccountDisabled(user.username.to_string()));
        }

        Ok(user)
    }
}
