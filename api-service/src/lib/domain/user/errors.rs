use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username is empty")]
    Empty,

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for authentication and authorization operations.
///
/// The first five variants are authentication outcomes and all surface as the
/// same 401; the rest are infrastructure failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Token subject does not exist: {0}")]
    UnknownSubject(String),

    #[error("Account is disabled: {0}")]
    AccountDisabled(String),

    #[error("Password error: {0}")]
    Password(String),

    #[error("Token generation failed: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AuthError {
    /// True for outcomes caused by the caller's credentials or token rather
    /// than by the service.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials
                | AuthError::InvalidToken(_)
                | AuthError::ExpiredToken
                | AuthError::UnknownSubject(_)
                | AuthError::AccountDisabled(_)
        )
    }
}

impl From<auth::JwtError> for AuthError {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::TokenExpired => AuthError::ExpiredToken,
            auth::JwtError::EncodingFailed(msg) => AuthError::Token(msg),
            other => AuthError::InvalidToken(other.to_string()),
        }
    }
}

impl From<auth::PasswordError> for AuthError {
    fn from(err: auth::PasswordError) -> Self {
        AuthError::Password(err.to_string())
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError::Unknown(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_errors_map_to_token_outcomes() {
        assert_eq!(
            AuthError::from(auth::JwtError::TokenExpired),
            AuthError::ExpiredToken
        );
        assert!(matches!(
            AuthError::from(auth::JwtError::InvalidSignature),
            AuthError::InvalidToken(_)
        ));
        assert!(matches!(
            AuthError::from(auth::JwtError::EncodingFailed("boom".to_string())),
            AuthError::Token(_)
        ));
    }

    #[test]
    fn test_authentication_failures() {
        assert!(AuthError::InvalidCredentials.is_authentication_failure());
        assert!(AuthError::ExpiredToken.is_authentication_failure());
        assert!(AuthError::AccountDisabled("bob".to_string()).is_authentication_failure());
        assert!(!AuthError::DatabaseError("down".to_string()).is_authentication_failure());
        assert!(!AuthError::Password("bad hash".to_string()).is_authentication_failure());
    }
}
