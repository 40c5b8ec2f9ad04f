use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::UsernameError;

/// User record as held by the credential store.
///
/// Read-only to this service: provisioning happens elsewhere, so profile
/// fields are carried as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: Username,
    pub hashed_password: String,
    pub disabled: bool,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Build a user record from raw stored fields.
    ///
    /// A blank email is dropped. A malformed one is kept and logged.
    ///
    /// # Errors
    /// * `UsernameError` - Stored username is empty or too long
    pub fn try_new(
        username: String,
        hashed_password: String,
        disabled: bool,
        full_name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, UsernameError> {
        let username = Username::new(username)?;
        let email = email.filter(|e| !e.trim().is_empty());

        if let Some(email) = &email {
            if let Err(e) = email_address::EmailAddress::from_str(email) {
                tracing::warn!(username = %username, error = %e, "Stored email is malformed");
            }
        }

        Ok(Self {
            username,
            hashed_password,
            disabled,
            full_name,
            email,
        })
    }

    pub fn is_active(&self) -> bool {
        !self.disabled
    }
}

/// Username value type
///
/// Any non-empty string of at most 255 characters; the credential store owns
/// the naming rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `Empty` - Username is the empty string
    /// * `TooLong` - Username longer than 255 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.chars().count();
        if length == 0 {
            Err(UsernameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(username))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Signed access token handed to a client after a successful login.
///
/// Nothing is stored server side; the token carries its own subject and expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(token: String, expires_at: DateTime<Utc>) -> Self {
        Self { token, expires_at }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn into_string(self) -> String {
        self.token
    }
}
