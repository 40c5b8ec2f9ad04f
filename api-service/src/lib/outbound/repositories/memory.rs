use std::collections::HashMap;

use async_trait::async_trait;

use crate::config::SeedUserConfig;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::AuthError;
use crate::user::errors::UsernameError;

/// Credential store held in process memory.
///
/// Filled once at construction and never mutated, so lookups need no locking.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: HashMap<Username, User>,
}

impl InMemoryUserRepository {
    /// Build a store from user records; later duplicates replace earlier ones.
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.username.clone(), user))
                .collect(),
        }
    }

    /// Build a store from the `[[users]]` configuration entries.
    ///
    /// # Errors
    /// * `UsernameError` - An entry has an empty or overlong username
    pub fn from_seed(seed: &[SeedUserConfig]) -> Result<Self, UsernameError> {
        let users = seed
            .iter()
            .map(|entry| {
                User::try_new(
                    entry.username.clone(),
                    entry.hashed_password.clone(),
                    entry.disabled,
                    entry.full_name.clone(),
                    entry.email.clone(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(users))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError> {
        Ok(self.users.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(username: &str, email: Option<&str>) -> SeedUserConfig {
        SeedUserConfig {
            username: username.to_string(),
            hashed_password: "$argon2id$stub".to_string(),
            disabled: false,
            full_name: None,
            email: email.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_find_seeded_user() {
        let repository =
            InMemoryUserRepository::from_seed(&[seed("alice", Some("alice@example.com"))])
                .unwrap();

        let alice = Username::new("alice".to_string()).unwrap();
        let found = repository.find_by_username(&alice).await.unwrap();
        assert_eq!(found.map(|u| u.username), Some(alice));

        let dodo = Username::new("dodo".to_string()).unwrap();
        assert_eq!(repository.find_by_username(&dodo).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_from_seed_accepts_any_provisioned_name() {
        let repository = InMemoryUserRepository::from_seed(&[
            seed("jo", None),
            seed("j.doe", Some("")),
            seed("alice@example.com", Some("not-an-email")),
        ])
        .unwrap();
        assert_eq!(repository.len(), 3);

        for name in ["jo", "j.doe", "alice@example.com"] {
            let username = Username::new(name.to_string()).unwrap();
            let found = repository.find_by_username(&username).await.unwrap();
            assert_eq!(found.map(|u| u.username), Some(username));
        }
    }

    #[test]
    fn test_from_seed_rejects_empty_username() {
        let result = InMemoryUserRepository::from_seed(&[seed("", None)]);
        assert_eq!(result.unwrap_err(), UsernameError::Empty);
    }

    #[test]
    fn test_duplicate_usernames_keep_last() {
        let mut second = seed("alice", None);
        second.disabled = true;

        let repository =
            InMemoryUserRepository::from_seed(&[seed("alice", None), second]).unwrap();
        assert_eq!(repository.len(), 1);
    }
}
