use async_trait::async_trait;

use super::domain::{NewUser, StoredUser, User};
use crate::store::RepositoryError;

/// Storage abstraction for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with [`RepositoryError::Conflict`] when the email is taken.
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, RepositoryError>;
}
