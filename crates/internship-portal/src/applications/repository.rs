use async_trait::async_trait;

use super::domain::{ApplicationRecord, NewApplication};
use crate::store::RepositoryError;

/// Storage abstraction for applications.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Take one slot from the posting named by the submission and record the
    /// application, as a single atomic unit.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no posting matches and
    /// [`RepositoryError::Exhausted`] when it has no slots left; neither failure
    /// changes stored state.
    async fn reserve(&self, application: NewApplication)
        -> Result<ApplicationRecord, RepositoryError>;

    async fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}
