use async_trait::async_trait;

use super::domain::{Posting, PostingKey, PostingUpsert};
use crate::store::RepositoryError;

/// Storage abstraction for the posting catalog.
#[async_trait]
pub trait PostingRepository: Send + Sync {
    /// Insert the posting, or overwrite the slot count when the key already exists.
    async fn upsert(&self, posting: PostingUpsert) -> Result<Posting, RepositoryError>;
    async fn list(&self) -> Result<Vec<Posting>, RepositoryError>;
    async fn find(&self, key: &PostingKey) -> Result<Option<Posting>, RepositoryError>;
}
