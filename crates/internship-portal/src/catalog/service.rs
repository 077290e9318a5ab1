use std::sync::Arc;

use tracing::info;

use super::domain::{Posting, PostingKey, PostingUpsert};
use super::repository::PostingRepository;
use crate::store::RepositoryError;

/// Service fronting the posting repository.
pub struct PostingCatalog<R> {
    repository: Arc<R>,
}

impl<R> PostingCatalog<R>
where
    R: PostingRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create or overwrite a posting. The slot count replaces the stored one,
    /// it is never added to it.
    pub async fn upsert(&self, posting: PostingUpsert) -> Result<Posting, PostingServiceError> {
        let stored = self.repository.upsert(posting).await?;
        info!(
            posting_id = stored.id.0,
            organization = %stored.organization,
            category = %stored.category,
            slots = stored.slots,
            "posting upserted"
        );
        Ok(stored)
    }

    pub async fn list(&self) -> Result<Vec<Posting>, PostingServiceError> {
        Ok(self.repository.list().await?)
    }

    pub async fn find(&self, key: &PostingKey) -> Result<Option<Posting>, PostingServiceError> {
        Ok(self.repository.find(key).await?)
    }
}

/// Error raised by the posting catalog.
#[derive(Debug, thiserror::Error)]
pub enum PostingServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
