use std::sync::Arc;

use chrono::{Local, NaiveDateTime, Timelike};
use tracing::{info, warn};

use super::domain::{ApplicationRecord, ApplicationSubmission, NewApplication};
use super::repository::ApplicationRepository;
use crate::catalog::PostingKey;
use crate::store::RepositoryError;

/// Service running the apply flow on top of an application repository.
pub struct ApplicationService<R> {
    repository: Arc<R>,
}

impl<R> ApplicationService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Claim one slot of the posting named in the submission.
    pub async fn apply(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        self.apply_at(submission, now()).await
    }

    pub(crate) async fn apply_at(
        &self,
        submission: ApplicationSubmission,
        applied_at: NaiveDateTime,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let key = submission.posting_key();
        let application = NewApplication {
            submission,
            applied_at,
        };

        match self.repository.reserve(application).await {
            Ok(record) => {
                info!(
                    application_id = record.id.0,
                    organization = %key.organization,
                    category = %key.category,
                    "application recorded"
                );
                Ok(record)
            }
            Err(RepositoryError::NotFound) => {
                warn!(
                    organization = %key.organization,
                    category = %key.category,
                    "apply against unknown posting"
                );
                Err(ApplicationServiceError::NotFound(key))
            }
            Err(RepositoryError::Exhausted) => {
                warn!(
                    organization = %key.organization,
                    category = %key.category,
                    "apply against full posting"
                );
                Err(ApplicationServiceError::NoCapacity(key))
            }
            Err(other) => Err(other.into()),
        }
    }

    pub async fn list(&self) -> Result<Vec<ApplicationRecord>, ApplicationServiceError> {
        Ok(self.repository.list().await?)
    }
}

fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("no internship posted by {} for {}", .0.organization, .0.category)]
    NotFound(PostingKey),
    #[error("no slots left at {} for {}", .0.organization, .0.category)]
    NoCapacity(PostingKey),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
