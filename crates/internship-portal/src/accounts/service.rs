use std::sync::Arc;

use tracing::{info, warn};

use super::credentials::PasswordHash;
use super::domain::{LoginRequest, NewUser, SignupRequest, User};
use super::repository::UserRepository;
use crate::store::RepositoryError;

/// Signup and login on top of a user repository.
pub struct AccountService<R> {
    repository: Arc<R>,
}

impl<R> AccountService<R>
where
    R: UserRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new account; the email must not be in use yet.
    pub async fn signup(&self, request: SignupRequest) -> Result<User, AccountServiceError> {
        let SignupRequest {
            first_name,
            last_name,
            email,
            password,
        } = request;

        let new_user = NewUser {
            first_name,
            last_name,
            email: email.clone(),
            password_hash: PasswordHash::generate(&password),
        };

        match self.repository.insert(new_user).await {
            Ok(user) => {
                info!(user_id = user.id.0, "account created");
                Ok(user)
            }
            Err(RepositoryError::Conflict) => Err(AccountServiceError::DuplicateEmail(email)),
            Err(other) => Err(other.into()),
        }
    }

    /// Returns `None` for an unknown email or a wrong password.
    pub async fn login(&self, request: LoginRequest) -> Result<Option<User>, AccountServiceError> {
        let stored = self.repository.find_by_email(&request.email).await?;

        match stored {
            Some(stored) if stored.password_hash.verify(&request.password) => Ok(Some(stored.user)),
            _ => {
                warn!("login rejected");
                Ok(None)
            }
        }
    }
}

/// Error raised by the account service.
#[derive(Debug, thiserror::Error)]
pub enum AccountServiceError {
    #[error("an account already exists for {0}")]
    DuplicateEmail(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
