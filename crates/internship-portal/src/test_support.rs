use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use tempfile::TempDir;

use crate::accounts::{NewUser, PasswordHash, StoredUser, User, UserId, UserRepository};
use crate::applications::{
    ApplicationId, ApplicationRecord, ApplicationRepository, ApplicationSubmission,
    NewApplication,
};
use crate::catalog::{Posting, PostingId, PostingKey, PostingRepository, PostingUpsert};
use crate::config::DatabaseConfig;
use crate::store::{RepositoryError, SqliteStore};

/// SQLite store on a fresh file; keep the directory alive for the test's duration.
pub(crate) async fn temp_store() -> (TempDir, SqliteStore) {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}", dir.path().join("portal.db").display());
    let store = SqliteStore::open(&DatabaseConfig::new(url))
        .await
        .expect("store opens");
    (dir, store)
}

pub(crate) fn applied_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 2)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .expect("valid timestamp")
}

pub(crate) fn submission(
    student: &str,
    organization: &str,
    category: &str,
) -> ApplicationSubmission {
    ApplicationSubmission {
        student_name: student.to_string(),
        email: format!("{}@x.com", student.to_ascii_lowercase()),
        organization: organization.to_string(),
        category: category.to_string(),
    }
}

pub(crate) fn new_application(student: &str, organization: &str, category: &str) -> NewApplication {
    NewApplication {
        submission: submission(student, organization, category),
        applied_at: applied_at(),
    }
}

pub(crate) fn new_user(first_name: &str, email: &str, password: &str) -> NewUser {
    NewUser {
        first_name: first_name.to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password_hash: PasswordHash::generate(password),
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default)]
struct MemoryState {
    postings: Vec<Posting>,
    applications: Vec<ApplicationRecord>,
    users: Vec<StoredUser>,
}

/// Mutex-guarded stand-in for [`SqliteStore`] implementing every repository trait.
#[derive(Default, Clone)]
pub(crate) struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub(crate) fn slots(&self, organization: &str, category: &str) -> Option<u32> {
        let guard = self.state.lock().expect("memory store mutex poisoned");
        guard
            .postings
            .iter()
            .find(|posting| posting.organization == organization && posting.category == category)
            .map(|posting| posting.slots)
    }

    pub(crate) fn application_count(&self) -> usize {
        self.state
            .lock()
            .expect("memory store mutex poisoned")
            .applications
            .len()
    }
}

#[async_trait]
impl PostingRepository for MemoryStore {
    async fn upsert(&self, posting: PostingUpsert) -> Result<Posting, RepositoryError> {
        let mut guard = self.state.lock().expect("memory store mutex poisoned");
        if let Some(existing) = guard.postings.iter_mut().find(|existing| {
            existing.organization == posting.organization && existing.category == posting.category
        }) {
            existing.slots = posting.slots;
            return Ok(existing.clone());
        }

        let stored = Posting {
            id: PostingId(guard.postings.len() as i64 + 1),
            organization: posting.organization,
            category: posting.category,
            slots: posting.slots,
        };
        guard.postings.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Posting>, RepositoryError> {
        let guard = self.state.lock().expect("memory store mutex poisoned");
        Ok(guard.postings.clone())
    }

    async fn find(&self, key: &PostingKey) -> Result<Option<Posting>, RepositoryError> {
        let guard = self.state.lock().expect("memory store mutex poisoned");
        Ok(guard
            .postings
            .iter()
            .find(|posting| posting.key() == *key)
            .cloned())
    }
}

#[async_trait]
impl ApplicationRepository for MemoryStore {
    async fn reserve(
        &self,
        application: NewApplication,
    ) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.state.lock().expect("memory store mutex poisoned");
        let key = application.submission.posting_key();
        let posting = guard
            .postings
            .iter_mut()
            .find(|posting| posting.key() == key)
            .ok_or(RepositoryError::NotFound)?;
        if !posting.has_capacity() {
            return Err(RepositoryError::Exhausted);
        }
        posting.slots -= 1;
        let posting_id = posting.id;

        let NewApplication {
            submission,
            applied_at,
        } = application;
        let record = ApplicationRecord {
            id: ApplicationId(guard.applications.len() as i64 + 1),
            posting_id: Some(posting_id),
            student_name: submission.student_name,
            email: submission.email,
            organization: submission.organization,
            category: submission.category,
            applied_at,
        };
        guard.applications.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.state.lock().expect("memory store mutex poisoned");
        Ok(guard.applications.clone())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut guard = self.state.lock().expect("memory store mutex poisoned");
        if guard.users.iter().any(|stored| stored.user.email == user.email) {
            return Err(RepositoryError::Conflict);
        }

        let stored = StoredUser {
            user: User {
                id: UserId(guard.users.len() as i64 + 1),
                first_name: user.first_name,
                last_name: user.last_name,
                email: user.email,
            },
            password_hash: user.password_hash,
        };
        guard.users.push(stored.clone());
        Ok(stored.user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, RepositoryError> {
        let guard = self.state.lock().expect("memory store mutex poisoned");
        Ok(guard
            .users
            .iter()
            .find(|stored| stored.user.email == email)
            .cloned())
    }
}

/// Repository whose every call fails as if the database were gone.
pub(crate) struct UnavailableStore;

fn unavailable() -> RepositoryError {
    RepositoryError::Unavailable("database is locked".to_string())
}

#[async_trait]
impl PostingRepository for UnavailableStore {
    async fn upsert(&self, _posting: PostingUpsert) -> Result<Posting, RepositoryError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Posting>, RepositoryError> {
        Err(unavailable())
    }

    async fn find(&self, _key: &PostingKey) -> Result<Option<Posting>, RepositoryError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ApplicationRepository for UnavailableStore {
    async fn reserve(
        &self,
        _application: NewApplication,
    ) -> Result<ApplicationRecord, RepositoryError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(unavailable())
    }
}

#[async_trait]
impl UserRepository for UnavailableStore {
    async fn insert(&self, _user: NewUser) -> Result<User, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<StoredUser>, RepositoryError> {
        Err(unavailable())
    }
}
