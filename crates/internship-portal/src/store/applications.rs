use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::{RepositoryError, SqliteStore};
use crate::applications::{
    ApplicationId, ApplicationRecord, ApplicationRepository, NewApplication, APPLIED_AT_FORMAT,
};
use crate::catalog::PostingId;

#[derive(sqlx::FromRow)]
struct ApplicationRow {
    id: i64,
    internship_id: i64,
    student_name: String,
    email: String,
    company_name: String,
    domain: String,
    applied_at: String,
}

impl TryFrom<ApplicationRow> for ApplicationRecord {
    type Error = RepositoryError;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        let applied_at = NaiveDateTime::parse_from_str(&row.applied_at, APPLIED_AT_FORMAT)
            .map_err(|err| {
                RepositoryError::Unavailable(format!(
                    "application {} has malformed applied_at '{}': {err}",
                    row.id, row.applied_at
                ))
            })?;

        Ok(ApplicationRecord {
            id: ApplicationId(row.id),
            posting_id: Some(PostingId(row.internship_id)),
            student_name: row.student_name,
            email: row.email,
            organization: row.company_name,
            category: row.domain,
            applied_at,
        })
    }
}

#[async_trait]
impl ApplicationRepository for SqliteStore {
    async fn reserve(
        &self,
        application: NewApplication,
    ) -> Result<ApplicationRecord, RepositoryError> {
        let NewApplication {
            submission,
            applied_at,
        } = application;

        // The conditional decrement is the first statement, so the writer lock is
        // held before any slot count is observed.
        let mut tx = self.pool.begin().await?;
        let reserved: Option<i64> = sqlx::query_scalar(
            "UPDATE internships SET slots = slots - 1
             WHERE company_name = ?1 AND domain = ?2 AND slots > 0
             RETURNING id",
        )
        .bind(&submission.organization)
        .bind(&submission.category)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(internship_id) = reserved else {
            let exists: Option<i64> = sqlx::query_scalar(
                "SELECT id FROM internships WHERE company_name = ?1 AND domain = ?2",
            )
            .bind(&submission.organization)
            .bind(&submission.category)
            .fetch_optional(&mut *tx)
            .await?;
            tx.rollback().await?;

            return Err(match exists {
                Some(_) => RepositoryError::Exhausted,
                None => RepositoryError::NotFound,
            });
        };

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO applications
                 (internship_id, student_name, email, company_name, domain, applied_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id",
        )
        .bind(internship_id)
        .bind(&submission.student_name)
        .bind(&submission.email)
        .bind(&submission.organization)
        .bind(&submission.category)
        .bind(applied_at.format(APPLIED_AT_FORMAT).to_string())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ApplicationRecord {
            id: ApplicationId(id),
            posting_id: Some(PostingId(internship_id)),
            student_name: submission.student_name,
            email: submission.email,
            organization: submission.organization,
            category: submission.category,
            applied_at,
        })
    }

    async fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let rows: Vec<ApplicationRow> = sqlx::query_as(
            "SELECT id, internship_id, student_name, email, company_name, domain, applied_at
             FROM applications ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ApplicationRecord::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PostingKey, PostingRepository, PostingUpsert};
    use crate::test_support::{applied_at, new_application, temp_store};

    async fn slots(store: &SqliteStore, organization: &str, category: &str) -> u32 {
        PostingRepository::find(store, &PostingKey::new(organization, category))
            .await
            .expect("find succeeds")
            .expect("posting present")
            .slots
    }

    #[tokio::test]
    async fn reserve_decrements_and_records_together() {
        let (_dir, store) = temp_store().await;
        let posting = store
            .upsert(PostingUpsert::new("Acme", "Data", 2))
            .await
            .expect("posting stored");

        let record = store
            .reserve(new_application("Al", "Acme", "Data"))
            .await
            .expect("slot reserved");

        assert_eq!(record.posting_id, Some(posting.id));
        assert_eq!(record.applied_at, applied_at());
        assert_eq!(slots(&store, "Acme", "Data").await, 1);

        let listed = ApplicationRepository::list(&store)
            .await
            .expect("list succeeds");
        assert_eq!(listed, vec![record]);
    }

    #[tokio::test]
    async fn reserve_reports_missing_posting_without_writing() {
        let (_dir, store) = temp_store().await;

        let result = store.reserve(new_application("Al", "Nowhere", "Data")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));

        let listed = ApplicationRepository::list(&store)
            .await
            .expect("list succeeds");
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn reserve_reports_exhaustion_without_writing() {
        let (_dir, store) = temp_store().await;
        store
            .upsert(PostingUpsert::new("Acme", "Data", 0))
            .await
            .expect("posting stored");

        let result = store.reserve(new_application("Cy", "Acme", "Data")).await;
        assert!(matches!(result, Err(RepositoryError::Exhausted)));
        assert_eq!(slots(&store, "Acme", "Data").await, 0);

        let listed = ApplicationRepository::list(&store)
            .await
            .expect("list succeeds");
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn applications_reference_their_posting() {
        let (_dir, store) = temp_store().await;
        let result = sqlx::query(
            "INSERT INTO applications
                 (internship_id, student_name, email, company_name, domain, applied_at)
             VALUES (999, 'Al', 'al@x.com', 'Acme', 'Data', '2025-01-01 00:00:00')",
        )
        .execute(store.pool())
        .await;
        assert!(result.is_err(), "foreign key must reject orphan applications");
    }
}
