use async_trait::async_trait;

use super::{RepositoryError, SqliteStore};
use crate::catalog::{Posting, PostingId, PostingKey, PostingRepository, PostingUpsert};

#[derive(sqlx::FromRow)]
struct PostingRow {
    id: i64,
    company_name: String,
    domain: String,
    slots: i64,
}

impl TryFrom<PostingRow> for Posting {
    type Error = RepositoryError;

    fn try_from(row: PostingRow) -> Result<Self, Self::Error> {
        let slots = u32::try_from(row.slots).map_err(|_| {
            RepositoryError::Unavailable(format!(
                "internship {} holds an out of range slot count {}",
                row.id, row.slots
            ))
        })?;

        Ok(Posting {
            id: PostingId(row.id),
            organization: row.company_name,
            category: row.domain,
            slots,
        })
    }
}

#[async_trait]
impl PostingRepository for SqliteStore {
    async fn upsert(&self, posting: PostingUpsert) -> Result<Posting, RepositoryError> {
        let row: PostingRow = sqlx::query_as(
            "INSERT INTO internships (company_name, domain, slots)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (company_name, domain) DO UPDATE SET slots = excluded.slots
             RETURNING id, company_name, domain, slots",
        )
        .bind(&posting.organization)
        .bind(&posting.category)
        .bind(i64::from(posting.slots))
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn list(&self) -> Result<Vec<Posting>, RepositoryError> {
        let rows: Vec<PostingRow> =
            sqlx::query_as("SELECT id, company_name, domain, slots FROM internships ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Posting::try_from).collect()
    }

    async fn find(&self, key: &PostingKey) -> Result<Option<Posting>, RepositoryError> {
        let row: Option<PostingRow> = sqlx::query_as(
            "SELECT id, company_name, domain, slots FROM internships
             WHERE company_name = ?1 AND domain = ?2",
        )
        .bind(&key.organization)
        .bind(&key.category)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Posting::try_from).transpose()
    }
}
