use async_trait::async_trait;

use super::{RepositoryError, SqliteStore};
use crate::accounts::{NewUser, PasswordHash, StoredUser, User, UserId, UserRepository};

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

impl From<UserRow> for StoredUser {
    fn from(row: UserRow) -> Self {
        StoredUser {
            user: User {
                id: UserId(row.id),
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
            },
            password_hash: PasswordHash::from_stored(row.password),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteStore {
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (first_name, last_name, email, password)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(user.password_hash.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(User {
            id: UserId(id),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, first_name, last_name, email, password FROM users WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StoredUser::from))
    }
}
