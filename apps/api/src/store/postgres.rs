use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::{is_unique_violation, AppError};
use crate::models::resume::{NewResume, Resume};
use crate::models::user::User;
use crate::store::Store;

/// PostgreSQL-backed store. Every operation is a single statement.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("User with this email already exists".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        info!("Created user {}", user.id);
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_resume(&self, resume: NewResume) -> Result<Resume, AppError> {
        Ok(sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resumes (id, user_id, file_name, file_key, file_url, shareable_slug)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(resume.user_id)
        .bind(&resume.file_name)
        .bind(&resume.file_key)
        .bind(&resume.file_url)
        .bind(&resume.shareable_slug)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_resumes(&self, user_id: Uuid) -> Result<Vec<Resume>, AppError> {
        Ok(sqlx::query_as::<_, Resume>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_resume(&self, id: Uuid) -> Result<Option<Resume>, AppError> {
        Ok(sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_resume_by_slug(&self, slug: &str) -> Result<Option<Resume>, AppError> {
        Ok(
            sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE shareable_slug = $1")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn rename_resume(&self, id: Uuid, file_name: &str) -> Result<Option<Resume>, AppError> {
        Ok(sqlx::query_as::<_, Resume>(
            "UPDATE resumes SET file_name = $1 WHERE id = $2 RETURNING *",
        )
        .bind(file_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
