//! Persistence boundary for users and resumes.
//!
//! `AppState` holds an `Arc<dyn Store>`: `PgStore` in production, `MemoryStore` in tests.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, Resume};
use crate::models::user::User;

#[async_trait]
pub trait Store: Send + Sync {
    /// Inserts a user. A duplicate email yields `AppError::Conflict`.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn insert_resume(&self, resume: NewResume) -> Result<Resume, AppError>;

    /// All resumes owned by `user_id`, newest first.
    async fn list_resumes(&self, user_id: Uuid) -> Result<Vec<Resume>, AppError>;

    async fn find_resume(&self, id: Uuid) -> Result<Option<Resume>, AppError>;

    async fn find_resume_by_slug(&self, slug: &str) -> Result<Option<Resume>, AppError>;

    /// Updates only the display name. Returns `None` if the row vanished.
    async fn rename_resume(&self, id: Uuid, file_name: &str) -> Result<Option<Resume>, AppError>;
}
