use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, Resume};
use crate::models::user::User;
use crate::store::Store;

/// In-memory store mirroring the Postgres constraints (unique email, unique slug).
/// `fail_resume_inserts` simulates a database that rejects new resume rows.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    resumes: Mutex<Vec<Resume>>,
    fail_resume_inserts: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_resume_inserts() -> Self {
        Self {
            fail_resume_inserts: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_resume(&self, resume: NewResume) -> Result<Resume, AppError> {
        if self.fail_resume_inserts {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        let mut resumes = self.resumes.lock().unwrap();
        if resumes
            .iter()
            .any(|r| r.shareable_slug == resume.shareable_slug)
        {
            return Err(AppError::Internal(anyhow::anyhow!(
                "duplicate slug {}",
                resume.shareable_slug
            )));
        }
        // Strictly increasing timestamps keep newest-first ordering deterministic.
        let created_at = resumes
            .iter()
            .map(|r| r.created_at + Duration::milliseconds(1))
            .max()
            .map_or_else(Utc::now, |next| next.max(Utc::now()));
        let row = Resume {
            id: Uuid::new_v4(),
            user_id: resume.user_id,
            file_name: resume.file_name,
            file_key: resume.file_key,
            file_url: resume.file_url,
            shareable_slug: resume.shareable_slug,
            created_at,
        };
        resumes.push(row.clone());
        Ok(row)
    }

    async fn list_resumes(&self, user_id: Uuid) -> Result<Vec<Resume>, AppError> {
        let resumes = self.resumes.lock().unwrap();
        let mut owned: Vec<Resume> = resumes
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find_resume(&self, id: Uuid) -> Result<Option<Resume>, AppError> {
        let resumes = self.resumes.lock().unwrap();
        Ok(resumes.iter().find(|r| r.id == id).cloned())
    }

    async fn find_resume_by_slug(&self, slug: &str) -> Result<Option<Resume>, AppError> {
        let resumes = self.resumes.lock().unwrap();
        Ok(resumes.iter().find(|r| r.shareable_slug == slug).cloned())
    }

    async fn rename_resume(&self, id: Uuid, file_name: &str) -> Result<Option<Resume>, AppError> {
        let mut resumes = self.resumes.lock().unwrap();
        Ok(resumes.iter_mut().find(|r| r.id == id).map(|r| {
            r.file_name = file_name.to_string();
            r.clone()
        }))
    }
}
