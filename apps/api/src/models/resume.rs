use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Display name; the only mutable column.
    pub file_name: String,
    pub file_key: String,
    pub file_url: String,
    pub shareable_slug: String,
    pub created_at: DateTime<Utc>,
}

/// Everything needed to insert a resume row. Id and timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub user_id: Uuid,
    pub file_name: String,
    pub file_key: String,
    pub file_url: String,
    pub shareable_slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_serializes_camel_case() {
        let resume = Resume {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            file_name: "r.pdf".to_string(),
            file_key: "1700000000000-r.pdf".to_string(),
            file_url: "http://cdn/resumes/1700000000000-r.pdf".to_string(),
            shareable_slug: "aB3dE5gH7j".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&resume).unwrap();
        assert_eq!(value["shareableSlug"], "aB3dE5gH7j");
        assert_eq!(value["fileName"], "r.pdf");
        assert!(value.get("userId").is_some());
        assert!(value.get("createdAt").is_some());
    }
}
