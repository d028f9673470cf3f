use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;
use crate::storage::{public_object_url, ObjectStore};

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: String,
}

/// In-memory bucket. `fail_puts` simulates an unreachable store.
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, StoredObject>>,
    fail_puts: bool,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_puts: true,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), AppError> {
        if self.fail_puts {
            return Err(AppError::Storage("bucket unreachable".to_string()));
        }
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        public_object_url("http://storage.test/public", "resumes", key)
    }
}
