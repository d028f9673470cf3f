//! Object storage for uploaded resume files.
//!
//! Only writes are needed; reads are served straight from the bucket's public URL.

pub mod s3;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

pub const DEFAULT_CONTENT_TYPE: &str = "application/pdf";

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), AppError>;

    /// Public URL of `key`. Derived without contacting the store.
    fn public_url(&self, key: &str) -> String;
}

/// Storage key for an upload: `{unix-millis}-{file_name}`.
///
/// Two uploads of the same name within one millisecond map to the same key.
pub fn storage_key(timestamp_millis: i64, file_name: &str) -> String {
    format!("{timestamp_millis}-{file_name}")
}

/// Builds `{base}/{bucket}/{key}`, tolerating a trailing slash on `base`.
/// The key is percent-encoded so names with spaces, `#` or `?` stay one path segment.
pub fn public_object_url(base: &str, bucket: &str, key: &str) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        bucket,
        urlencoding::encode(key)
    )
}
