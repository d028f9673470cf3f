use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::storage::{public_object_url, ObjectStore};

/// S3-compatible bucket (AWS, MinIO, Supabase storage).
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_url: String,
}

impl S3Storage {
    /// Constructs a path-style S3 client from static credentials.
    pub async fn from_config(config: &Config) -> Self {
        let credentials = Credentials::new(
            &config.aws_access_key_id,
            &config.aws_secret_access_key,
            None,
            None,
            "resumelink-static",
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.s3_region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(&config.s3_endpoint)
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();

        Self {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            bucket: config.s3_bucket.clone(),
            public_url: config.s3_public_url.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Storage {
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), AppError> {
        let size = body.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                AppError::Storage(format!(
                    "S3 upload failed: {}",
                    aws_sdk_s3::error::DisplayErrorContext(&e)
                ))
            })?;

        info!("Uploaded {size} bytes to s3://{}/{}", self.bucket, key);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        public_object_url(&self.public_url, &self.bucket, key)
    }
}
