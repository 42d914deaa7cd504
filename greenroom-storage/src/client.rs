#[derive(Debug)]
/// An error that can occur when uploading an object.
pub enum StorageError {
    /// An error that occurred when making a request.
    ReqwestError(reqwest::Error),
    /// The store rejected the upload.
    UploadRejected {
        /// The HTTP status code.
        status: u16,
    },
}
impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ReqwestError(e) => write!(f, "Reqwest error: {e}"),
            StorageError::UploadRejected { status } => write!(f, "Upload rejected: {status}"),
        }
    }
}
impl std::error::Error for StorageError {}
impl From<reqwest::Error> for StorageError {
    fn from(e: reqwest::Error) -> Self {
        StorageError::ReqwestError(e)
    }
}
/// A result type for the client.
pub type StorageResult<T> = Result<T, StorageError>;

/// A client for one bucket of the object store.
pub struct Client {
    base_url: String,
    bucket: String,
    client: reqwest::Client,
}
impl Client {
    /// Create a new client for a bucket.
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bucket: bucket.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Upload an object and return its public retrieval URL.
    pub async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> StorageResult<String> {
        let response = self
            .client
            .post(format!("{}/v0/b/{}/o", self.base_url, self.bucket))
            .query(&[("name", path)])
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StorageError::UploadRejected {
                status: response.status().as_u16(),
            });
        }
        Ok(self.public_url(path))
    }

    /// The public retrieval URL of an object. The store addresses nested
    /// objects with an escaped path segment.
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/v0/b/{}/o/{}?alt=media",
            self.base_url,
            self.bucket,
            path.replace('/', "%2F")
        )
    }
}
