use data_encoding::BASE64;

/// A file the user has picked but not yet uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAsset {
    /// The raw file bytes.
    pub bytes: Vec<u8>,
    /// The original file name, for display.
    pub file_name: String,
    /// The MIME type the bytes are uploaded with.
    pub content_type: String,
}
impl PendingAsset {
    /// Create a pending asset from a picked file.
    pub fn new(
        bytes: Vec<u8>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        PendingAsset {
            bytes,
            file_name: file_name.into(),
            content_type: content_type.into(),
        }
    }

    /// A `data:` URL of the bytes, for local preview before upload. Distinct
    /// from the public URL the asset will have once uploaded.
    pub fn preview_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            BASE64.encode(&self.bytes)
        )
    }
}
