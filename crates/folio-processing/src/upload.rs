use bytes::Bytes;

/// A file part pulled out of a form submission
///
/// Holds the raw bytes exactly as received. Nothing here has been checked yet.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub field_name: String,
    pub bytes: Bytes,
    /// Size announced by the client. Can disagree with `bytes.len()`.
    pub declared_size: u64,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl UploadedImage {
    pub fn new(field_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self {
            field_name: field_name.into(),
            declared_size: bytes.len() as u64,
            bytes,
            file_name: None,
            content_type: None,
        }
    }

    pub fn with_declared_size(mut self, declared_size: u64) -> Self {
        self.declared_size = declared_size;
        self
    }

    pub fn with_file_name(mut self, file_name: Option<String>) -> Self {
        self.file_name = file_name.filter(|name| !name.is_empty());
        self
    }

    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type.filter(|ct| !ct.is_empty());
        self
    }

    /// Browsers send an empty part when the file input was left blank.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The larger of the declared and the actual size
    pub fn effective_size(&self) -> u64 {
        self.declared_size.max(self.bytes.len() as u64)
    }
}
