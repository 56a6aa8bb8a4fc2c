use ::bytes::Bytes;

/// A fully serialized `multipart/form-data` body,
/// along with the content type that describes it.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartBody {
    content_type: String,
    boundary: String,
    bytes: Bytes,
}

impl MultipartBody {
    pub(crate) fn new(content_type: String, boundary: String, bytes: Bytes) -> Self {
        Self {
            content_type,
            boundary,
            bytes,
        }
    }

    /// Returns the value for the `Content-Type` header,
    /// i.e. `multipart/form-data; boundary=<boundary>`.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn as_bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
