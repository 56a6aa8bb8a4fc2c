use ::bytes::Bytes;
use ::http::HeaderMap;
use ::http::HeaderValue;
use ::http::Response;
use ::http::StatusCode;
use ::http::header;
use ::serde::de::DeserializeOwned;
use ::std::fmt;

use crate::DocumentResource;

///
/// The `UploadResponse` is what the API sent back for the upload.
///
/// It holds the status code, headers, and the whole body,
/// which has already been read in full.
///
/// Displaying it prints the status code and the raw body,
/// which is what the `onfido-upload` binary writes out:
///
/// ```text
/// Status Code: 201
/// Response: {"id":"..."}
/// ```
///
#[derive(Clone, Debug)]
pub struct UploadResponse {
    request_url: String,
    headers: HeaderMap<HeaderValue>,
    status_code: StatusCode,
    response_body: Bytes,
}

impl UploadResponse {
    pub fn new(request_url: String, response: Response<Bytes>) -> Self {
        let (parts, response_body) = response.into_parts();

        Self {
            request_url,
            headers: parts.headers,
            status_code: parts.status,
            response_body,
        }
    }

    /// Returns the underlying response, extracted as a UTF-8 string.
    ///
    /// Invalid UTF-8 is replaced, rather than failing.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).to_string()
    }

    /// Deserializes the response, as JSON, into the type given.
    pub fn json<T>(&self) -> Result<T, ::serde_json::Error>
    where
        T: DeserializeOwned,
    {
        ::serde_json::from_slice::<T>(self.as_bytes())
    }

    /// Deserializes the response as the document that was created.
    ///
    /// Only successful uploads return a document.
    pub fn document(&self) -> Option<DocumentResource> {
        if !self.status_code.is_success() {
            return None;
        }

        self.json::<DocumentResource>().ok()
    }

    /// Returns the raw underlying response as `Bytes`.
    #[must_use]
    pub fn as_bytes(&self) -> &Bytes {
        &self.response_body
    }

    /// Consumes this returning the underlying `Bytes`
    /// in the response.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.response_body
    }

    /// The status_code of the response.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }

    /// The URL that was used to produce this response.
    #[must_use]
    pub fn request_url(&self) -> &str {
        &self.request_url
    }

    /// Returns the headers returned from the response.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        &self.headers
    }

    #[must_use]
    pub fn maybe_content_type(&self) -> Option<String> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|content_type| content_type.to_str().ok())
            .map(|content_type| content_type.to_string())
    }
}

impl fmt::Display for UploadResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status Code: {}", self.status_code.as_u16())?;
        write!(f, "Response: {}", self.text())
    }
}

#[cfg(test)]
mod test_text {
    use super::*;

    #[test]
    fn it_should_return_body_verbatim() {
        let response = new_response(201, r#"{"id":"abc","file_name":"sample_driving_licence.png"}"#);

        assert_eq!(
            response.text(),
            r#"{"id":"abc","file_name":"sample_driving_licence.png"}"#
        );
    }

    pub(super) fn new_response(status: u16, body: &'static str) -> UploadResponse {
        let response = Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap();

        UploadResponse::new("https://api.eu.onfido.com/v3.4/documents".to_string(), response)
    }
}




#[cfg(test)]
mod test_maybe_content_type {
    use super::test_text::new_response;

    #[test]
    fn it_should_return_content_type_header() {
        let response = new_response(201, "{}");

        assert_eq!(
            response.maybe_content_type().as_deref(),
            Some("application/json; charset=utf-8")
        );
    }
}
