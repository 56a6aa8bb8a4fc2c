use ::bytes::Bytes;
use ::http::HeaderMap;
use ::http::HeaderName;
use ::http::HeaderValue;
use ::http::Method;
use ::http::Request;
use ::http::header;
use ::url::Url;

use crate::AuthToken;
use crate::UploadError;
use crate::internals::RequestPathFormatter;
use crate::multipart::MultipartBody;

///
/// A single `POST` of a multipart body, ready to be sent.
///
/// It carries the `Authorization` header, and a `Content-Type` header
/// whose boundary is the one used within the body.
///
#[derive(Debug, Clone)]
pub struct UploadRequest {
    url: Url,
    headers: HeaderMap,
    body: MultipartBody,
}

impl UploadRequest {
    pub fn new(url: Url, auth_token: &AuthToken, body: MultipartBody) -> Result<Self, UploadError> {
        let debug_request_format = RequestPathFormatter::new(Method::POST, url.clone());
        let mut headers = HeaderMap::new();

        headers.insert(header::AUTHORIZATION, auth_token.authorization_header_value()?);

        let (header_name, header_value) =
            build_content_type_header(body.content_type(), &debug_request_format)?;
        headers.insert(header_name, header_value);

        Ok(Self { url, headers, body })
    }

    pub fn method(&self) -> Method {
        Method::POST
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &MultipartBody {
        &self.body
    }

    pub fn debug_request_format(&self) -> RequestPathFormatter {
        RequestPathFormatter::new(self.method(), self.url.clone())
    }

    /// Converts this into the `http::Request` handed to a transport.
    pub fn into_http_request(self) -> Result<Request<Bytes>, UploadError> {
        let debug_request_format = self.debug_request_format();
        let mut request_builder = Request::builder()
            .uri(self.url.as_str())
            .method(self.method());

        // Put headers into the request
        for (header_name, header_value) in &self.headers {
            request_builder = request_builder.header(header_name, header_value);
        }

        request_builder
            .body(self.body.into_bytes())
            .map_err(|source| UploadError::RequestConstruction {
                request: debug_request_format.to_string(),
                message: "invalid request".to_string(),
                source: Some(source.into()),
            })
    }
}

fn build_content_type_header(
    content_type: &str,
    debug_request_format: &RequestPathFormatter,
) -> Result<(HeaderName, HeaderValue), UploadError> {
    let header_value =
        HeaderValue::from_str(content_type).map_err(|source| UploadError::RequestConstruction {
            request: debug_request_format.to_string(),
            message: format!("Failed to store header content type '{content_type}'"),
            source: Some(source.into()),
        })?;

    Ok((header::CONTENT_TYPE, header_value))
}
