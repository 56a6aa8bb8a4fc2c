use ::bytes::Bytes;
use ::http::Request;
use ::http::Response;
use ::reqwest::Client;
use ::std::future::Future;
use ::std::pin::Pin;
use ::tracing::debug;

use crate::UploadError;
use crate::transport_layer::TransportLayer;

/// Sends requests over the network using [`reqwest`], with TLS.
#[derive(Debug, Clone)]
pub struct HttpTransportLayer {
    client: Client,
}

impl HttpTransportLayer {
    pub fn new() -> Result<Self, UploadError> {
        let client = Client::builder()
            .build()
            .map_err(|source| UploadError::Transport {
                request: "building http client".to_string(),
                source: source.into(),
            })?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl TransportLayer for HttpTransportLayer {
    fn send<'a>(
        &'a self,
        request: Request<Bytes>,
    ) -> Pin<Box<dyn 'a + Future<Output = Result<Response<Bytes>, UploadError>> + Send>> {
        Box::pin(async move {
            let debug_request_format = format!("{} {}", request.method(), request.uri());
            let reqwest_request = ::reqwest::Request::try_from(request).map_err(|source| {
                UploadError::RequestConstruction {
                    request: debug_request_format.clone(),
                    message: "cannot be converted for the http client".to_string(),
                    source: Some(source.into()),
                }
            })?;

            debug!(request = %debug_request_format, "Sending request");
            let reqwest_response = self
                .client
                .execute(reqwest_request)
                .await
                .map_err(|source| UploadError::Transport {
                    request: debug_request_format,
                    source: source.into(),
                })?;

            let status = reqwest_response.status();
            let version = reqwest_response.version();
            let headers = reqwest_response.headers().clone();
            let response_bytes = reqwest_response
                .bytes()
                .await
                .map_err(|source| UploadError::ResponseRead {
                    source: source.into(),
                })?;

            let mut response = Response::new(response_bytes);
            *response.status_mut() = status;
            *response.version_mut() = version;
            *response.headers_mut() = headers;

            Ok(response)
        })
    }
}

#[cfg(test)]
mod test_send {
    use super::*;
    use crate::testing::spawn_router;
    use ::axum::Router;
    use ::axum::body::Bytes as AxumBytes;
    use ::axum::http::HeaderMap;
    use ::axum::http::StatusCode;
    use ::axum::routing::post;
    use ::http::header;
    use ::pretty_assertions::assert_eq;

    async fn route_echo_authorization(headers: HeaderMap, body: AxumBytes) -> (StatusCode, String) {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        (StatusCode::CREATED, format!("{authorization} {}", body.len()))
    }

    #[tokio::test]
    async fn it_should_send_request_and_read_whole_response() {
        let router = Router::new().route("/v3.4/documents", post(route_echo_authorization));
        let (_serve_handle, base_url) = spawn_router(router);
        let url = base_url.join("/v3.4/documents").unwrap();

        let request = Request::builder()
            .method("POST")
            .uri(url.as_str())
            .header(header::AUTHORIZATION, "Token token=abc")
            .body(Bytes::from_static(b"12345"))
            .unwrap();

        let response = HttpTransportLayer::new()
            .unwrap()
            .send(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.body().as_ref(), b"Token token=abc 5");
    }

    #[tokio::test]
    async fn it_should_fail_with_transport_error_when_nothing_is_listening() {
        let url = crate::testing::new_unused_url();

        let request = Request::builder()
            .method("POST")
            .uri(url.as_str())
            .body(Bytes::new())
            .unwrap();

        let result = HttpTransportLayer::new().unwrap().send(request).await;

        assert!(matches!(result, Err(UploadError::Transport { .. })));
    }
}
