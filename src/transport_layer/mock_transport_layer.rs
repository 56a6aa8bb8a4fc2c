use ::axum::Router;
use ::axum::body::Body as AxumBody;
use ::bytes::Bytes;
use ::http::Request;
use ::http::Response;
use ::http_body_util::BodyExt;
use ::std::fmt::Debug;
use ::std::future::Future;
use ::std::pin::Pin;
use ::std::sync::atomic::AtomicUsize;
use ::std::sync::atomic::Ordering;
use ::tower::util::ServiceExt;

use crate::UploadError;
use crate::transport_layer::TransportLayer;

/// Sends requests straight to an Axum [`Router`], without any networking.
///
/// This is for running uploads against a stand-in for the real API.
pub struct MockTransportLayer {
    router: Router,
    requests_sent: AtomicUsize,
}

impl MockTransportLayer {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            requests_sent: AtomicUsize::new(0),
        }
    }

    /// How many requests have been passed to the router so far.
    pub fn requests_sent(&self) -> usize {
        self.requests_sent.load(Ordering::SeqCst)
    }
}

impl TransportLayer for MockTransportLayer {
    fn send<'a>(
        &'a self,
        request: Request<Bytes>,
    ) -> Pin<Box<dyn 'a + Future<Output = Result<Response<Bytes>, UploadError>> + Send>> {
        Box::pin(async move {
            self.requests_sent.fetch_add(1, Ordering::SeqCst);

            let request = request.map(AxumBody::from);
            let response = self
                .router
                .clone()
                .oneshot(request)
                .await
                .unwrap_or_else(|never| match never {});

            let (parts, response_body) = response.into_parts();
            let response_bytes = response_body
                .collect()
                .await
                .map_err(|source| UploadError::ResponseRead {
                    source: source.into(),
                })?
                .to_bytes();

            Ok(Response::from_parts(parts, response_bytes))
        })
    }
}

impl Debug for MockTransportLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MockTransportLayer {{ router: {{unknown}}, requests_sent: {} }}",
            self.requests_sent()
        )
    }
}

#[cfg(test)]
mod test_send {
    use super::*;
    use ::axum::http::StatusCode;
    use ::axum::routing::post;
    use ::pretty_assertions::assert_eq;

    #[tokio::test]
    async fn it_should_route_request_by_path() {
        let router = Router::new().route(
            "/v3.4/documents",
            post(|body: Bytes| async move { (StatusCode::CREATED, body) }),
        );
        let transport = MockTransportLayer::new(router);

        let request = Request::builder()
            .method("POST")
            .uri("https://api.eu.onfido.com/v3.4/documents")
            .body(Bytes::from_static(b"document"))
            .unwrap();
        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.body().as_ref(), b"document");
    }

    #[tokio::test]
    async fn it_should_count_requests_sent() {
        let transport = MockTransportLayer::new(Router::new());
        assert_eq!(transport.requests_sent(), 0);

        let request = Request::builder()
            .method("POST")
            .uri("https://api.eu.onfido.com/v3.4/documents")
            .body(Bytes::new())
            .unwrap();
        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(transport.requests_sent(), 1);
    }
}
