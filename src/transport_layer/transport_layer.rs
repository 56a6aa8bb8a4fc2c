use ::bytes::Bytes;
use ::http::Request;
use ::http::Response;
use ::std::fmt::Debug;
use ::std::future::Future;
use ::std::pin::Pin;

use crate::UploadError;

/// Sends a fully built request, and returns the whole response.
///
/// Failures to connect or send are a `Transport` error,
/// and failures while reading the body are a `ResponseRead` error.
/// Nothing is retried.
pub trait TransportLayer: Debug + Send + Sync {
    fn send<'a>(
        &'a self,
        request: Request<Bytes>,
    ) -> Pin<Box<dyn 'a + Future<Output = Result<Response<Bytes>, UploadError>> + Send>>;
}
