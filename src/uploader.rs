use ::tracing::debug;
use ::tracing::info;
use ::tracing::warn;

use crate::UploadConfig;
use crate::UploadError;
use crate::UploadRequest;
use crate::UploadResponse;
use crate::internals::DebugResponseBody;
use crate::internals::StatusCodeFormatter;
use crate::multipart::MultipartForm;
use crate::transport_layer::HttpTransportLayer;
use crate::transport_layer::TransportLayer;
use crate::upload_config::DOCUMENT_FIELD_NAME;

///
/// Uploads the configured document, once.
///
/// The stages run in order, and the first fatal failure stops the upload:
///
///  * the credential is checked (a missing one is only warned about),
///  * the document is read and the multipart body is built,
///  * the request is built,
///  * the request is sent, and the whole response is read.
///
/// The document is always read before anything is sent,
/// so a missing document means no request is made.
///
#[derive(Debug)]
pub struct Uploader<T = HttpTransportLayer> {
    config: UploadConfig,
    transport: T,
}

impl Uploader<HttpTransportLayer> {
    /// Creates an uploader which sends over the network.
    pub fn new(config: UploadConfig) -> Result<Self, UploadError> {
        let transport = HttpTransportLayer::new()?;
        Ok(Self::new_with_transport(config, transport))
    }
}

impl<T> Uploader<T>
where
    T: TransportLayer,
{
    pub fn new_with_transport(config: UploadConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Reads the document and builds the request, without sending it.
    pub async fn build_request(&self) -> Result<UploadRequest, UploadError> {
        let config = &self.config;
        let form = config
            .form_fields()
            .into_iter()
            .fold(MultipartForm::new(), |form, (name, value)| {
                form.add_text(name, value)
            })
            .add_file(
                DOCUMENT_FIELD_NAME,
                &config.document_path,
                &config.document_content_type,
            )?;

        let body = form.encode().await?;
        UploadRequest::new(config.endpoint.clone(), &config.auth_token, body)
    }

    /// Runs the upload, returning the response for any status code.
    ///
    /// A non-2xx status is still an `Ok`, as it was a response.
    pub async fn upload(&self) -> Result<UploadResponse, UploadError> {
        if let Err(err) = self.config.auth_token.require() {
            warn!("{err}, sending with an empty token");
        }

        let request = self.build_request().await?;
        let debug_request_format = request.debug_request_format();
        let request_url = request.url().to_string();
        debug!(
            request = %debug_request_format,
            len = request.body().len(),
            "Built upload request"
        );

        let http_request = request.into_http_request()?;
        info!(request = %debug_request_format, "Uploading document");

        let http_response = self.transport.send(http_request).await?;
        let response = UploadResponse::new(request_url, http_response);

        info!(
            url = response.request_url(),
            status = %StatusCodeFormatter(response.status_code()),
            "Received response"
        );
        debug!(body = %DebugResponseBody(&response), "Response body");
        if let Some(document) = response.document() {
            info!(document_id = %document.id, "Document uploaded");
        }

        Ok(response)
    }
}
