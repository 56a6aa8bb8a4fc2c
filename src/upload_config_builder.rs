use ::std::path::PathBuf;
use ::url::Url;

use crate::AuthToken;
use crate::UploadConfig;

/// This is for easing the building of [`UploadConfig`](crate::UploadConfig).
///
/// For full documentation see there.
///
/// ```rust
/// use ::onfido_document_upload::AuthToken;
/// use ::onfido_document_upload::UploadConfig;
///
/// let config = UploadConfig::builder()
///     .auth_token(AuthToken::new("api_sandbox.abc"))
///     .applicant_id("a1b2")
///     .document("./passport.jpg", "image/jpeg")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct UploadConfigBuilder {
    config: UploadConfig,
}

impl UploadConfigBuilder {
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.config.endpoint = endpoint;
        self
    }

    pub fn auth_token(mut self, auth_token: AuthToken) -> Self {
        self.config.auth_token = auth_token;
        self
    }

    pub fn document_type(mut self, document_type: &str) -> Self {
        self.config.document_type = document_type.to_string();
        self
    }

    pub fn applicant_id(mut self, applicant_id: &str) -> Self {
        self.config.applicant_id = applicant_id.to_string();
        self
    }

    /// Sets the document to upload, and the content type it is declared as.
    pub fn document<P>(mut self, path: P, content_type: &str) -> Self
    where
        P: Into<PathBuf>,
    {
        self.config.document_path = path.into();
        self.config.document_content_type = content_type.to_string();
        self
    }

    pub fn build(self) -> UploadConfig {
        self.config
    }
}

impl Default for UploadConfigBuilder {
    fn default() -> Self {
        Self {
            config: UploadConfig::default(),
        }
    }
}
