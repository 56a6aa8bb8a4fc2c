use ::std::env;
use ::std::path::PathBuf;
use ::url::Url;

use crate::AuthToken;
use crate::UploadConfigBuilder;
use crate::UploadError;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.eu.onfido.com/v3.4/documents";
pub const DEFAULT_DOCUMENT_PATH: &str = "./sample_driving_licence.png";
pub const DEFAULT_DOCUMENT_TYPE: &str = "national_identity_card";
pub const DEFAULT_APPLICANT_ID: &str = "xxxx";
pub const DEFAULT_DOCUMENT_CONTENT_TYPE: &str = "image/png";

pub const ONFIDO_API_ENDPOINT: &str = "ONFIDO_API_ENDPOINT";
pub const ONFIDO_DOCUMENT_PATH: &str = "ONFIDO_DOCUMENT_PATH";
pub const ONFIDO_DOCUMENT_TYPE: &str = "ONFIDO_DOCUMENT_TYPE";
pub const ONFIDO_APPLICANT_ID: &str = "ONFIDO_APPLICANT_ID";
pub const ONFIDO_DOCUMENT_CONTENT_TYPE: &str = "ONFIDO_DOCUMENT_CONTENT_TYPE";

/// The field name the document is uploaded under.
pub const DOCUMENT_FIELD_NAME: &str = "file";

/// Everything needed to upload one document.
///
/// Build this with [`UploadConfig::builder()`], or load it from the
/// environment with [`UploadConfig::from_env()`].
#[derive(Debug, Clone, PartialEq)]
pub struct UploadConfig {
    /// Where the document is posted to.
    ///
    /// **Defaults** to the Onfido EU documents endpoint.
    pub endpoint: Url,

    /// Sent as `Authorization: Token token=<value>`.
    ///
    /// **Defaults** to not being set, which still sends the request.
    pub auth_token: AuthToken,

    /// The `type` form field.
    pub document_type: String,

    /// The `applicant_id` form field.
    pub applicant_id: String,

    /// The document to upload. Its basename is sent as the file name.
    pub document_path: PathBuf,

    /// The declared content type of the document. This is never sniffed.
    ///
    /// **Defaults** to `image/png`.
    pub document_content_type: String,
}

impl UploadConfig {
    pub fn builder() -> UploadConfigBuilder {
        UploadConfigBuilder::default()
    }

    /// Loads the config from the process environment,
    /// using the defaults for anything not set.
    pub fn from_env() -> Result<Self, UploadError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the config from the lookup given,
    /// using the defaults for anything it does not return.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UploadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup_non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut config = Self::default();

        if let Some(raw_endpoint) = lookup_non_empty(ONFIDO_API_ENDPOINT) {
            config.endpoint = parse_endpoint(&raw_endpoint)?;
        }
        if let Some(document_path) = lookup_non_empty(ONFIDO_DOCUMENT_PATH) {
            config.document_path = PathBuf::from(document_path);
        }
        if let Some(document_type) = lookup_non_empty(ONFIDO_DOCUMENT_TYPE) {
            config.document_type = document_type;
        }
        if let Some(applicant_id) = lookup_non_empty(ONFIDO_APPLICANT_ID) {
            config.applicant_id = applicant_id;
        }
        if let Some(content_type) = lookup_non_empty(ONFIDO_DOCUMENT_CONTENT_TYPE) {
            config.document_content_type = content_type;
        }

        config.auth_token = AuthToken::from_lookup(&lookup);

        Ok(config)
    }

    pub fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// The text fields sent ahead of the document, in wire order.
    pub fn form_fields(&self) -> [(&str, &str); 2] {
        [
            ("type", self.document_type.as_str()),
            ("applicant_id", self.applicant_id.as_str()),
        ]
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_API_ENDPOINT)
                .expect("Default API endpoint should always be a valid url"),
            auth_token: AuthToken::none(),
            document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
            applicant_id: DEFAULT_APPLICANT_ID.to_string(),
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            document_content_type: DEFAULT_DOCUMENT_CONTENT_TYPE.to_string(),
        }
    }
}

pub(crate) fn parse_endpoint(raw_endpoint: &str) -> Result<Url, UploadError> {
    Url::parse(raw_endpoint).map_err(|source| UploadError::RequestConstruction {
        request: format!("POST {raw_endpoint}"),
        message: "endpoint is not a valid url".to_string(),
        source: Some(source.into()),
    })
}
