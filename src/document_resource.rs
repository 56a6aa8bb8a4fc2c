use ::serde::Deserialize;
use ::serde::Serialize;

/// The document resource Onfido returns once an upload is accepted.
///
/// Only `id` is always present. Everything else depends on the API version
/// and on what was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResource {
    pub id: String,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub download_href: Option<String>,

    #[serde(default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub file_type: Option<String>,

    #[serde(default)]
    pub file_size: Option<u64>,

    #[serde(default, rename = "type")]
    pub document_type: Option<String>,

    #[serde(default)]
    pub side: Option<String>,

    #[serde(default)]
    pub issuing_country: Option<String>,

    #[serde(default)]
    pub applicant_id: Option<String>,
}
