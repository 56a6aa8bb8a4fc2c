use ::std::fmt;
use ::std::io;
use ::std::path::PathBuf;
use ::thiserror::Error;

pub type BoxError = Box<dyn ::std::error::Error + Send + Sync>;

/// Every way an upload can fail.
///
/// Each variant belongs to one [`UploadStage`], which is what gets reported
/// to the user when the upload is halted.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No auth token was found in the environment.
    ///
    /// This is reported, but the upload still goes ahead with an empty token.
    #[error("API key not set, `{variable}` is missing or empty")]
    ConfigMissing { variable: &'static str },

    #[error("document '{}' was not found", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read document '{}'", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse '{content_type}' as a Mime type")]
    InvalidMimeType {
        content_type: String,
        #[source]
        source: ::mime::FromStrError,
    },

    #[error("multipart form has no parts to encode")]
    EmptyForm,

    #[error("no boundary could be found that is absent from the form content, gave up after {tries} tries")]
    BoundaryCollision { tries: u32 },

    #[error("failed to write multipart body")]
    BodyWrite {
        #[source]
        source: BoxError,
    },

    #[error("failed to build request {request}, {message}")]
    RequestConstruction {
        request: String,
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("request {request} failed")]
    Transport {
        request: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to read response body")]
    ResponseRead {
        #[source]
        source: BoxError,
    },
}

impl UploadError {
    pub fn stage(&self) -> UploadStage {
        match self {
            Self::ConfigMissing { .. } => UploadStage::CredentialResolution,
            Self::FileNotFound { .. }
            | Self::FileRead { .. }
            | Self::InvalidMimeType { .. }
            | Self::EmptyForm
            | Self::BoundaryCollision { .. }
            | Self::BodyWrite { .. } => UploadStage::FileAccess,
            Self::RequestConstruction { .. } => UploadStage::RequestConstruction,
            Self::Transport { .. } => UploadStage::Dispatch,
            Self::ResponseRead { .. } => UploadStage::ResponseRead,
        }
    }

    /// Returns true if this error should halt the upload.
    ///
    /// Only a missing credential is allowed through.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::ConfigMissing { .. })
    }
}

/// The stages an upload passes through, in order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UploadStage {
    CredentialResolution,
    FileAccess,
    RequestConstruction,
    Dispatch,
    ResponseRead,
}

impl fmt::Display for UploadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CredentialResolution => "resolving credential",
            Self::FileAccess => "reading document",
            Self::RequestConstruction => "creating the request",
            Self::Dispatch => "making the request",
            Self::ResponseRead => "reading response body",
        };

        write!(f, "{name}")
    }
}
