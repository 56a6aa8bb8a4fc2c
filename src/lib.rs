//!
//! Onfido Document Upload sends one identity document to the Onfido API,
//! as a `multipart/form-data` request, and hands back the response.
//!
//!  * Create an [`UploadConfig`], either from the environment or with its builder,
//!  * pass it to an [`Uploader`],
//!  * call [`Uploader::upload()`] to build and send the request,
//!  * then inspect the [`UploadResponse`] you get back.
//!
//! Nothing is retried, and only one request is made.
//!
//! ## Getting Started
//!
//! ```rust
//! # async fn test() -> Result<(), Box<dyn ::std::error::Error>> {
//! #
//! use ::onfido_document_upload::UploadConfig;
//! use ::onfido_document_upload::Uploader;
//!
//! // Reads `ONFIDO_AUTH_TOKEN`, and any overrides, from the environment.
//! let config = UploadConfig::from_env()?;
//! let uploader = Uploader::new(config)?;
//!
//! let response = uploader.upload().await?;
//! println!("{response}");
//! #
//! # Ok(())
//! # }
//! ```
//!
//! ## The Request
//!
//! The request is always a `POST` to the configured endpoint, with:
//!
//!  * `Authorization: Token token=<ONFIDO_AUTH_TOKEN>`,
//!    where a missing token is sent as empty rather than stopping the upload.
//!  * `Content-Type: multipart/form-data; boundary=<boundary>`.
//!  * A body holding the `type` and `applicant_id` fields, in that order,
//!    followed by the document under `file`.
//!
//! The boundary is random, and is guaranteed to not appear within any of the
//! field values or the document itself.
//!
//! ## Building Forms
//!
//! The multipart encoding is available on its own, in the [`multipart`] module.
//!
//! ```rust
//! # async fn test() -> Result<(), Box<dyn ::std::error::Error>> {
//! #
//! use ::onfido_document_upload::multipart::MultipartForm;
//! use ::onfido_document_upload::multipart::Part;
//!
//! let body = MultipartForm::new()
//!     .add_text("type", "passport")
//!     .add_part("file", Part::bytes(b"...".as_slice()).file_name("passport.png"))
//!     .encode()
//!     .await?;
//! #
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every failure is an [`UploadError`], and each one names the [`UploadStage`]
//! it came from. The document is read before any request is made,
//! so a missing document never results in a request.
//!

#![forbid(unsafe_code)]

pub(crate) mod internals;

pub mod multipart;
pub mod transport_layer;

mod auth_token;
pub use self::auth_token::*;

mod document_resource;
pub use self::document_resource::*;

mod error;
pub use self::error::*;

pub mod upload_config;
pub use self::upload_config::UploadConfig;

mod upload_config_builder;
pub use self::upload_config_builder::*;

mod upload_request;
pub use self::upload_request::*;

mod upload_response;
pub use self::upload_response::*;

mod uploader;
pub use self::uploader::*;

pub use self::internals::ApiKeyFormatter;
pub use self::internals::RequestPathFormatter;
pub use self::internals::StatusCodeFormatter;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod util;
