//!
//! This supplies the building blocks for encoding `multipart/form-data` bodies.
//!
//! A form is built using [`MultipartForm`] and [`Part`],
//! and then encoded into a [`MultipartBody`].
//!
//! # Example
//!
//! ```rust
//! # async fn test() -> Result<(), Box<dyn ::std::error::Error>> {
//! #
//! use ::onfido_document_upload::multipart::MultipartForm;
//!
//! let body = MultipartForm::new()
//!     .add_text("type", "national_identity_card")
//!     .add_text("applicant_id", "xxxx")
//!     .add_file("file", "./sample_driving_licence.png", "image/png")?
//!     .encode()
//!     .await?;
//!
//! // `multipart/form-data; boundary=...`
//! let content_type = body.content_type();
//! #
//! # Ok(()) }
//! ```
//!

mod multipart_body;
pub use self::multipart_body::*;

mod multipart_form;
pub use self::multipart_form::*;

mod part;
pub use self::part::*;
