use ::bytes::Bytes;
use ::bytes::BytesMut;
use ::futures_util::TryStreamExt;
use ::mime::Mime;
use ::rust_multipart_rfc7578_2::client::multipart::Body as CommonMultipartBody;
use ::rust_multipart_rfc7578_2::client::multipart::Form;
use ::std::fmt::Display;
use ::std::io::Cursor;
use ::std::path::Path;
use ::std::pin::pin;
use ::tracing::debug;

use crate::UploadError;
use crate::multipart::MultipartBody;
use crate::multipart::Part;

/// How many boundaries are drawn before giving up on finding one
/// that does not appear in the content.
const MAX_BOUNDARY_TRIES: u32 = 10;

/// An ordered set of named parts, to be encoded as `multipart/form-data`.
///
/// Names are unique. Adding a part under a name already in use replaces
/// that part, keeping its original position.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    parts: Vec<(String, Part)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Creates a text part, and adds it to be sent.
    pub fn add_text<N, T>(self, name: N, text: T) -> Self
    where
        N: Display,
        T: Display,
    {
        self.add_part(name, Part::text(text))
    }

    /// Adds a new section to this multipart form to be sent.
    ///
    /// See [`Part`](crate::multipart::Part).
    pub fn add_part<N>(mut self, name: N, part: Part) -> Self
    where
        N: Display,
    {
        let name = name.to_string();
        match self.parts.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing_part)) => *existing_part = part,
            None => self.parts.push((name, part)),
        }

        self
    }

    /// Reads the file at `path` and adds it under `name`,
    /// declared as the `mime_type` given.
    pub fn add_file<N, P, M>(self, name: N, path: P, mime_type: M) -> Result<Self, UploadError>
    where
        N: Display,
        P: AsRef<Path>,
        M: AsRef<str>,
    {
        let part = Part::file(path)?.mime_type(mime_type)?;

        Ok(self.add_part(name, part))
    }

    pub fn parts(&self) -> impl Iterator<Item = (&str, &Part)> {
        self.parts.iter().map(|(name, part)| (name.as_str(), part))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Serializes the form into a body, along with its content type.
    ///
    /// The boundary is random, and re-drawn if it appears anywhere in the
    /// names or content of the parts.
    ///
    /// A form with no parts cannot be encoded, and is an error.
    pub async fn encode(self) -> Result<MultipartBody, UploadError> {
        self.encode_with(Form::default).await
    }

    /// Encodes using `new_form` to create each empty form,
    /// and so each boundary drawn.
    pub(crate) async fn encode_with<F>(self, mut new_form: F) -> Result<MultipartBody, UploadError>
    where
        F: FnMut() -> Form<'static>,
    {
        if self.parts.is_empty() {
            return Err(UploadError::EmptyForm);
        }

        for attempt in 1..=MAX_BOUNDARY_TRIES {
            let form = self.build_form(new_form());
            let content_type = form.content_type();
            let boundary = boundary_from_content_type(&content_type)?;

            if let Some(name) = find_boundary_collision(&self.parts, &boundary) {
                debug!(attempt, name, "Boundary found within form content, drawing another");
                continue;
            }

            let bytes = write_body(form.into()).await?;
            debug!(
                boundary = %boundary,
                parts = self.parts.len(),
                len = bytes.len(),
                "Encoded multipart body"
            );

            return Ok(MultipartBody::new(content_type, boundary, bytes));
        }

        Err(UploadError::BoundaryCollision {
            tries: MAX_BOUNDARY_TRIES,
        })
    }

    fn build_form(&self, mut form: Form<'static>) -> Form<'static> {
        for (name, part) in &self.parts {
            let reader = Cursor::new(part.bytes.clone());
            form.add_reader_2(
                name,
                reader,
                part.file_name.clone(),
                Some(part.mime_type.clone()),
                Vec::new(),
            );
        }

        form
    }
}

async fn write_body(body: CommonMultipartBody<'static>) -> Result<Bytes, UploadError> {
    let mut body = pin!(body);
    let mut buffer = BytesMut::new();

    while let Some(chunk) = body
        .try_next()
        .await
        .map_err(|source| UploadError::BodyWrite {
            source: source.into(),
        })?
    {
        buffer.extend_from_slice(&chunk);
    }

    Ok(buffer.freeze())
}

fn boundary_from_content_type(content_type: &str) -> Result<String, UploadError> {
    let parsed: Mime = content_type
        .parse()
        .map_err(|source| UploadError::InvalidMimeType {
            content_type: content_type.to_string(),
            source,
        })?;

    parsed
        .get_param(mime::BOUNDARY)
        .map(|boundary| boundary.as_str().to_string())
        .ok_or_else(|| UploadError::BodyWrite {
            source: format!("Content type '{content_type}' is missing a boundary").into(),
        })
}

/// Returns the name of the first part where the delimiter `--<boundary>`
/// appears in its name, file name, or content.
pub(crate) fn find_boundary_collision<'a>(
    parts: &'a [(String, Part)],
    boundary: &str,
) -> Option<&'a str> {
    let delimiter = format!("--{boundary}");
    let delimiter = delimiter.as_bytes();

    parts
        .iter()
        .find(|(name, part)| {
            contains_subslice(name.as_bytes(), delimiter)
                || part
                    .file_name
                    .as_ref()
                    .is_some_and(|file_name| contains_subslice(file_name.as_bytes(), delimiter))
                || contains_subslice(&part.bytes, delimiter)
        })
        .map(|(name, _)| name.as_str())
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && haystack.windows(needle.len()).any(|window| window == needle)
}
