use ::bytes::Bytes;
use ::mime::Mime;
use ::std::fmt::Display;
use ::std::fs::File;
use ::std::io::ErrorKind;
use ::std::io::Read;
use ::std::path::Path;

use crate::UploadError;

///
/// For creating a section of a [`MultipartForm`](crate::multipart::MultipartForm).
///
/// Use [`Part::text()`](crate::multipart::Part::text()), [`Part::bytes()`](crate::multipart::Part::bytes()),
/// or [`Part::file()`](crate::multipart::Part::file()) for creating new instances.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub(crate) bytes: Bytes,
    pub(crate) file_name: Option<String>,
    pub(crate) mime_type: Mime,
}

impl Part {
    /// Creates a new part of a multipart form, that will send text.
    ///
    /// The default mime type for this part will be `text/plain`,
    pub fn text<T>(text: T) -> Self
    where
        T: Display,
    {
        let bytes = text.to_string().into_bytes().into();

        Self::new(bytes, mime::TEXT_PLAIN)
    }

    /// Creates a new part of a multipart form, that will upload bytes.
    ///
    /// The default mime type for this part will be `application/octet-stream`,
    pub fn bytes<B>(bytes: B) -> Self
    where
        B: Into<Bytes>,
    {
        Self::new(bytes.into(), mime::APPLICATION_OCTET_STREAM)
    }

    /// Reads the whole file at the path given into a new part.
    ///
    /// The file name is set to the basename of the path,
    /// and the mime type defaults to `application/octet-stream`.
    /// The file is closed before this returns.
    pub fn file<P>(path: P) -> Result<Self, UploadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => UploadError::FileNotFound {
                path: path.to_path_buf(),
                source,
            },
            _ => UploadError::FileRead {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|source| UploadError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        let mut part = Self::bytes(contents);
        part.file_name = path
            .file_name()
            .map(|file_name| file_name.to_string_lossy().into_owned());

        Ok(part)
    }

    fn new(bytes: Bytes, mime_type: Mime) -> Self {
        Self {
            bytes,
            file_name: None,
            mime_type,
        }
    }

    /// Sets the file name for this part of a multipart form.
    ///
    /// By default there is no filename for text and byte parts. This will set one.
    ///
    /// The name is written into the `Content-Disposition` header as is,
    /// between double quotes. Quotes and CR or LF within it are not escaped,
    /// so a name holding them produces a header that parsers may misread.
    pub fn file_name<T>(mut self, file_name: T) -> Self
    where
        T: Display,
    {
        self.file_name = Some(file_name.to_string());
        self
    }

    /// Sets the mime type for this part of a multipart form.
    ///
    /// The mime type is taken as given, the content is never sniffed.
    pub fn mime_type<M>(mut self, mime_type: M) -> Result<Self, UploadError>
    where
        M: AsRef<str>,
    {
        let raw_mime_type = mime_type.as_ref();
        let parsed_mime_type =
            raw_mime_type
                .parse()
                .map_err(|source| UploadError::InvalidMimeType {
                    content_type: raw_mime_type.to_string(),
                    source,
                })?;

        self.mime_type = parsed_mime_type;

        Ok(self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn maybe_file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn mime(&self) -> &Mime {
        &self.mime_type
    }
}




#[cfg(test)]
mod test_file_name {
    use super::*;

    #[test]
    fn it_should_use_file_name_given() {
        let mut part = Part::text("some_text");

        assert_eq!(part.file_name, None);
        part = part.file_name("my-text.txt");
        assert_eq!(part.file_name, Some("my-text.txt".to_string()));
    }
}
