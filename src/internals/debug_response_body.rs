use ::bytesize::ByteSize;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use crate::UploadResponse;

/// An arbituary limit to avoid printing huge bodies into the logs.
const MAX_TEXT_PRINT_LEN: usize = 10_000;

/// Summarises a response body for the logs, based on its content type.
#[derive(Debug)]
pub struct DebugResponseBody<'a>(pub &'a UploadResponse);

impl Display for DebugResponseBody<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.0.maybe_content_type() {
            Some(content_type) => {
                match essence(&content_type) {
                    // Json
                    "application/json" | "text/json" => write_json(f, self.0),

                    // Text Content
                    s if s.starts_with("text/") => write_text(f, &self.0.text()),

                    // Unknown content type
                    _ => {
                        let len = self.0.as_bytes().len();
                        write!(f, "<{content_type}, with len {}>", ByteSize(len as u64))
                    }
                }
            }

            // We just default to text
            _ => write_text(f, &self.0.text()),
        }
    }
}

/// Drops any parameters, such as `; charset=utf-8`.
fn essence(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
}

fn write_text(f: &mut Formatter<'_>, text: &str) -> FmtResult {
    if text.chars().count() <= MAX_TEXT_PRINT_LEN {
        write!(f, "'{text}'")
    } else {
        let text_start = text.chars().take(MAX_TEXT_PRINT_LEN);
        write!(f, "'")?;
        for c in text_start {
            write!(f, "{c}")?;
        }
        write!(f, "...'")?;

        Ok(())
    }
}

fn write_json(f: &mut Formatter<'_>, response: &UploadResponse) -> FmtResult {
    let result = serde_json::from_slice::<serde_json::Value>(response.as_bytes());

    match result {
        Err(_) => {
            write!(
                f,
                "!!! MALFORMED JSON !!!\nBody: '{}'",
                response.text()
            )
        }
        Ok(body) => match serde_json::to_string_pretty(&body) {
            Ok(pretty_raw) => write!(f, "{pretty_raw}"),
            Err(_) => write_text(f, &response.text()),
        },
    }
}
