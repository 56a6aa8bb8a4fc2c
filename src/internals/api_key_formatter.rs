use ::std::fmt;

use crate::AuthToken;

/// Formats the resolved credential for the console,
/// as `API key: <token>` or `API key not set.`
#[derive(Debug, Copy, Clone)]
pub struct ApiKeyFormatter<'a>(pub &'a AuthToken);

impl fmt::Display for ApiKeyFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_set() {
            write!(f, "API key: {}", self.0.as_str())
        } else {
            write!(f, "API key not set.")
        }
    }
}
