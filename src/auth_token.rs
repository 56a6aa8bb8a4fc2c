use ::http::HeaderValue;
use ::std::fmt;

use crate::UploadError;

/// The environment variable the token is read from.
pub const ONFIDO_AUTH_TOKEN: &str = "ONFIDO_AUTH_TOKEN";

/// The credential sent in the `Authorization` header.
///
/// A missing token is not an error here. The request is still sent,
/// with an empty token, and the server decides what to do with it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthToken {
    maybe_token: Option<String>,
}

impl AuthToken {
    pub fn new<T>(token: T) -> Self
    where
        T: Into<String>,
    {
        let token = token.into();
        let maybe_token = (!token.is_empty()).then_some(token);

        Self { maybe_token }
    }

    pub fn none() -> Self {
        Self { maybe_token: None }
    }

    /// Resolves the token using the lookup given,
    /// where an empty value counts as not set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(ONFIDO_AUTH_TOKEN).map(Self::new).unwrap_or_default()
    }

    pub fn is_set(&self) -> bool {
        self.maybe_token.is_some()
    }

    /// The raw token, or an empty string when not set.
    pub fn as_str(&self) -> &str {
        self.maybe_token.as_deref().unwrap_or_default()
    }

    /// Returns the token, or `ConfigMissing` when it is not set.
    pub fn require(&self) -> Result<&str, UploadError> {
        self.maybe_token
            .as_deref()
            .ok_or(UploadError::ConfigMissing {
                variable: ONFIDO_AUTH_TOKEN,
            })
    }

    /// Builds `Token token=<value>`.
    pub fn authorization_header_value(&self) -> Result<HeaderValue, UploadError> {
        let raw_header = format!("Token token={}", self.as_str());
        let mut header_value =
            HeaderValue::from_str(&raw_header).map_err(|source| {
                UploadError::RequestConstruction {
                    request: "Authorization header".to_string(),
                    message: "auth token contains characters not allowed in a header".to_string(),
                    source: Some(source.into()),
                }
            })?;
        header_value.set_sensitive(true);

        Ok(header_value)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = if self.is_set() { "<redacted>" } else { "<not set>" };

        f.debug_struct("AuthToken")
            .field("token", &redacted)
            .finish()
    }
}

#[cfg(test)]
mod test_from_lookup {
    use super::*;

    #[test]
    fn it_should_read_the_onfido_variable() {
        let token = AuthToken::from_lookup(|key| {
            (key == ONFIDO_AUTH_TOKEN).then(|| "api_live.abc".to_string())
        });

        assert_eq!(token.as_str(), "api_live.abc");
        assert!(token.is_set());
    }

    #[test]
    fn it_should_not_be_set_when_missing() {
        let token = AuthToken::from_lookup(|_| None);

        assert!(!token.is_set());
    }

    #[test]
    fn it_should_not_be_set_when_empty() {
        let token = AuthToken::from_lookup(|_| Some(String::new()));

        assert!(!token.is_set());
        assert_eq!(token, AuthToken::none());
    }
}

#[cfg(test)]
mod test_require {
    use super::*;

    #[test]
    fn it_should_return_config_missing_when_not_set() {
        let token = AuthToken::none();
        let result = token.require();

        assert!(matches!(
            result,
            Err(UploadError::ConfigMissing {
                variable: ONFIDO_AUTH_TOKEN
            })
        ));
    }

    #[test]
    fn it_should_return_token_when_set() {
        let token = AuthToken::new("api_live.abc");

        assert_eq!(token.require().unwrap(), "api_live.abc");
    }
}

#[cfg(test)]
mod test_authorization_header_value {
    use super::*;

    #[test]
    fn it_should_use_token_scheme() {
        let header_value = AuthToken::new("api_live.abc")
            .authorization_header_value()
            .unwrap();

        assert_eq!(header_value, "Token token=api_live.abc");
    }

    #[test]
    fn it_should_send_empty_token_when_not_set() {
        let header_value = AuthToken::none().authorization_header_value().unwrap();

        assert_eq!(header_value, "Token token=");
    }

    #[test]
    fn it_should_mark_header_as_sensitive() {
        let header_value = AuthToken::new("api_live.abc")
            .authorization_header_value()
            .unwrap();

        assert!(header_value.is_sensitive());
    }

    #[test]
    fn it_should_fail_on_newlines_in_token() {
        let result = AuthToken::new("abc\ndef").authorization_header_value();

        assert!(matches!(
            result,
            Err(UploadError::RequestConstruction { .. })
        ));
    }
}

#[cfg(test)]
mod test_fmt {
    use super::*;

    #[test]
    fn it_should_not_leak_token_in_debug() {
        let output = format!("{:?}", AuthToken::new("api_live.abc"));

        assert_eq!(output, r#"AuthToken { token: "<redacted>" }"#);
    }
}
