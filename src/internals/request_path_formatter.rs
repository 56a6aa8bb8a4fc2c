use ::http::Method;
use ::std::fmt;
use ::url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct RequestPathFormatter {
    method: Method,

    /// The full url the request is sent to.
    url: Url,
}

impl RequestPathFormatter {
    pub fn new(method: Method, url: Url) -> Self {
        Self { method, url }
    }
}

impl fmt::Display for RequestPathFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = &self.method;
        let url = &self.url;

        write!(f, "{method} {url}")
    }
}
