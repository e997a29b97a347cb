// ABOUTME: Typed request options handed to a dispatcher.
// ABOUTME: Path, HTTP method, and an optional form or raw body.

use bytes::Bytes;
use std::fmt;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP methods the panel API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for hyper::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => hyper::Method::GET,
            Method::Post => hyper::Method::POST,
            Method::Put => hyper::Method::PUT,
            Method::Delete => hyper::Method::DELETE,
        }
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Ordered key/value pairs sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
    /// Pre-encoded bytes with an explicit content type.
    Bytes { content_type: String, bytes: Bytes },
}

impl Body {
    pub fn form<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        Body::Form(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }

    pub fn content_type(&self) -> &str {
        match self {
            Body::Form(_) => FORM_CONTENT_TYPE,
            Body::Bytes { content_type, .. } => content_type,
        }
    }

    /// Wire representation of the body.
    pub fn encode(&self) -> Bytes {
        match self {
            Body::Form(pairs) => {
                let encoded = pairs
                    .iter()
                    .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                    .collect::<Vec<_>>()
                    .join("&");
                Bytes::from(encoded)
            }
            Body::Bytes { bytes, .. } => bytes.clone(),
        }
    }

    /// Look up a form field by key. Always `None` for raw bodies.
    pub fn form_value(&self, key: &str) -> Option<&str> {
        match self {
            Body::Form(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            Body::Bytes { .. } => None,
        }
    }
}

/// One request for the dispatcher: where, how, and what to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Path relative to the configured endpoint, starting with `/`.
    pub path: String,
    pub method: Method,
    pub body: Option<Body>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
