//! HTTP data types shared by the request builders and the dispatcher.
//!
//! # Design
//! A `ChorusRequest` describes one HTTP call as plain data before it is
//! executed. The builders always populate all six fields, so a description
//! can be inspected or logged without caring which operation produced it.
//! `HttpMethod` is the closed verb set the dispatcher supports; any other
//! verb name is rejected when it is parsed, before any network activity.
//!
//! All fields use owned types (`String`, `Vec`) so descriptions and
//! responses can outlive the builders that produced them.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// HTTP verb supported by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    /// Parse a wire verb name. Anything outside GET/POST/DELETE is an
    /// `UnsupportedMethod` error and never reaches the dispatcher.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(Error::UnsupportedMethod(other.to_string())),
        }
    }
}

/// An opaque set of cookies replayed on authenticated requests.
///
/// Pairs keep their insertion order. Attributes from `Set-Cookie` lines
/// (`Path`, `Expires`, ...) are dropped; only the leading `name=value`
/// segment is retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    pairs: Vec<(String, String)>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        if let Some(pair) = self.pairs.iter_mut().find(|(n, _)| n == name) {
            pair.1 = value.to_string();
        } else {
            self.pairs.push((name.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Absorb one `Set-Cookie` header line.
    pub fn insert_set_cookie(&mut self, line: &str) {
        let pair = line.split(';').next().unwrap_or("");
        if let Some((name, value)) = pair.split_once('=') {
            let name = name.trim();
            if !name.is_empty() {
                self.insert(name, value.trim());
            }
        }
    }

    /// Serialize the jar into the value of a single `Cookie` header.
    pub fn header_value(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// One HTTP call described as plain data, prior to execution.
///
/// Every builder populates all six fields; `None` means the part is omitted
/// from the wire request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChorusRequest {
    /// Form-urlencoded body fields.
    pub data: Option<Vec<(String, String)>>,
    pub headers: Vec<(String, String)>,
    /// Query parameters appended to the URL.
    pub params: Option<Vec<(String, String)>>,
    pub cookies: Option<CookieJar>,
    /// Path relative to the host, with a leading slash.
    pub url: String,
    pub method: HttpMethod,
}

/// The raw response of one HTTP exchange.
///
/// Returned as-is by the dispatcher; the body is never interpreted below the
/// session layer.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// Cookies collected from the response's `Set-Cookie` headers.
    pub cookies: CookieJar,
    pub body: String,
}
