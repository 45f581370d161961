//! HTTP request and response values.
//!
//! # Design
//! `HttpRequest` is built once by `RequestClient` and never mutated
//! afterwards, so its fields are private and read through accessors.
//! `HttpResponse` is produced by the transport and handed to the caller as
//! plain data.

use std::collections::BTreeMap;

/// HTTP method for a request. Only GET is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// Request header mapping.
///
/// Names compare case-insensitively; inserting an existing name replaces its
/// value in place, keeping the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub(crate) fn insert(&mut self, name: &str, value: &str) {
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An HTTP GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: HttpMethod,
    uri: String,
    headers: Headers,
}

impl HttpRequest {
    pub(crate) fn get(uri: &str, headers: Headers) -> Self {
        Self {
            method: HttpMethod::Get,
            uri: uri.to_string(),
            headers,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}

/// An HTTP response. The body is text decoded with the charset named by
/// `Content-Type` (UTF-8 when none is given), or raw bytes from
/// `RequestClient::send_bytes`.
///
/// Header names are lowercase; each name maps to its values in the order the
/// server sent them.
#[derive(Debug, Clone)]
pub struct HttpResponse<B = String> {
    pub status: u16,
    pub headers: BTreeMap<String, Vec<String>>,
    pub body: B,
}

impl<B> HttpResponse<B> {
    /// First value of header `name`, looked up case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
