//! Reusable HTTP GET client.
//!
//! # Design
//! `RequestClient` owns its `ClientConfig` and a slot holding at most one
//! live `ClientHandle`. The handle is created on first use and dropped by
//! `shutdown`; the next send creates a fresh one. The slot sits behind a
//! mutex so concurrent first sends cannot both build a handle, and handles
//! are shared as `Arc` so a send in flight keeps its agent alive across a
//! concurrent shutdown.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use log::{debug, info};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{Headers, HttpRequest, HttpResponse};
use crate::report::report_error;

const MODULE: &str = "CLIENT";

/// A live transport handle: one ureq agent and its connection pool.
pub struct ClientHandle {
    agent: ureq::Agent,
    max_body_size: u64,
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("max_body_size", &self.max_body_size)
            .finish_non_exhaustive()
    }
}

impl ClientHandle {
    fn new(config: &ClientConfig) -> Self {
        // HTTP/2 is preferred where available; ureq speaks HTTP/1.1 only, so
        // every request falls back to HTTP/1.1.
        let agent = ureq::Agent::config_builder()
            .timeout_connect(Some(config.connect_timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            max_body_size: config.max_body_size,
        }
    }

    /// Send `request` and read its body with `read`, which gets the body and
    /// the configured size limit.
    fn execute<B>(
        &self,
        request: &HttpRequest,
        read: impl FnOnce(&mut ureq::Body, u64) -> Result<B, ureq::Error>,
    ) -> Result<HttpResponse<B>, ureq::Error> {
        let mut builder = self.agent.get(request.uri());
        for (name, value) in request.headers().iter() {
            builder = builder.header(name, value);
        }
        let mut response = builder.call()?;

        let status = response.status().as_u16();
        let mut headers = BTreeMap::<String, Vec<String>>::new();
        for (name, value) in response.headers() {
            headers
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }
        let body = read(response.body_mut(), self.max_body_size)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Builds GET requests and sends them over a lazily created, reusable handle.
#[derive(Debug, Default)]
pub struct RequestClient {
    config: ClientConfig,
    handle: Mutex<Option<Arc<ClientHandle>>>,
}

impl RequestClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            handle: Mutex::new(None),
        }
    }

    /// Process-wide client with the default configuration, created on first call.
    pub fn shared() -> &'static RequestClient {
        static SHARED: OnceLock<RequestClient> = OnceLock::new();
        SHARED.get_or_init(RequestClient::default)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn slot(&self) -> MutexGuard<'_, Option<Arc<ClientHandle>>> {
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the live handle, creating it first if the slot is empty.
    pub fn get_or_create_client(&self) -> Arc<ClientHandle> {
        let mut slot = self.slot();
        if let Some(handle) = slot.as_ref() {
            return Arc::clone(handle);
        }
        let handle = Arc::new(ClientHandle::new(&self.config));
        if self.config.debug {
            debug!(
                "[{}] HTTP client has risen (connect timeout {:?})",
                MODULE, self.config.connect_timeout
            );
        }
        *slot = Some(Arc::clone(&handle));
        handle
    }

    pub fn is_live(&self) -> bool {
        self.slot().is_some()
    }

    /// Release the live handle, if any. Safe to call repeatedly.
    pub fn shutdown(&self) {
        let released = self.slot().take();
        if released.is_some() {
            info!("[{}] HTTP client was shut down", MODULE);
        }
    }

    fn default_headers(&self) -> Headers {
        let mut headers = Headers::default();
        headers.insert("User-Agent", &self.config.user_agent);
        headers
    }

    /// GET request for the configured default URI.
    pub fn build_default_get(&self) -> HttpRequest {
        HttpRequest::get(&self.config.default_uri, self.default_headers())
    }

    /// GET request for `uri`, which must be present and not blank.
    pub fn build_get(&self, uri: Option<&str>) -> Result<HttpRequest, ClientError> {
        self.build_get_with_headers::<&str>(uri, None)
    }

    /// GET request for `uri` carrying `headers`, read as a flat
    /// `[name, value, name, value, ...]` list on top of the default
    /// `User-Agent`. An unpaired trailing entry is dropped.
    pub fn build_get_with_headers<S: AsRef<str>>(
        &self,
        uri: Option<&str>,
        headers: Option<&[S]>,
    ) -> Result<HttpRequest, ClientError> {
        let uri = match uri {
            Some(uri) if !uri.trim().is_empty() => uri,
            _ => return Err(ClientError::MissingParameter("uri")),
        };

        let mut merged = self.default_headers();
        if let Some(headers) = headers {
            if headers.len() % 2 != 0 && self.config.debug {
                debug!(
                    "[{}] number of header entries is odd: {} so the last will be dropped",
                    MODULE,
                    headers.len()
                );
            }
            for pair in headers.chunks_exact(2) {
                merged.insert(pair[0].as_ref(), pair[1].as_ref());
            }
        }

        Ok(HttpRequest::get(uri, merged))
    }

    /// Send `request` on the live handle and read the body as text, decoded
    /// with the charset the response declares.
    ///
    /// Any status code is a response; only transport failures are errors.
    pub fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        self.dispatch(request, |body, limit| {
            body.with_config().limit(limit).read_to_string()
        })
    }

    /// Like `send`, but the body is returned as raw bytes.
    pub fn send_bytes(&self, request: &HttpRequest) -> Result<HttpResponse<Vec<u8>>, ClientError> {
        self.dispatch(request, |body, limit| {
            body.with_config().limit(limit).read_to_vec()
        })
    }

    fn dispatch<B>(
        &self,
        request: &HttpRequest,
        read: impl FnOnce(&mut ureq::Body, u64) -> Result<B, ureq::Error>,
    ) -> Result<HttpResponse<B>, ClientError> {
        let handle = self.get_or_create_client();
        if self.config.debug {
            debug!("[{}] {} {}", MODULE, request.method().as_str(), request.uri());
        }
        handle
            .execute(request, read)
            .map_err(|source| ClientError::Transport {
                uri: request.uri().to_string(),
                source,
            })
    }

    /// Like `send`, but a failure is logged and turned into `None`.
    pub fn send_ignoring_errors(&self, request: &HttpRequest) -> Option<HttpResponse> {
        match self.send(request) {
            Ok(response) => Some(response),
            Err(e) => {
                report_error(&format!("[{MODULE}] Couldn't send HTTP GET Request."), &e);
                None
            }
        }
    }
}
