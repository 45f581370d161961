//! Minimal blocking HTTP GET client core.
//!
//! # Overview
//! `RequestClient` builds immutable `HttpRequest` values, sends them over a
//! lazily created `ClientHandle` and returns `HttpResponse` values with the
//! body decoded as text.
//!
//! # Design
//! - Configuration is a plain `ClientConfig` passed to `RequestClient::new`;
//!   `RequestClient::shared` offers a process-wide instance for callers that
//!   want one.
//! - The handle is created on demand and released by `shutdown`; a later send
//!   re-creates it.
//! - Diagnostics go through the `log` facade. Debug output is gated on
//!   `ClientConfig::debug`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod report;

#[cfg(test)]
mod testlog;

pub use client::{ClientHandle, RequestClient};
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{Headers, HttpMethod, HttpRequest, HttpResponse};
pub use report::{report_error, report_response};
