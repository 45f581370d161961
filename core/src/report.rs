//! Log helpers for responses and errors.

use std::error::Error;

use log::{debug, error};

use crate::http::HttpResponse;

/// Log every header, the status code and the body of `response`, one
/// debug-level line each. Does nothing unless `enabled`.
pub fn report_response(response: &HttpResponse, enabled: bool) {
    if !enabled {
        return;
    }
    for (name, values) in &response.headers {
        debug!("Header: {} => [{}]", name, values.join(", "));
    }
    debug!("HTTP Response's Status Code: {}", response.status);
    debug!("HTTP Response's body: {}", response.body);
}

/// Log `context` and then each error in the source chain of `err`.
pub fn report_error(context: &str, err: &dyn Error) {
    error!("{}", context);
    let mut current: Option<&dyn Error> = Some(err);
    while let Some(e) = current {
        error!("  caused by: {}", e);
        current = e.source();
    }
}
