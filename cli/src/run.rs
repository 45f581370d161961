use log::{error, info};

use microrest_core::{report_error, report_response, RequestClient};

use crate::args::Invocation;

const MODULE: &str = "MAIN";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A response arrived with this status; the client was shut down.
    Completed { status: u16 },
    /// The request could not be built.
    RequestNotPrepared,
    /// The request could not be sent.
    RequestNotSent,
}

/// Build, send and report one GET request. Failures are logged, never returned.
pub fn run(invocation: &Invocation, client: &RequestClient) -> RunOutcome {
    let request = match invocation.uri.as_deref() {
        Some(uri) => match client.build_get(Some(uri)) {
            Ok(request) => request,
            Err(e) => {
                report_error(&format!("[{MODULE}] Couldn't prepare HTTP GET Request."), &e);
                return RunOutcome::RequestNotPrepared;
            }
        },
        None => client.build_default_get(),
    };

    let Some(response) = client.send_ignoring_errors(&request) else {
        error!("[{}] Couldn't send HTTP GET Request.", MODULE);
        return RunOutcome::RequestNotSent;
    };

    report_response(&response, client.config().debug);

    if response.status == 200 {
        info!("[{}] It was OK - 200.", MODULE);
    }

    client.shutdown();
    RunOutcome::Completed {
        status: response.status,
    }
}
