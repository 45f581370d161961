use clap::Parser;

use microrest_cli::{logger, run, Args, Invocation};
use microrest_core::{ClientConfig, RequestClient};

fn main() {
    let invocation = Invocation::from(Args::parse());
    let client = RequestClient::new(ClientConfig::default());

    if let Err(e) = logger::init_logger(client.config().debug) {
        eprintln!("Could not initialise logger: {e}");
    }

    run(&invocation, &client);
}
