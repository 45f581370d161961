//! Command-line front end: token scanning, logger setup and the one-shot run.

pub mod args;
pub mod logger;
pub mod run;

pub use args::{Args, Invocation};
pub use run::{run, RunOutcome};
