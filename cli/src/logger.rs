use log::SetLoggerError;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

fn prepare_logger_config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build()
}

/// Log to stderr; `debug` lowers the level so response diagnostics show.
pub fn init_logger(debug: bool) -> Result<(), SetLoggerError> {
    let level = if debug { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        level,
        prepare_logger_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}
