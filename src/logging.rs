use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Starts a coloured stderr logger. `RUST_LOG` takes precedence over `level`.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn setup_logging(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .format(flexi_logger::colored_default_format)
        .start()
}
