use flexi_logger::{FileSpec, Logger, LoggerHandle};

use crate::errors::{ChatError, ChatResult};

/// Starts the file logger. The TUI owns the terminal, so everything goes
/// to `lexchat.log` in the working directory. The returned handle must be
/// kept alive for the duration of the program.
pub fn init(level: &str) -> ChatResult<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| ChatError::logging_error(format!("invalid log level {level:?}: {e}")))?
        .log_to_file(FileSpec::default().basename("lexchat").suppress_timestamp())
        .append()
        .start()
        .map_err(|e| ChatError::logging_error(format!("failed to start logger: {e}")))
}
