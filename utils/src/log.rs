
use flexi_logger::{FileSpec, Logger, LoggerHandle, with_thread, WriteMode};
use super::error::*;

///
/// Macros to write to the backing file logger.
///
pub use log::{trace, debug, info, warn, error};

///
/// Initializes the logstream to write to a timestamped file under the given
/// directory, honouring RUST_LOG when set. The returned handle flushes the
/// stream when dropped, so the caller must keep it alive.
///
pub fn initialize (path: & str, filename: & str) -> Result<LoggerHandle>
{
    let file_spec = FileSpec::default()
        .directory(path)
        .basename(filename)
        .use_timestamp(true)
        .suffix("log");

    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(file_spec)
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(with_thread)
        .start()?;

    Ok(handle)
}
