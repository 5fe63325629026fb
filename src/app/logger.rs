use once_cell::sync::Lazy;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::Mutex;

// Global static logger instance
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logger to write to the specified file path.
/// The file is created if missing and truncated otherwise, so each run starts fresh.
pub fn init_global_logger(log_file_path: &Path) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file_path)?;
    let writer = BufWriter::new(file);
    match LOGGER.lock() {
        Ok(mut logger_guard) => *logger_guard = Some(writer),
        Err(poisoned) => *poisoned.into_inner() = Some(writer),
    }
    Ok(())
}

/// Writes a verbose message to the global logger.
/// Messages are dropped when no logger has been initialized.
pub fn log_verbose_message_args(args: fmt::Arguments<'_>) {
    write_line("", args);
}

/// Writes a verbose error message to the global logger.
pub fn log_verbose_error_args(args: fmt::Arguments<'_>) {
    write_line("ERROR: ", args);
}

/// Flushes buffered log output. A missing logger is not an error.
pub fn flush_global_logger() -> Result<(), IoError> {
    match LOGGER.lock() {
        Ok(mut logger_guard) => match logger_guard.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        },
        Err(_) => Err(IoError::other("logger mutex poisoned")),
    }
}

fn write_line(prefix: &str, args: fmt::Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "{}{}", prefix, args).is_err() {
                // Fallback to stderr if log writing fails
                eprintln!("Fallback (log write failed) {}{}", prefix, args);
            }
        }
    } else {
        eprintln!("Fallback (logger mutex error) {}{}", prefix, args);
    }
}
