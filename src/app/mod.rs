mod cli;
mod error;
mod logger;
mod orchestrator;
mod processing;
mod prompt;

pub use cli::Cli;
pub use error::AppError;
pub use orchestrator::{run_app, run_with};
pub use prompt::parse_int;

// Macros for use by child modules of app (orchestrator, processing, prompt).
// When expanded in a sibling module, `super` refers to `app`, so
// `super::logger` resolves to this module's logger.
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

// Bring the macros into scope for the sibling modules.
use verbose_eprintln;
use verbose_println;
