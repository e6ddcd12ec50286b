//! The main interface for reporting option errors.

use std::fmt;
use std::error::Error;
use std::io;

use clap::error::Error as ClapError;
use clap::error::ErrorKind;

/// Result alias used throughout option parsing.
pub type Result<T = (), E = Box<OptionsError>> = std::result::Result<T, E>;

/// The main error object.
#[derive(Debug)]
pub enum OptionsError {
    /// Raised by the underlying command line parser (invalid value, unknown option, ...).
    Parse(ClapError),
    /// Raised by a contributor that could not commit a parsed value.
    ArgError(String),
    /// Writing the help message failed.
    IOError(io::Error),
}

/// Wraps an error raised from [`clap`](https://docs.rs/clap/latest/clap/) without altering it.
impl From<ClapError> for OptionsError {
    fn from(value: ClapError) -> OptionsError {
        OptionsError::Parse(value)
    }
}

impl From<io::Error> for OptionsError {
    fn from(value: io::Error) -> OptionsError {
        OptionsError::IOError(value)
    }
}

impl OptionsError {
    /// Creates an error for a value a contributor refused to accept.
    pub fn arg_err(option: &str, msg: &str) -> OptionsError {
        OptionsError::ArgError(format!("invalid value for '--{}': {}", option, msg))
    }

    /// The kind of parser failure, if this error came from the parser.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            OptionsError::Parse(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Exit code a process should use when it gives up on this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            OptionsError::Parse(e) => e.exit_code(),
            _ => 1,
        }
    }
}

impl Error for OptionsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OptionsError::Parse(e) => Some(e),
            OptionsError::IOError(e) => Some(e),
            OptionsError::ArgError(_) => None,
        }
    }
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // clap renders its own "error: " prefix and a usage hint
            OptionsError::Parse(e) => {
                let rendered = e.to_string();
                write!(f, "{}", rendered.trim_start_matches("error: ").trim_end())
            },
            OptionsError::ArgError(msg) => write!(f, "{}", msg),
            OptionsError::IOError(e) => write!(f, "failed to write help message: {}", e),
        }
    }
}
