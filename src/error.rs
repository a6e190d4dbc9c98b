//! Errors raised by the template extensions while rendering.

use std::fmt;

use rocket_dyn_templates::tera;

/// An error raised by one of the functions or filters installed into the
/// template engine.
///
/// Every variant is converted into a [`tera::Error`] before it reaches the
/// engine, which reports it as a render failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was not supplied.
    MissingArgument(&'static str),
    /// An argument was supplied with a value the callee can't use.
    InvalidArgument { name: String, expected: &'static str },
    /// A `{` in a link path was never closed.
    UnclosedPlaceholder(String),
    /// A link path names a placeholder that no argument fills.
    UnboundPlaceholder(String),
    /// A date-time value could not be parsed.
    Temporal(String),
    /// A format description could not be parsed or applied.
    Format(String),
    /// A value could not be serialized for inlining.
    Serialize(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingArgument(name) => write!(f, "missing argument `{}`", name),
            Error::InvalidArgument { name, expected } => {
                write!(f, "argument `{}` must be {}", name, expected)
            }
            Error::UnclosedPlaceholder(path) => {
                write!(f, "unclosed `{{` in link path `{}`", path)
            }
            Error::UnboundPlaceholder(name) => {
                write!(f, "no argument given for path variable `{{{}}}`", name)
            }
            Error::Temporal(e) => write!(f, "invalid date-time: {}", e),
            Error::Format(e) => write!(f, "invalid date-time format: {}", e),
            Error::Serialize(e) => write!(f, "value can't be inlined: {}", e),
        }
    }
}

impl std::error::Error for Error { }

impl From<Error> for tera::Error {
    fn from(error: Error) -> Self {
        log::warn!("template extension failed: {}", error);
        tera::Error::msg(error.to_string())
    }
}
