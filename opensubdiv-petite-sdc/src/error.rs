//! Error types for the opensubdiv-petite-sdc crate.

use thiserror::Error;

/// Error type for conversions into subdivision options.
///
/// Reading or writing a [`SubdivisionOptions`](crate::sdc::SubdivisionOptions)
/// field can not fail. Only converting *external* data (integer codes, names)
/// into an option can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An integer code that does not name a member of the option's
    /// enumeration.
    #[error("Invalid code {code} for {option}")]
    InvalidCode { option: &'static str, code: u8 },

    /// A name that does not name a member of the option's enumeration.
    #[error("Unknown name \"{name}\" for {option}")]
    UnknownName { option: &'static str, name: String },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_code(option: &'static str, code: u8) -> Self {
        tracing::debug!(option, code, "rejected subdivision option code");
        Error::InvalidCode { option, code }
    }

    pub(crate) fn unknown_name(option: &'static str, name: &str) -> Self {
        tracing::debug!(option, name, "rejected subdivision option name");
        Error::UnknownName {
            option,
            name: name.to_owned(),
        }
    }
}
