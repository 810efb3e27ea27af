use thiserror::Error;

/// Errors that can occur while converting GPIO names and numbers.
///
/// Every variant except [`Error::Io`] is a user input problem. Use
/// [`Error::kind`] to tell name grammar failures apart from numeric ones.
#[derive(Error, Debug)]
pub enum Error {
    /// The input does not follow the `GPIO<bank>_<group><pin>` grammar.
    #[error(
        "Invalid GPIO name format: {name}. Expected format: GPIO<bank>_<group><pin> (e.g., GPIO0_A3)"
    )]
    InvalidName {
        /// The rejected input, verbatim.
        name: String,
    },
    /// A GPIO number below zero was supplied.
    // Zero is accepted; the wording is kept for compatibility with existing scripts.
    #[error("GPIO number must be a positive integer.")]
    NegativeNumber {
        /// The rejected number.
        number: i64,
    },
    /// The input is not a base-10 integer literal.
    #[error("invalid GPIO number '{input}': expected a base-10 integer")]
    InvalidNumber {
        /// The rejected input, verbatim.
        input: String,
    },
    /// A computed value does not fit into 64 bits.
    #[error("GPIO value out of range: {what} overflows a 64-bit integer")]
    NumberOverflow {
        /// Which quantity overflowed (e.g. "GPIO number", "register offset").
        what: &'static str,
    },
    /// The group index cannot be rendered as a character.
    #[error("GPIO group index {group_index} cannot be represented as a group letter")]
    GroupOutOfRange {
        /// Zero-based group index within the bank.
        group_index: u64,
    },
    /// A codec configuration with a zero bank or group size.
    #[error(
        "Invalid codec configuration (bank size {bank_size}, group size {group_size}): both must be greater than zero"
    )]
    InvalidConfig {
        /// Requested bank size.
        bank_size: u32,
        /// Requested group size.
        group_size: u32,
    },
    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Symbolic name does not match the grammar.
    Format,
    /// Numeric argument is negative, not an integer, or out of the representable range.
    Range,
    /// Codec configuration rejected.
    Config,
    /// Output could not be written.
    Io,
}

impl Error {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidName { .. } => ErrorKind::Format,
            Error::NegativeNumber { .. }
            | Error::InvalidNumber { .. }
            | Error::NumberOverflow { .. }
            | Error::GroupOutOfRange { .. } => ErrorKind::Range,
            Error::InvalidConfig { .. } => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type alias for GPIO conversions.
///
/// This is a convenience alias for `std::result::Result<T, Error>` used
/// throughout the crate to reduce boilerplate.
pub type Result<T> = std::result::Result<T, Error>;

// Helpers for creating specific errors
pub(crate) fn invalid_name(name: &str) -> Error {
    Error::InvalidName {
        name: name.to_string(),
    }
}

pub(crate) fn overflow(what: &'static str) -> Error {
    Error::NumberOverflow { what }
}
