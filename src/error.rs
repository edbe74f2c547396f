//! Errors for this crate.

/// An erroneous color format.
///
/// The variants of this error mirror the stages of parsing hashed
/// hexadecimal colors: recognizing the notation, validating its length, and
/// decoding the digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color that does not start with a hash and hence uses no recognized
    /// notation.
    UnknownFormat,

    /// A hashed color with an unsupported number of digits. Valid colors have
    /// three, six, or twelve. The payload is the actual count.
    UnexpectedCharacters(usize),

    /// A hashed color with a character that is not a hexadecimal digit. The
    /// payload is the offending character and its byte index.
    MalformedHex(char, usize),
}

impl core::fmt::Display for ColorFormatError {
    /// Format a description of this color format error.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::UnknownFormat => {
                write!(f, "color does not start with \"#\"")
            }
            Self::UnexpectedCharacters(count) => {
                write!(
                    f,
                    "hashed color has {} digits instead of 3, 6, or 12",
                    count
                )
            }
            Self::MalformedHex(c, index) => {
                write!(
                    f,
                    "hashed color has non-hexadecimal character '{}' at index {}",
                    c, index
                )
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
