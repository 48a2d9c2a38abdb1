/// Errors produced while validating plate indices or decoding plate codes.
///
/// Index validation and code decoding fail in distinct, named ways so callers
/// can tell the user exactly what was wrong with their input. None of these
/// are worth retrying: the input itself is invalid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PlateError {
    /// The index was negative or had a fractional part.
    #[error("Index must be a non-negative integer.")]
    NotAnInteger,

    /// A textual index contained something other than decimal digits.
    #[error("Input must contain only digits: {input:?}")]
    Malformed { input: String },

    /// A textual index had more digits than any `u64` can hold.
    #[error("Index has {len} digits; at most {max} are accepted")]
    TooLong { len: usize, max: usize },

    /// The index is past the last plate code.
    #[error("Index out of supported range. Max allowed: {max}.")]
    OutOfRange { index: u64, max: u64 },

    /// A code did not have exactly six characters.
    #[error("invalid plate length: {len}")]
    InvalidLength { len: usize },

    /// A code contained a byte outside `0-9` and `A-Z`.
    #[error("invalid plate byte {byte:#04x} at position {position}")]
    InvalidByte { byte: u8, position: usize },

    /// A digit appeared after the letter suffix had started.
    #[error("digit after letter at position {position}")]
    DigitAfterLetter { position: usize },
}
