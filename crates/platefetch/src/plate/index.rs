use super::{MAX_INDEX, Plate, PlateError};
use core::{fmt, str::FromStr};

/// Longest textual index accepted by [`PlateIndex::from_str`].
///
/// Any 19-digit decimal fits in a `u64`, so parsing below this bound can only
/// fail on range, never on overflow.
pub const MAX_INDEX_DIGITS: usize = 19;

/// A plate index that has been checked against [`MAX_INDEX`].
///
/// Use this at input boundaries where the index arrives untyped (text, a
/// signed integer, a float); once constructed it always encodes to a
/// [`Plate`].
///
/// ```
/// use platefetch::{PlateError, PlateIndex};
///
/// let index: PlateIndex = " 1099999 ".parse().unwrap();
/// assert_eq!(index.plate().as_str(), "99999A");
///
/// assert_eq!(PlateIndex::try_from(-1_i64), Err(PlateError::NotAnInteger));
/// assert_eq!(PlateIndex::try_from(1.5_f64), Err(PlateError::NotAnInteger));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlateIndex(u64);

impl PlateIndex {
    /// Validates `index` against [`MAX_INDEX`].
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::OutOfRange`] if `index > MAX_INDEX`.
    pub const fn new(index: u64) -> Result<Self, PlateError> {
        if index > MAX_INDEX {
            return Err(PlateError::OutOfRange {
                index,
                max: MAX_INDEX,
            });
        }
        Ok(Self(index))
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Encodes this index. Infallible since the range was already checked.
    #[must_use]
    pub fn plate(self) -> Plate {
        Plate::encode_in_range(self.0)
    }
}

impl FromStr for PlateIndex {
    type Err = PlateError;

    /// Parses a decimal index, ignoring surrounding whitespace.
    ///
    /// Signs, separators, and decimal points are all rejected as
    /// [`PlateError::Malformed`]; overly long digit strings are rejected as
    /// [`PlateError::TooLong`] before any numeric conversion happens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PlateError::Malformed {
                input: s.to_owned(),
            });
        }
        if trimmed.len() > MAX_INDEX_DIGITS {
            return Err(PlateError::TooLong {
                len: trimmed.len(),
                max: MAX_INDEX_DIGITS,
            });
        }
        let index = trimmed.parse::<u64>().map_err(|_| PlateError::Malformed {
            input: s.to_owned(),
        })?;
        Self::new(index)
    }
}

impl TryFrom<u64> for PlateIndex {
    type Error = PlateError;

    fn try_from(index: u64) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl TryFrom<i64> for PlateIndex {
    type Error = PlateError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        let index = u64::try_from(index).map_err(|_| PlateError::NotAnInteger)?;
        Self::new(index)
    }
}

impl TryFrom<f64> for PlateIndex {
    type Error = PlateError;

    fn try_from(index: f64) -> Result<Self, Self::Error> {
        if !index.is_finite() || index < 0.0 || index.fract() != 0.0 {
            return Err(PlateError::NotAnInteger);
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = index as u64;
        Self::new(whole)
    }
}

impl From<PlateIndex> for u64 {
    fn from(index: PlateIndex) -> Self {
        index.0
    }
}

impl From<Plate> for PlateIndex {
    fn from(plate: Plate) -> Self {
        Self(plate.index())
    }
}

impl fmt::Display for PlateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
