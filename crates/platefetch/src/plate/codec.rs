use super::{BLOCKS, Block, MAX_INDEX, PLATE_LEN, PlateError};
use core::{cmp::Ordering, fmt, hash, str::FromStr};

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LETTER_RADIX: u64 = LETTERS.len() as u64;

/// A six-character plate code together with the index it encodes.
///
/// A plate is a run of decimal digits followed by a run of upper-case
/// letters, six characters in total. Plates order by their index, which is
/// *not* the same as lexicographic order of the code (`"999999"` comes before
/// `"00000A"`).
///
/// # Example
///
/// ```
/// use platefetch::Plate;
///
/// let plate = Plate::from_index(1_000_000).unwrap();
/// assert_eq!(plate.as_str(), "00000A");
/// assert_eq!("00000A".parse::<Plate>().unwrap().index(), 1_000_000);
/// ```
#[derive(Clone, Copy)]
pub struct Plate {
    index: u64,
    bytes: [u8; PLATE_LEN],
}

impl Plate {
    /// The first plate, `000000`.
    pub const FIRST: Self = Self {
        index: 0,
        bytes: *b"000000",
    };

    /// The last plate, `ZZZZZZ`.
    pub const LAST: Self = Self {
        index: MAX_INDEX,
        bytes: *b"ZZZZZZ",
    };

    /// Encodes `index` into its plate code.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::OutOfRange`] if `index` is greater than
    /// [`max_index`](crate::max_index).
    pub fn from_index(index: u64) -> Result<Self, PlateError> {
        if index > MAX_INDEX {
            return Err(PlateError::OutOfRange {
                index,
                max: MAX_INDEX,
            });
        }
        Ok(Self::encode_in_range(index))
    }

    /// Encodes an index already known to be `<= MAX_INDEX`.
    pub(crate) fn encode_in_range(index: u64) -> Self {
        debug_assert!(index <= MAX_INDEX);
        let block = locate(index);
        let rest = index - block.start;

        // The digit prefix cycles fastest: consecutive indices differ in the
        // number first and only roll the letters once it wraps.
        let mut number = rest % block.digit_span;
        let mut letters = rest / block.digit_span;

        let mut bytes = [b'0'; PLATE_LEN];
        let (digit_part, letter_part) = bytes.split_at_mut(block.digits);
        for slot in letter_part.iter_mut().rev() {
            *slot = LETTERS[(letters % LETTER_RADIX) as usize];
            letters /= LETTER_RADIX;
        }
        for slot in digit_part.iter_mut().rev() {
            *slot = b'0' + (number % 10) as u8;
            number /= 10;
        }

        Self { index, bytes }
    }

    /// Returns the index this plate encodes.
    #[must_use]
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// Returns the plate code as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        // SAFETY: every byte is drawn from `0-9` or `A-Z`, which is ASCII
        unsafe { core::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Returns the raw ASCII bytes of the code.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PLATE_LEN] {
        &self.bytes
    }

    /// Number of trailing letter positions in this code.
    #[must_use]
    pub fn letters(&self) -> usize {
        locate(self.index).letters
    }

    /// Returns the plate following this one, or `None` after `ZZZZZZ`.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        if self.index == MAX_INDEX {
            return None;
        }
        Some(Self::encode_in_range(self.index + 1))
    }
}

/// Walks the block table and returns the last block starting at or before
/// `index`. Callers guarantee `index <= MAX_INDEX`.
fn locate(index: u64) -> Block {
    let mut found = BLOCKS[0];
    for block in BLOCKS {
        if block.start > index {
            break;
        }
        found = block;
    }
    found
}

/// Encodes `index` into a plate code.
///
/// # Errors
///
/// Returns [`PlateError::OutOfRange`] for indices past
/// [`max_index`](crate::max_index).
pub fn encode(index: u64) -> Result<Plate, PlateError> {
    Plate::from_index(index)
}

/// Decodes a plate code back into its index.
///
/// This is the exact inverse of [`encode`].
///
/// # Errors
///
/// Returns an error if `code`:
/// - is not exactly six bytes long
/// - contains bytes outside `0-9` and `A-Z`
/// - has a digit after the first letter
pub fn decode(code: &str) -> Result<u64, PlateError> {
    code.parse::<Plate>().map(|plate| plate.index())
}

impl FromStr for Plate {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; PLATE_LEN] = s
            .as_bytes()
            .try_into()
            .map_err(|_| PlateError::InvalidLength { len: s.len() })?;

        let mut digits = 0;
        let mut number = 0_u64;
        let mut letters = 0_u64;
        for (position, &byte) in bytes.iter().enumerate() {
            match byte {
                b'0'..=b'9' if position == digits => {
                    number = number * 10 + u64::from(byte - b'0');
                    digits += 1;
                }
                b'0'..=b'9' => return Err(PlateError::DigitAfterLetter { position }),
                b'A'..=b'Z' => letters = letters * LETTER_RADIX + u64::from(byte - b'A'),
                _ => return Err(PlateError::InvalidByte { byte, position }),
            }
        }

        let block = BLOCKS[PLATE_LEN - digits];
        let index = block.start + letters * block.digit_span + number;
        Ok(Self { index, bytes })
    }
}

impl TryFrom<u64> for Plate {
    type Error = PlateError;

    fn try_from(index: u64) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl From<Plate> for u64 {
    fn from(plate: Plate) -> Self {
        plate.index
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plate")
            .field("index", &self.index)
            .field("code", &self.as_str())
            .finish()
    }
}

// The code is a pure function of the index, so comparing indices is enough.
impl PartialEq for Plate {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Plate {}

impl PartialOrd for Plate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Plate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl hash::Hash for Plate {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}
