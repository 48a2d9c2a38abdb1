//! The block table of the plate index space.
//!
//! Codes are grouped by how many trailing letter positions they carry. Block
//! `l` holds every code with `6 - l` leading digits followed by `l` letters,
//! so it contains `10^(6 - l) * 26^l` codes. Blocks are laid out back to back
//! in increasing `l`, starting with the all-digit block.

/// Number of characters in every plate code.
pub const PLATE_LEN: usize = 6;

/// Number of blocks (`0..=PLATE_LEN` letter positions).
pub const BLOCK_COUNT: usize = PLATE_LEN + 1;

const DIGIT_RADIX: u64 = 10;
const LETTER_RADIX: u64 = 26;

/// One contiguous range of the index space sharing a digit/letter split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Number of letter positions at the end of the code.
    pub letters: usize,
    /// Number of digit positions at the start of the code.
    pub digits: usize,
    /// First index belonging to this block.
    pub start: u64,
    /// Number of codes in this block.
    pub size: u64,
    /// `10^digits`, the span of the digit prefix.
    pub digit_span: u64,
}

impl Block {
    /// Last index (inclusive) belonging to this block.
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.start + self.size - 1
    }

    /// Returns `true` if `index` falls inside this block.
    #[must_use]
    pub const fn contains(&self, index: u64) -> bool {
        index >= self.start && index - self.start < self.size
    }
}

const fn pow(base: u64, exp: usize) -> u64 {
    let mut acc = 1;
    let mut i = 0;
    while i < exp {
        acc *= base;
        i += 1;
    }
    acc
}

/// Every block, ordered by increasing letter count.
pub const BLOCKS: [Block; BLOCK_COUNT] = {
    let mut blocks = [Block {
        letters: 0,
        digits: 0,
        start: 0,
        size: 0,
        digit_span: 0,
    }; BLOCK_COUNT];
    let mut start = 0;
    let mut letters = 0;
    while letters < BLOCK_COUNT {
        let digits = PLATE_LEN - letters;
        let digit_span = pow(DIGIT_RADIX, digits);
        let size = digit_span * pow(LETTER_RADIX, letters);
        blocks[letters] = Block {
            letters,
            digits,
            start,
            size,
            digit_span,
        };
        start += size;
        letters += 1;
    }
    blocks
};

/// Total number of distinct plate codes.
pub const PLATE_COUNT: u64 = {
    let last = BLOCKS[BLOCK_COUNT - 1];
    last.start + last.size
};

/// The largest index that maps to a plate code (`ZZZZZZ`).
pub const MAX_INDEX: u64 = PLATE_COUNT - 1;

/// Returns the largest supported plate index.
///
/// ```
/// assert_eq!(platefetch::max_index(), 501_363_135);
/// ```
#[must_use]
pub const fn max_index() -> u64 {
    MAX_INDEX
}

/// Finds the block holding `index`, or `None` past [`MAX_INDEX`].
#[must_use]
pub fn block_of(index: u64) -> Option<Block> {
    BLOCKS.iter().copied().find(|block| block.contains(index))
}
