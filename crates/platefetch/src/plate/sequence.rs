use super::{MAX_INDEX, PLATE_COUNT, Plate, PlateError};
use core::iter::FusedIterator;

/// An iterator over consecutive plates in index order.
///
/// Created with [`plates_from`] or [`Plates::range`]. Iteration stops after
/// `ZZZZZZ` or once the requested count is exhausted.
#[derive(Clone, Debug)]
pub struct Plates {
    next: u64,
    end: u64,
}

impl Plates {
    /// Iterates over at most `count` plates starting at `start`.
    ///
    /// The range is clipped at the last plate, so asking for more plates than
    /// remain is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::OutOfRange`] if `start` is past the last plate.
    pub fn range(start: u64, count: u64) -> Result<Self, PlateError> {
        if start > MAX_INDEX {
            return Err(PlateError::OutOfRange {
                index: start,
                max: MAX_INDEX,
            });
        }
        Ok(Self {
            next: start,
            end: start.saturating_add(count).min(PLATE_COUNT),
        })
    }
}

/// Iterates from `start` through the final plate.
///
/// # Errors
///
/// Returns [`PlateError::OutOfRange`] if `start` is past the last plate.
pub fn plates_from(start: u64) -> Result<Plates, PlateError> {
    Plates::range(start, PLATE_COUNT)
}

impl Iterator for Plates {
    type Item = Plate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let plate = Plate::encode_in_range(self.next);
        self.next += 1;
        Some(plate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self.next.saturating_add(n as u64).min(self.end);
        self.next()
    }
}

impl ExactSizeIterator for Plates {}

impl FusedIterator for Plates {}
