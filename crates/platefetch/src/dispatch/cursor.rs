use portable_atomic::{AtomicUsize, Ordering};

/// Hands out target indices `0..len`, each to exactly one caller.
///
/// Claiming is a single relaxed `fetch_add`; the index itself is the only
/// thing being synchronized, the outcome it leads to travels back through
/// the worker's join handle.
pub(crate) struct Cursor {
    #[cfg(feature = "cache-padded")]
    next: crossbeam_utils::CachePadded<AtomicUsize>,
    #[cfg(not(feature = "cache-padded"))]
    next: AtomicUsize,
    len: usize,
}

impl Cursor {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            #[cfg(feature = "cache-padded")]
            next: crossbeam_utils::CachePadded::new(AtomicUsize::new(0)),
            #[cfg(not(feature = "cache-padded"))]
            next: AtomicUsize::new(0),
            len,
        }
    }

    /// Claims the next unclaimed index, or `None` once all are taken.
    pub(crate) fn claim(&self) -> Option<usize> {
        // Each worker overshoots at most once before it stops, so the counter
        // cannot wrap in practice.
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        (index < self.len).then_some(index)
    }

    /// Number of indices handed out so far.
    pub(crate) fn claimed(&self) -> usize {
        self.next.load(Ordering::Relaxed).min(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashSet, sync::Arc, thread::scope};

    #[test]
    fn claims_each_index_once_in_order() {
        let cursor = Cursor::new(3);
        assert_eq!(cursor.claim(), Some(0));
        assert_eq!(cursor.claim(), Some(1));
        assert_eq!(cursor.claim(), Some(2));
        assert_eq!(cursor.claim(), None);
        assert_eq!(cursor.claim(), None);
        assert_eq!(cursor.claimed(), 3);
    }

    #[test]
    fn empty_cursor_yields_nothing() {
        let cursor = Cursor::new(0);
        assert_eq!(cursor.claim(), None);
        assert_eq!(cursor.claimed(), 0);
    }

    #[test]
    fn concurrent_claims_never_collide() {
        const THREADS: usize = 8;
        const LEN: usize = 10_000;

        let cursor = Arc::new(Cursor::new(LEN));
        let claimed = scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let cursor = Arc::clone(&cursor);
                    s.spawn(move || {
                        let mut mine = Vec::new();
                        while let Some(index) = cursor.claim() {
                            mine.push(index);
                        }
                        mine
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        assert_eq!(claimed.len(), LEN);
        let unique: HashSet<_> = claimed.into_iter().collect();
        assert_eq!(unique.len(), LEN);
        assert!(unique.iter().all(|&i| i < LEN));
    }
}
