//! Lazily-growing store of per-dimension random shift masks.

use tracing::trace;

use crate::source::BitSource;

/// Smallest capacity step taken when the store has to grow.
pub const MIN_SHIFT_CAPACITY: usize = 4;

/// Per-dimension 32-bit random masks.
///
/// Entries `[0, len)` are populated. Capacity follows a doubling policy
/// (minimum [`MIN_SHIFT_CAPACITY`]) and only ever grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitalShift {
    masks: Vec<u32>,
    capacity: usize,
}

impl DigitalShift {
    /// Creates an empty store sized for `capacity` dimensions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            masks: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a store whose first `to` entries are fresh draws.
    pub fn random<S: BitSource + ?Sized>(to: usize, source: &mut S) -> Self {
        let mut shift = Self::with_capacity(to);
        shift.redraw(0, to, source);
        shift
    }

    /// Creates a store holding exactly the given masks.
    pub fn fixed(masks: Vec<u32>) -> Self {
        let capacity = masks.len();
        Self { masks, capacity }
    }

    /// Number of populated entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Returns `true` if no entry is populated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Logical capacity under the doubling policy.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Populated masks.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.masks
    }

    /// Mask of dimension `j`, if populated.
    #[inline]
    pub fn get(&self, j: usize) -> Option<u32> {
        self.masks.get(j).copied()
    }

    /// Draws fresh masks for entries `[from, to)`, keeping `[0, from)`.
    ///
    /// Entries at or beyond `to` are dropped; gaps below `from` that were
    /// never populated are zero-filled.
    pub fn redraw<S: BitSource + ?Sized>(&mut self, from: usize, to: usize, source: &mut S) {
        let from = from.min(to);
        if to > self.capacity {
            let mut grown = self.capacity.max(MIN_SHIFT_CAPACITY);
            while to > grown {
                grown *= 2;
            }
            trace!(from = self.capacity, to = grown, "growing digital shift");
            self.masks.reserve_exact(grown - self.masks.len());
            self.capacity = grown;
        }

        self.masks.resize(from, 0);
        self.masks.extend((from..to).map(|_| source.next_u32()));
    }
}
