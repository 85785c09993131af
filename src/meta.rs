//! Policy-Specific Metadata Types
//!
//! | Policy | Metadata Type | Description |
//! |--------|---------------|-------------|
//! | LRU    | `()` (none)   | Position in list is implicit |
//! | LFU    | `LfuMeta`     | Access frequency counter |

/// Metadata for LFU (Least Frequently Used) cache entries.
///
/// The frequency starts at 1 when an entry is inserted and grows by exactly
/// one per promotion. It never decreases.
///
/// # Examples
///
/// ```
/// use cacherno::meta::LfuMeta;
///
/// let mut meta = LfuMeta::new(1);
/// assert_eq!(meta.increment(), 2);
/// assert_eq!(meta.frequency, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LfuMeta {
    /// Access frequency count.
    pub frequency: u64,
}

impl LfuMeta {
    /// Creates LFU metadata with the given initial frequency.
    #[inline]
    pub fn new(frequency: u64) -> Self {
        Self { frequency }
    }

    /// Increments the frequency counter and returns the new value.
    #[inline]
    pub fn increment(&mut self) -> u64 {
        self.frequency = self.frequency.saturating_add(1);
        self.frequency
    }
}

impl Default for LfuMeta {
    fn default() -> Self {
        Self::new(1)
    }
}
