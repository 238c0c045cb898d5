//! Fixed-size bit array indexed by aligned block number.

/// One bit per aligned block at a single tier.
///
/// Sized once at construction and never grown. Bits are only ever set,
/// matching the permanent lifetime of parcels.
#[derive(Clone, Debug)]
pub struct TierBitmap {
    words: Vec<u64>,
    len: u64,
    ones: u64,
}

impl TierBitmap {
    /// A bitmap of `len` cleared bits.
    pub fn new(len: u64) -> Self {
        let words = len.div_ceil(64) as usize;
        Self {
            words: vec![0; words],
            len,
            ones: 0,
        }
    }

    /// Number of bits.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the bitmap holds zero bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read bit `block`. Out-of-range blocks read as clear.
    pub fn get(&self, block: u64) -> bool {
        if block >= self.len {
            return false;
        }
        let (word, bit) = Self::locate(block);
        self.words[word] & (1 << bit) != 0
    }

    /// Set bit `block`, returning whether it was previously clear.
    ///
    /// # Panics
    ///
    /// Panics if `block >= len()`.
    pub fn set(&mut self, block: u64) -> bool {
        assert!(block < self.len, "block {block} out of range {}", self.len);
        let (word, bit) = Self::locate(block);
        let mask = 1u64 << bit;
        let was_clear = self.words[word] & mask == 0;
        if was_clear {
            self.words[word] |= mask;
            self.ones += 1;
        }
        was_clear
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> u64 {
        self.ones
    }

    /// Heap bytes held by the backing words.
    pub fn memory_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }

    fn locate(block: u64) -> (usize, u32) {
        ((block / 64) as usize, (block % 64) as u32)
    }
}
