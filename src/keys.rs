use fxhash::FxHashMap;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::Key;

/// Insert order and erase order of a workload over the keys `0..n`.
///
/// Both orders are permutations of `0..n`. The shuffles are seeded with `n`,
/// so every contender sees the same orders at a given size, across runs too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySequence {
    insert_order: Vec<Key>,
    erase_order: Vec<Key>,
}

impl KeySequence {
    pub fn generate(n: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let mut insert_order: Vec<Key> = (0..n).collect();
        let mut erase_order = insert_order.clone();
        // one generator for both shuffles, insert order first
        insert_order.shuffle(&mut rng);
        erase_order.shuffle(&mut rng);
        Self {
            insert_order,
            erase_order,
        }
    }

    #[inline(always)]
    pub fn insert_order(&self) -> &[Key] {
        &self.insert_order
    }

    #[inline(always)]
    pub fn erase_order(&self) -> &[Key] {
        &self.erase_order
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.insert_order.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.insert_order.is_empty()
    }

    /// Bytes held by the two orders of a size `n` sequence.
    #[inline(always)]
    pub const fn footprint(n: usize) -> usize {
        n.saturating_mul(2 * core::mem::size_of::<Key>())
    }
}

/// Memoized [`KeySequence`]s, keyed by problem size.
#[derive(Debug, Default)]
pub struct KeyCache {
    sequences: FxHashMap<usize, KeySequence>,
    bytes: usize,
}

impl KeyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sequences for `n`, generating them on first use only.
    pub fn sequences_for(&mut self, n: usize) -> &KeySequence {
        self.sequences.entry(n).or_insert_with(|| {
            tracing::trace!(size = n, "generating key sequences");
            self.bytes = self.bytes.saturating_add(KeySequence::footprint(n));
            KeySequence::generate(n)
        })
    }

    pub fn contains(&self, n: usize) -> bool {
        self.sequences.contains_key(&n)
    }

    /// Bytes held by every cached sequence
    #[inline(always)]
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    /// What [`KeyCache::bytes`] would be once `n` is cached.
    pub fn bytes_with(&self, n: usize) -> usize {
        if self.contains(n) {
            self.bytes
        } else {
            self.bytes.saturating_add(KeySequence::footprint(n))
        }
    }

    /// Number of cached sizes
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn clear(&mut self) {
        self.sequences.clear();
        self.bytes = 0;
    }
}
