use crate::{Contender, ContainerKind, Key, Result};

/// Keys kept sorted in one contiguous buffer.
///
/// `locate` is a binary search; inserting and removing shift every element
/// after the position by one slot.
#[derive(Debug, Clone, Default)]
pub struct SortedArray {
    keys: Vec<Key>,
}

impl SortedArray {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Key] {
        &self.keys
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.keys.capacity()
    }
}

impl Contender for SortedArray {
    const KIND: ContainerKind = ContainerKind::Array;
    const BYTES_PER_KEY: usize = core::mem::size_of::<Key>();

    type Position = usize;

    fn with_capacity(capacity: usize) -> Result<Self> {
        let mut keys = Vec::new();
        keys.try_reserve_exact(capacity)?;
        Ok(Self { keys })
    }

    #[inline(always)]
    fn locate(&self, key: Key) -> usize {
        self.keys.partition_point(|&x| x < key)
    }

    #[inline(always)]
    fn key_at(&self, pos: &usize) -> Option<Key> {
        self.keys.get(*pos).copied()
    }

    #[inline]
    fn insert_at(&mut self, pos: usize, key: Key) -> Result<()> {
        debug_assert!(pos == 0 || self.keys[pos - 1] <= key);
        self.keys.try_reserve(1)?;
        self.keys.insert(pos, key);
        Ok(())
    }

    #[inline]
    fn remove_at(&mut self, pos: usize) -> Option<Key> {
        if pos >= self.keys.len() {
            return None;
        }

        Some(self.keys.remove(pos))
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Key> + '_> {
        Box::new(self.keys.iter().copied())
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.keys.len()
    }
}
