use std::collections::BTreeSet;

use crate::{Contender, ContainerKind, Key, Result};

/// The balanced tree baseline, backed by [`BTreeSet`].
///
/// A position is the lower-bound key itself, `None` past the last key.
#[derive(Debug, Clone, Default)]
pub struct TreeSet {
    set: BTreeSet<Key>,
}

impl TreeSet {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Contender for TreeSet {
    const KIND: ContainerKind = ContainerKind::Tree;
    // B-tree nodes hold up to 11 keys plus child pointers and are rarely full
    const BYTES_PER_KEY: usize = 2 * core::mem::size_of::<Key>();

    type Position = Option<Key>;

    #[inline(always)]
    fn with_capacity(_capacity: usize) -> Result<Self> {
        Ok(Self::new())
    }

    #[inline(always)]
    fn locate(&self, key: Key) -> Option<Key> {
        self.set.range(key..).next().copied()
    }

    #[inline(always)]
    fn key_at(&self, pos: &Option<Key>) -> Option<Key> {
        *pos
    }

    #[inline]
    fn insert_at(&mut self, pos: Option<Key>, key: Key) -> Result<()> {
        debug_assert!(pos.map_or(true, |next| key <= next));
        self.set.insert(key);
        Ok(())
    }

    #[inline]
    fn remove_at(&mut self, pos: Option<Key>) -> Option<Key> {
        let key = pos?;
        self.set.remove(&key).then_some(key)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Key> + '_> {
        Box::new(self.set.iter().copied())
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.set.len()
    }
}
