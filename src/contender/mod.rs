use core::fmt::{Debug, Display};

use crate::{Key, Result};

mod array;
mod list;
mod tree;
pub use array::SortedArray;
pub use list::{ArenaList, Iter as ListIter};
pub use tree::TreeSet;

/// The container strategies racing each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum ContainerKind {
    /// Contiguous sorted array, binary search and element shifting
    Array,
    /// Balanced search tree
    Tree,
    /// Doubly linked list, linear scan
    List,
}

impl ContainerKind {
    /// The order the scheduler seeds its queue in.
    pub const ALL: [ContainerKind; 3] = [ContainerKind::Tree, ContainerKind::Array, ContainerKind::List];

    pub fn label(self) -> &'static str {
        match self {
            ContainerKind::Array => "array",
            ContainerKind::Tree => "tree",
            ContainerKind::List => "list",
        }
    }
}

impl Display for ContainerKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered container that can be driven by a workload.
///
/// A workload only ever inserts at the position returned by [`Contender::locate`]
/// and removes at the position of a key it knows is present, so the
/// container stays sorted between steps.
pub trait Contender: Sized + Debug {
    const KIND: ContainerKind;
    /// Approximate bytes one stored key occupies. Charged to the memory budget.
    const BYTES_PER_KEY: usize;

    type Position: Debug;

    /// `capacity` is the number of keys the workload will insert.
    fn with_capacity(capacity: usize) -> Result<Self>;

    /// Lower bound: the position of the first element not less than `key`.
    fn locate(&self, key: Key) -> Self::Position;

    /// The key stored at `pos`, `None` for the end position.
    fn key_at(&self, pos: &Self::Position) -> Option<Key>;

    /// `pos` must be the result of `locate(key)` on the current state.
    fn insert_at(&mut self, pos: Self::Position, key: Key) -> Result<()>;

    fn remove_at(&mut self, pos: Self::Position) -> Option<Key>;

    fn iter(&self) -> Box<dyn Iterator<Item = Key> + '_>;

    fn len(&self) -> usize;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn insert(&mut self, key: Key) -> Result<()> {
        let pos = self.locate(key);
        self.insert_at(pos, key)
    }

    /// Removes `key` if present
    fn remove(&mut self, key: Key) -> bool {
        let pos = self.locate(key);
        if self.key_at(&pos) != Some(key) {
            return false;
        }

        self.remove_at(pos).is_some()
    }
}
