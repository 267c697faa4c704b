use thunderdome::{Arena, Index as ArenaIndex};

use crate::{Contender, ContainerKind, Key, Result};

#[derive(Debug, Clone)]
struct ListNode {
    key: Key,
    prev: Option<ArenaIndex>,
    next: Option<ArenaIndex>,
}

/// Doubly linked list with its nodes stored in an arena.
///
/// `locate` walks from the head. Once a position is known, linking or
/// unlinking a node touches only its neighbours.
#[derive(Debug, Clone, Default)]
pub struct ArenaList {
    nodes: Arena<ListNode>,
    head: Option<ArenaIndex>,
    tail: Option<ArenaIndex>,
}

impl ArenaList {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn first(&self) -> Option<Key> {
        self.head.map(|idx| self.nodes[idx].key)
    }

    #[inline(always)]
    pub fn last(&self) -> Option<Key> {
        self.tail.map(|idx| self.nodes[idx].key)
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// Panics if the links disagree with each other or with the arena.
    pub fn check(&self) {
        let mut prev = None;
        let mut cursor = self.head;
        let mut count = 0;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            assert_eq!(node.prev, prev);
            prev = Some(idx);
            cursor = node.next;
            count += 1;
        }
        assert_eq!(self.tail, prev);
        assert_eq!(count, self.nodes.len());
    }
}

impl Contender for ArenaList {
    const KIND: ContainerKind = ContainerKind::List;
    const BYTES_PER_KEY: usize = core::mem::size_of::<ListNode>();

    /// The node holding the lower bound, `None` past the tail.
    type Position = Option<ArenaIndex>;

    #[inline(always)]
    fn with_capacity(_capacity: usize) -> Result<Self> {
        Ok(Self::new())
    }

    fn locate(&self, key: Key) -> Option<ArenaIndex> {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            if node.key >= key {
                return Some(idx);
            }
            cursor = node.next;
        }

        None
    }

    #[inline(always)]
    fn key_at(&self, pos: &Option<ArenaIndex>) -> Option<Key> {
        pos.and_then(|idx| self.nodes.get(idx)).map(|node| node.key)
    }

    fn insert_at(&mut self, pos: Option<ArenaIndex>, key: Key) -> Result<()> {
        let prev = match pos {
            Some(next) => self.nodes[next].prev,
            None => self.tail,
        };
        let idx = self.nodes.insert(ListNode {
            key,
            prev,
            next: pos,
        });
        match prev {
            Some(prev) => self.nodes[prev].next = Some(idx),
            None => self.head = Some(idx),
        }
        match pos {
            Some(next) => self.nodes[next].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        Ok(())
    }

    fn remove_at(&mut self, pos: Option<ArenaIndex>) -> Option<Key> {
        let node = self.nodes.remove(pos?)?;
        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node.key)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Key> + '_> {
        Box::new(ArenaList::iter(self))
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Front-to-back traversal of an [`ArenaList`]
pub struct Iter<'a> {
    nodes: &'a Arena<ListNode>,
    cursor: Option<ArenaIndex>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.cursor?];
        self.cursor = node.next;
        Some(node.key)
    }
}
