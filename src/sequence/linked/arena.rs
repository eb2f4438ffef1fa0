//! Generation-checked slot storage for linked nodes.
//!
//! Nodes live in a single `Vec` of slots and refer to each other through
//! [`NodeHandle`]s instead of pointers. Freed slots are chained into a free
//! list and reused. Every reuse bumps the slot's generation, so a handle to a
//! removed node never resolves to the node that later took its slot.

use std::ops::{Index, IndexMut};

/// A reference to a node, valid until that node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeHandle {
    index: usize,
    generation: u32,
}

/// A list node: one element and its neighbours.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) previous: Option<NodeHandle>,
    pub(crate) next: Option<NodeHandle>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied {
        generation: u32,
        node: Node<T>,
    },
    Vacant {
        generation: u32,
        next_free: Option<usize>,
    },
}

/// Slot storage for [`Node`]s.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
}

impl<T> NodeArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
        }
    }

    /// Stores `node`, reusing a free slot when one exists.
    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeHandle {
        match self.free_head {
            Some(index) => {
                let generation = match self.slots[index] {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => {
                        self.free_head = next_free;
                        generation
                    }
                    Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
                };
                self.slots[index] = Slot::Occupied { generation, node };
                NodeHandle { index, generation }
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    node,
                });
                NodeHandle {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Frees the slot behind `handle` and returns its node.
    ///
    /// Returns `None` if the handle is stale.
    pub(crate) fn remove(&mut self, handle: NodeHandle) -> Option<Node<T>> {
        match self.slots.get(handle.index) {
            Some(Slot::Occupied { generation, .. }) if *generation == handle.generation => {}
            _ => return None,
        }
        let vacant = Slot::Vacant {
            generation: handle.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        self.free_head = Some(handle.index);
        match std::mem::replace(&mut self.slots[handle.index], vacant) {
            Slot::Occupied { node, .. } => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get(&self, handle: NodeHandle) -> Option<&Node<T>> {
        match self.slots.get(handle.index) {
            Some(Slot::Occupied { generation, node }) if *generation == handle.generation => {
                Some(node)
            }
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Node<T>> {
        match self.slots.get_mut(handle.index) {
            Some(Slot::Occupied { generation, node }) if *generation == handle.generation => {
                Some(node)
            }
            _ => None,
        }
    }

    /// Drops every node and invalidates every outstanding handle. Keeps the
    /// slot storage for reuse.
    pub(crate) fn clear(&mut self) {
        self.free_head = None;
        for index in (0..self.slots.len()).rev() {
            let generation = match &self.slots[index] {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => *generation,
            };
            self.slots[index] = Slot::Vacant {
                generation,
                next_free: self.free_head,
            };
            self.free_head = Some(index);
        }
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeHandle> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, handle: NodeHandle) -> &Node<T> {
        self.get(handle)
            .unwrap_or_else(|| unreachable!("stale node handle"))
    }
}

impl<T> IndexMut<NodeHandle> for NodeArena<T> {
    fn index_mut(&mut self, handle: NodeHandle) -> &mut Node<T> {
        self.get_mut(handle)
            .unwrap_or_else(|| unreachable!("stale node handle"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn node(element: i32) -> Node<i32> {
        Node {
            element,
            previous: None,
            next: None,
        }
    }

    #[rstest]
    fn test_insert_then_get() {
        let mut arena = NodeArena::new();
        let handle = arena.insert(node(7));
        assert_eq!(arena[handle].element, 7);
    }

    #[rstest]
    fn test_removed_handle_goes_stale() {
        let mut arena = NodeArena::new();
        let handle = arena.insert(node(1));
        assert_eq!(arena.remove(handle).map(|node| node.element), Some(1));
        assert!(arena.get(handle).is_none());
        assert!(arena.remove(handle).is_none());
    }

    #[rstest]
    fn test_slot_reuse_bumps_generation() {
        let mut arena = NodeArena::new();
        let first = arena.insert(node(1));
        arena.remove(first);
        let second = arena.insert(node(2));
        assert_eq!(first.index, second.index);
        assert_ne!(first, second);
        assert!(arena.get(first).is_none());
        assert_eq!(arena[second].element, 2);
    }

    #[rstest]
    fn test_clear_invalidates_and_reuses() {
        let mut arena = NodeArena::with_capacity(4);
        let handles: Vec<_> = (0..3).map(|element| arena.insert(node(element))).collect();
        arena.clear();
        assert!(handles.iter().all(|handle| arena.get(*handle).is_none()));
        let reused = arena.insert(node(9));
        assert_eq!(reused.index, 0);
        assert_eq!(arena.slots.len(), 3);
    }
}
