//! Index-linked doubly linked list for recency and insertion orders.
//!
//! Stores nodes in a slab of slots linked by index, enabling stable
//! [`NodeId`] handles and O(1) push/move/detach without pointer-based nodes.
//! Freed slots are recycled through a free list, so a list that never exceeds
//! the reserved capacity allocates only at construction.
//!
//! ## Architecture
//!
//! ```text
//!   slots: Vec<Slot<T>>
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ NodeId │ Slot { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ 0      │ { value: A, prev: None, next: Some(1) }     │
//!   │ 1      │ { value: B, prev: Some(0), next: Some(2) }  │
//!   │ 2      │ { value: C, prev: Some(1), next: None }     │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [0] ◄──► [1] ◄──► [2] ◄── tail
//! ```
//!
//! ## Operations
//! - `push_front(value)`: allocate slot + attach at head
//! - `move_to_front(id)`: detach + attach at head
//! - `remove(id)` / `pop_back()`: detach + free slot
//! - `iter` / `iter_entries`: head-to-tail traversal
//!
//! `debug_validate_invariants()` is available in debug/test builds.

/// Stable handle to a node in a [`FrameList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the underlying slot index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Doubly linked list whose nodes live in an index-addressed slab.
#[derive(Debug)]
pub struct FrameList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> FrameList<T> {
    /// Creates an empty list with reserved slot capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots
            .get(id.0)
            .map(|slot| slot.value.is_some())
            .unwrap_or(false)
    }

    /// Returns the value at the front (head) of the list.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the value at the back (tail) of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the `NodeId` at the back (tail) of the list.
    pub fn back_id(&self) -> Option<NodeId> {
        self.tail
    }

    /// Returns the `NodeId` at the front (head) of the list.
    pub fn front_id(&self) -> Option<NodeId> {
        self.head
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.value.as_ref())
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.value.as_mut())
    }

    /// Inserts a new node at the front and returns its `NodeId`.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let id = self.allocate(value);
        self.attach_front(id);
        self.len += 1;
        id
    }

    /// Moves an existing node to the front; returns `false` if `id` is absent.
    pub fn move_to_front(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.head == Some(id) {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Removes the node `id` from the list and returns its value.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.detach(id);
        let value = self.slots[id.0].value.take();
        self.free.push(id);
        self.len -= 1;
        value
    }

    /// Removes and returns the back (tail) value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Returns an iterator over values from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.iter_entries().map(|(_, value)| value)
    }

    /// Returns an iterator of `(NodeId, &T)` from front to back.
    pub fn iter_entries(&self) -> Entries<'_, T> {
        Entries {
            list: self,
            current: self.head,
        }
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn allocate(&mut self, value: T) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.slots[id.0] = Slot {
                value: Some(value),
                prev: None,
                next: None,
            };
            id
        } else {
            self.slots.push(Slot {
                value: Some(value),
                prev: None,
                next: None,
            });
            NodeId(self.slots.len() - 1)
        }
    }

    fn detach(&mut self, id: NodeId) {
        let (prev, next) = {
            let slot = &self.slots[id.0];
            (slot.prev, slot.next)
        };

        match prev {
            Some(prev_id) => self.slots[prev_id.0].next = next,
            None => self.head = next,
        }
        match next {
            Some(next_id) => self.slots[next_id.0].prev = prev,
            None => self.tail = prev,
        }

        self.slots[id.0].prev = None;
        self.slots[id.0].next = None;
    }

    fn attach_front(&mut self, id: NodeId) {
        let old_head = self.head;
        self.slots[id.0].prev = None;
        self.slots[id.0].next = old_head;
        match old_head {
            Some(head_id) => self.slots[head_id.0].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len, 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            assert!(seen.insert(id));
            let slot = &self.slots[id.0];
            assert!(slot.value.is_some());
            assert_eq!(slot.prev, prev);

            prev = Some(id);
            current = slot.next;
            count += 1;
            assert!(count <= self.len);
        }

        assert_eq!(self.tail, prev);
        assert_eq!(count, self.len);
    }
}

/// Front-to-back iterator of `(NodeId, &T)` over a [`FrameList`].
pub struct Entries<'a, T> {
    list: &'a FrameList<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let slot = self.list.slots.get(id.0)?;
        self.current = slot.next;
        slot.value.as_ref().map(|value| (id, value))
    }
}
