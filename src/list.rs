//! Arena-backed doubly linked lists.
//!
//! Entries live in a slot [`Arena`] and are addressed by stable [`Handle`]s.
//! A [`List`] is only a `head`/`tail`/`len` triple; the `prev`/`next` links
//! are stored in the arena node itself. Several lists can therefore thread
//! through the same arena, which is what the LFU policy needs: one arena for
//! every entry, one list per frequency bucket.
//!
//! ```text
//!   arena: Arena<T>
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ Handle │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │   0    │ { value: A, prev: None,    next: Some(1) }  │
//!   │   1    │ { value: B, prev: Some(0), next: Some(2) }  │
//!   │   2    │ { value: C, prev: Some(1), next: None }     │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [0] ◄──► [1] ◄──► [2] ◄── tail
//! ```
//!
//! A node is linked into at most one list at a time. Every list operation is
//! O(1). Freed slots are recycled through a free list, so a cache that stays
//! at capacity never grows the arena.

/// Stable address of a node in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Handle(usize);

impl Handle {
    #[cfg(test)]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<Handle>,
    next: Option<Handle>,
}

/// Slot storage for list nodes.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` in an unlinked node and returns its handle.
    pub(crate) fn insert(&mut self, value: T) -> Handle {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        let idx = if let Some(idx) = self.free.pop() {
            self.slots[idx] = Some(node);
            idx
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        };
        self.len += 1;
        Handle(idx)
    }

    /// Frees the slot behind `handle`. The node must already be unlinked.
    pub(crate) fn remove(&mut self, handle: Handle) -> Option<T> {
        let node = self.slots.get_mut(handle.0)?.take()?;
        debug_assert!(node.prev.is_none() && node.next.is_none());
        self.free.push(handle.0);
        self.len -= 1;
        Some(node.value)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> Option<&T> {
        self.node(handle).map(|node| &node.value)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.node_mut(handle).map(|node| &mut node.value)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }

    #[inline]
    fn node(&self, handle: Handle) -> Option<&Node<T>> {
        self.slots.get(handle.0).and_then(|slot| slot.as_ref())
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> Option<&mut Node<T>> {
        self.slots.get_mut(handle.0).and_then(|slot| slot.as_mut())
    }
}

/// A doubly linked list threaded through an [`Arena`].
///
/// Head is the most recently attached node, tail the least recently attached.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct List {
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl List {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cfg(test)]
    pub(crate) fn front(&self) -> Option<Handle> {
        self.head
    }

    #[cfg(test)]
    pub(crate) fn back(&self) -> Option<Handle> {
        self.tail
    }

    /// Links an unlinked node in at the head.
    pub(crate) fn push_front<T>(&mut self, arena: &mut Arena<T>, handle: Handle) {
        let old_head = self.head;
        match arena.node_mut(handle) {
            Some(node) => {
                node.prev = None;
                node.next = old_head;
            }
            None => return,
        }
        match old_head.and_then(|h| arena.node_mut(h)) {
            Some(head_node) => head_node.prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.len += 1;
    }

    /// Unlinks a node from this list, leaving it in the arena.
    pub(crate) fn unlink<T>(&mut self, arena: &mut Arena<T>, handle: Handle) {
        let (prev, next) = match arena.node(handle) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev.and_then(|h| arena.node_mut(h)) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match next.and_then(|h| arena.node_mut(h)) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }

        if let Some(node) = arena.node_mut(handle) {
            node.prev = None;
            node.next = None;
        }
        self.len -= 1;
    }

    /// Moves a node already in this list to the head.
    pub(crate) fn move_to_front<T>(&mut self, arena: &mut Arena<T>, handle: Handle) {
        if self.head == Some(handle) {
            return;
        }
        self.unlink(arena, handle);
        self.push_front(arena, handle);
    }

    /// Unlinks the tail node and returns its handle.
    pub(crate) fn pop_back<T>(&mut self, arena: &mut Arena<T>) -> Option<Handle> {
        let tail = self.tail?;
        self.unlink(arena, tail);
        Some(tail)
    }

    /// Iterates handles from head to tail.
    pub(crate) fn iter<'a, T>(&self, arena: &'a Arena<T>) -> Iter<'a, T> {
        Iter {
            arena,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Walks the list and checks that every link is symmetric and that the
    /// recorded length and tail match what the walk finds.
    #[cfg(any(test, debug_assertions))]
    pub(crate) fn debug_validate<T>(&self, arena: &Arena<T>) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none(), "head set on empty list");
            assert!(self.tail.is_none(), "tail set on empty list");
            assert_eq!(self.len, 0, "empty list with non-zero len");
            return;
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(handle) = current {
            let node = arena.node(handle).expect("linked node missing from arena");
            assert_eq!(node.prev, prev, "broken prev link");
            if node.next.is_none() {
                assert_eq!(self.tail, Some(handle), "tail does not end the walk");
            }
            prev = Some(handle);
            current = node.next;
            count += 1;
            assert!(count <= self.len, "list walk exceeds recorded len");
        }
        assert_eq!(count, self.len, "list walk shorter than recorded len");
    }
}

/// Head-to-tail iterator over the handles of a [`List`].
pub(crate) struct Iter<'a, T> {
    arena: &'a Arena<T>,
    current: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Handle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.current?;
        let node = self.arena.node(handle)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((handle, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
