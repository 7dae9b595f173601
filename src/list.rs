//! Ordered list backing each SLRU segment.
//!
//! Nodes live in a slot arena owned by the list and are linked by slot index,
//! so a node can be moved or unlinked in O(1) without raw pointers. Callers
//! hold [`Element`] handles; the cache stores the same handle in its lookup map
//! that the list uses to find the node.
//!
//! ```text
//!   slots (Vec<Slot<T>>)
//!   ┌───────┬─────┬──────────────────────────────────────────┐
//!   │ index │ gen │ node                                     │
//!   ├───────┼─────┼──────────────────────────────────────────┤
//!   │   0   │  0  │ { value: A, prev: None,    next: Some(2) }│
//!   │   1   │  3  │ (free)                                   │
//!   │   2   │  1  │ { value: B, prev: Some(0), next: None }  │
//!   └───────┴─────┴──────────────────────────────────────────┘
//!
//!   head (MRU) ─► [0] ◄──► [2] ◄── tail (LRU)
//! ```
//!
//! A handle names a list, a slot, and the generation of that slot. Removing a
//! node bumps the slot generation and clearing a list gives it a new identity,
//! so stale handles are rejected instead of aliasing a recycled slot.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`List`] instance.
///
/// Every list (and every list after [`List::clear`]) gets a fresh id, which is
/// how an [`Element`] tells which list holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(u64);

impl ListId {
    fn next() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a node of a [`List`].
///
/// Handles are plain `Copy` values. They stay valid until the node is removed
/// or the list is cleared; after that every list operation ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    list: ListId,
    index: usize,
    generation: u64,
}

impl Element {
    /// Returns the id of the list this element was issued by.
    #[inline]
    pub fn list(&self) -> ListId {
        self.list
    }
}

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

struct Slot<T> {
    generation: u64,
    node: Option<Node<T>>,
}

/// A doubly linked list with O(1) push, move-to-front and removal by handle.
///
/// The front is the most recently used position and the back is the eviction
/// candidate.
///
/// # Examples
///
/// ```
/// use slru_cache::list::List;
///
/// let mut list = List::new();
/// let a = list.push_front("a");
/// let b = list.push_front("b");
///
/// assert_eq!(list.back(), Some(a));
/// list.move_to_front(a);
/// assert_eq!(list.back(), Some(b));
///
/// assert_eq!(list.remove(b), Some("b"));
/// assert_eq!(list.len(), 1);
/// assert!(!list.contains(b));
/// ```
pub struct List<T> {
    id: ListId,
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        List {
            id: ListId::next(),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the identity of this list.
    #[inline]
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `element` names a live node of this list.
    pub fn contains(&self, element: Element) -> bool {
        self.node(element).is_some()
    }

    /// Returns the handle of the most recently used node.
    pub fn front(&self) -> Option<Element> {
        self.head.map(|index| self.handle(index))
    }

    /// Returns the handle of the least recently used node.
    pub fn back(&self) -> Option<Element> {
        self.tail.map(|index| self.handle(index))
    }

    /// Returns a reference to the value behind `element`.
    pub fn get(&self, element: Element) -> Option<&T> {
        self.node(element).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value behind `element`.
    pub fn get_mut(&mut self, element: Element) -> Option<&mut T> {
        self.node_mut(element).map(|node| &mut node.value)
    }

    /// Inserts `value` at the front and returns its handle.
    pub fn push_front(&mut self, value: T) -> Element {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        };
        self.attach_front(index);
        self.len += 1;
        self.handle(index)
    }

    /// Moves the node behind `element` to the front.
    ///
    /// Returns `false` if the handle does not name a live node of this list.
    pub fn move_to_front(&mut self, element: Element) -> bool {
        if !self.contains(element) {
            return false;
        }
        if self.head == Some(element.index) {
            return true;
        }
        self.detach(element.index);
        self.attach_front(element.index);
        true
    }

    /// Unlinks the node behind `element` and returns its value.
    ///
    /// The handle is stale afterwards.
    pub fn remove(&mut self, element: Element) -> Option<T> {
        if !self.contains(element) {
            return None;
        }
        self.detach(element.index);
        let slot = &mut self.slots[element.index];
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(element.index);
        self.len -= 1;
        Some(node.value)
    }

    /// Drops every node. Handles issued before the call become stale.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.id = ListId::next();
    }

    /// Returns an iterator over the values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    fn handle(&self, index: usize) -> Element {
        Element {
            list: self.id,
            index,
            generation: self.slots[index].generation,
        }
    }

    fn node(&self, element: Element) -> Option<&Node<T>> {
        if element.list != self.id {
            return None;
        }
        let slot = self.slots.get(element.index)?;
        if slot.generation != element.generation {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, element: Element) -> Option<&mut Node<T>> {
        if element.list != self.id {
            return None;
        }
        let slot = self.slots.get_mut(element.index)?;
        if slot.generation != element.generation {
            return None;
        }
        slot.node.as_mut()
    }

    fn link(&self, index: usize) -> (Option<usize>, Option<usize>) {
        match self.slots[index].node.as_ref() {
            Some(node) => (node.prev, node.next),
            None => (None, None),
        }
    }

    fn set_prev(&mut self, index: usize, prev: Option<usize>) {
        if let Some(node) = self.slots[index].node.as_mut() {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, index: usize, next: Option<usize>) {
        if let Some(node) = self.slots[index].node.as_mut() {
            node.next = next;
        }
    }

    /// Unlinks `index` from its neighbours without freeing the slot.
    fn detach(&mut self, index: usize) {
        let (prev, next) = self.link(index);

        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }

        self.set_prev(index, None);
        self.set_next(index, None);
    }

    /// Links a detached `index` in as the new head.
    fn attach_front(&mut self, index: usize) {
        let old_head = self.head;
        self.set_prev(index, None);
        self.set_next(index, old_head);
        match old_head {
            Some(old_head) => self.set_prev(old_head, Some(index)),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("id", &self.id)
            .field("length", &self.len)
            .finish()
    }
}

/// Front-to-back iterator over the values of a [`List`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        let node = self.list.slots[index].node.as_ref()?;
        self.current = node.next;
        Some(&node.value)
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("current", &self.current).finish()
    }
}
