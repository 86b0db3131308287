//! An indexed binary min-heap over key/value nodes, and a max-heap built on
//! top of it by reversing the key order.
//!
//! ```
//! use priority_heap::{find_ranking, heap_sort, MaxHeap, PriorityQueue};
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(3, "c");
//! queue.push(1, "a");
//! assert_eq!(queue.pop().map(|node| node.value), Some("a"));
//!
//! let mut heap = MaxHeap::new();
//! heap.push(1);
//! heap.push(9);
//! assert_eq!(heap.top(), Some(&9));
//!
//! let mut numbers = [5, 3, 3, 1, 4];
//! heap_sort(&mut numbers);
//! assert_eq!(numbers, [1, 3, 3, 4, 5]);
//!
//! let results = [(3, "A"), (1, "B"), (1, "C"), (5, "D")];
//! assert_eq!(find_ranking(2, results), Some("C"));
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::mem::{self, swap, ManuallyDrop};
use core::ptr;

use std::slice;

use log::trace;

mod drivers;
mod error;
mod max_heap;

pub use drivers::{find_ranking, heap_sort};
pub use error::IntegrityError;
pub use max_heap::{IntoIterDescending, MaxHeap};

/// A key/value pair stored in a [`PriorityQueue`].
///
/// Nodes are ordered by `key` first and by `value` when the keys are equal,
/// following the field order. Two nodes are equal only if both fields are.
///
/// ```
/// use priority_heap::Node;
///
/// assert!(Node::new(1, "b") < Node::new(2, "a"));
/// assert!(Node::new(1, "a") < Node::new(1, "b"));
/// assert_eq!(Node::new(1, "a"), Node::new(1, "a"));
/// assert_eq!(Node::new(4, "x").to_string(), "(4, x)");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Node<K, V> {
    /// Creates a node holding `key` and `value` as given.
    ///
    /// ```
    /// use priority_heap::Node;
    /// let node = Node::new(3, "three");
    /// assert_eq!((node.key, node.value), (3, "three"));
    /// ```
    #[must_use]
    pub fn new(key: K, value: V) -> Node<K, V> {
        Node { key, value }
    }

    /// Splits the node back into its `(key, value)` pair.
    ///
    /// ```
    /// use priority_heap::Node;
    /// assert_eq!(Node::new(1, 'a').into_pair(), (1, 'a'));
    /// ```
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Node<K, V> {
    fn from((key, value): (K, V)) -> Node<K, V> {
        Node { key, value }
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Node<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.key, self.value)
    }
}

/// A priority queue implemented with a binary heap.
///
/// This will be a min-heap over [`Node`]s: the node with the smallest key
/// is on top, and nodes with equal keys are ordered by their values.
///
/// It is a logic error for a key or value to be modified in such a way that
/// the node's ordering relative to any other node, as determined by the
/// [`Ord`] trait, changes while it is in the heap. This is normally only
/// possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe
/// code. The behavior resulting from such a logic error is not specified,
/// but will not be undefined behavior.
///
/// # Examples
///
/// ```
/// use priority_heap::{Node, PriorityQueue};
///
/// let mut queue = PriorityQueue::new();
///
/// // There's nothing in the queue yet, so `top` reports absence.
/// assert_eq!(queue.top(), None);
///
/// queue.push(4, "Eve");
/// queue.push(1, "Bob");
/// queue.push(1, "Alice");
///
/// // Equal keys fall back to the value: "Alice" < "Bob".
/// assert_eq!(queue.top(), Some(&Node::new(1, "Alice")));
/// assert_eq!(queue.len(), 3);
///
/// assert_eq!(queue.pop().map(|n| n.value), Some("Alice"));
/// assert_eq!(queue.pop().map(|n| n.value), Some("Bob"));
/// assert_eq!(queue.pop().map(|n| n.value), Some("Eve"));
/// assert_eq!(queue.pop(), None);
/// assert!(queue.is_empty());
/// ```
///
/// # Time complexity
///
/// | [push]  | [pop]         | [top]  |
/// |---------|---------------|--------|
/// | *O*(1)~ | *O*(log(*n*)) | *O*(1) |
///
/// The value for `push` is an expected cost; the worst case of a single
/// push is *O*(log(*n*)) for the sift plus a possible reallocation.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [push]: PriorityQueue::push
/// [pop]: PriorityQueue::pop
/// [top]: PriorityQueue::top
pub struct PriorityQueue<K, V> {
    data: Vec<Node<K, V>>,
}

impl<K: Clone, V: Clone> Clone for PriorityQueue<K, V> {
    fn clone(&self) -> Self {
        PriorityQueue {
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
    }
}

impl<K: Ord, V: Ord> Default for PriorityQueue<K, V> {
    /// Creates an empty `PriorityQueue<K, V>`.
    #[inline]
    fn default() -> PriorityQueue<K, V> {
        PriorityQueue::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for PriorityQueue<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for PriorityQueue<K, V> {
    /// Writes the nodes in backing-array order, separated by `", "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

#[allow(unused_unsafe)]
impl<K: Ord, V: Ord> PriorityQueue<K, V> {
    /// Creates an empty `PriorityQueue` as a min-heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use priority_heap::PriorityQueue;
    /// let mut queue = PriorityQueue::new();
    /// queue.push(4, "Steven");
    /// ```
    #[must_use]
    pub fn new() -> PriorityQueue<K, V> {
        PriorityQueue { data: vec![] }
    }

    /// Creates an empty `PriorityQueue` with a specific capacity.
    /// This preallocates enough memory for `capacity` nodes,
    /// so that the queue does not have to be reallocated
    /// until it contains at least that many nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use priority_heap::PriorityQueue;
    /// let mut queue = PriorityQueue::with_capacity(10);
    /// queue.push(4, "Eve");
    /// assert!(queue.capacity() >= 10);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> PriorityQueue<K, V> {
        PriorityQueue {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Pushes a node onto the queue and sifts it up to its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use priority_heap::{Node, PriorityQueue};
    /// let mut queue = PriorityQueue::new();
    /// queue.push(3, "Bob");
    /// queue.push(5, "Alice");
    /// queue.push(1, "Eve");
    ///
    /// assert_eq!(queue.len(), 3);
    /// assert_eq!(queue.top(), Some(&Node::new(1, "Eve")));
    /// ```
    pub fn push(&mut self, key: K, value: V) {
        let old_len = self.len();
        self.data.push(Node { key, value });
        // SAFETY: Since we pushed a new node it means that
        //  old_len = self.len() - 1 < self.len()
        let pos = unsafe { self.sift_up(old_len) };
        trace!("push: sifted up from {} to {}", old_len, pos);
    }

    /// Removes the smallest node from the queue and returns it, or `None`
    /// if it is empty.
    ///
    /// The root is exchanged with the last node, the last slot is removed,
    /// and the new root is sifted down.
    ///
    /// # Examples
    ///
    /// ```
    /// use priority_heap::PriorityQueue;
    /// let mut queue = PriorityQueue::new();
    /// queue.push(3, 'c');
    /// queue.push(1, 'a');
    ///
    /// assert_eq!(queue.pop().map(|n| n.key), Some(1));
    /// assert_eq!(queue.pop().map(|n| n.key), Some(3));
    /// assert_eq!(queue.pop(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a queue containing *n* nodes is *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<Node<K, V>> {
        self.data.pop().map(|mut item| {
            if !self.is_empty() {
                swap(&mut item, &mut self.data[0]);
                // SAFETY: !self.is_empty() means that self.len() > 0
                let pos = unsafe { self.sift_down(0) };
                trace!("pop: sifted down from 0 to {}", pos);
            }
            item
        })
    }

    /// Returns the index of the smaller child of the node at `index`, or
    /// `None` if it has no children. When both children compare equal the
    /// left one is returned.
    ///
    /// ```
    /// use priority_heap::PriorityQueue;
    /// let mut queue = PriorityQueue::new();
    /// queue.push(0, 0);
    /// queue.push(5, 5);
    /// queue.push(2, 2);
    ///
    /// assert_eq!(queue.min_child_index(0), Some(2));
    /// assert_eq!(queue.min_child_index(1), None);
    /// ```
    #[must_use]
    pub fn min_child_index(&self, index: usize) -> Option<usize> {
        let left = self.left_child_index(index)?;
        match self.right_child_index(index) {
            Some(right) if self.data[right] < self.data[left] => Some(right),
            _ => Some(left),
        }
    }

    /// Verifies that every node is less than or equal to its children.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrityError::HeapOrder`] naming the first parent/child
    /// pair, in array order, that is out of order.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        for child in 1..self.len() {
            let parent = (child - 1) / 2;
            if self.data[parent] > self.data[child] {
                return Err(IntegrityError::HeapOrder { parent, child });
            }
        }
        Ok(())
    }

    /// Consumes the `PriorityQueue` and returns its nodes in ascending order.
    ///
    /// ```
    /// use priority_heap::PriorityQueue;
    ///
    /// let queue: PriorityQueue<_, _> = [(2, 'b'), (1, 'z'), (2, 'a')].into_iter().collect();
    /// let keys: Vec<_> = queue.into_sorted_vec().into_iter().map(|n| n.into_pair()).collect();
    /// assert_eq!(keys, [(1, 'z'), (2, 'a'), (2, 'b')]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<Node<K, V>> {
        self.into_iter_sorted().collect()
    }

    /// Returns an iterator which pops nodes in ascending order.
    /// This method consumes the original queue.
    pub fn into_iter_sorted(self) -> IntoIterSorted<K, V> {
        IntoIterSorted { inner: self }
    }

    /// Clears the queue, returning an iterator over the removed nodes in
    /// ascending order. If the iterator is dropped before being fully
    /// consumed, the remaining nodes are still popped one by one, in
    /// ascending order, and dropped.
    ///
    /// Note: `.drain_sorted()` is *O*(*n* \* log(*n*)), and so is dropping
    /// it early, since every remaining node costs a pop.
    ///
    /// ```
    /// use priority_heap::PriorityQueue;
    ///
    /// let mut queue: PriorityQueue<_, _> = [(5, ()), (1, ()), (3, ())].into_iter().collect();
    /// let first: Vec<_> = queue.drain_sorted().take(2).map(|n| n.key).collect();
    /// assert_eq!(first, [1, 3]);
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, K, V> {
        DrainSorted { inner: self }
    }

    // sift_up and sift_down move the node out of the vector, leaving a hole,
    // shift the others along and write the node back where the hole ends up.
    // `Hole` fills the hole again when dropped, even on panic.
    // Comparisons are the strict ones of a swap-based traversal: a node moves
    // only while its parent (or smaller child) is strictly out of order.

    /// Moves the node at `pos` towards the root while its parent is greater.
    /// Returns the final position.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_up(&mut self, pos: usize) -> usize {
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > 0 {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > 0, so parent < hole.pos() is a valid
            //  index different from hole.pos().
            if hole.element() >= unsafe { hole.get(parent) } {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }

        hole.pos()
    }

    /// Moves the node at `pos` towards the leaves while its smaller child is
    /// less than it. Returns the final position.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down(&mut self, pos: usize) -> usize {
        let end = self.len();
        // SAFETY: The caller guarantees that pos < self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };
        let mut child = 2 * hole.pos() + 1;

        // Loop invariant: child == 2 * hole.pos() + 1.
        while child < end {
            // Same choice as `min_child_index`: right only if strictly smaller.
            // SAFETY: child < end and child + 1 < end are checked, and both
            //  are greater than hole.pos().
            if child + 1 < end && unsafe { hole.get(child + 1) < hole.get(child) } {
                child += 1;
            }

            // SAFETY: child was proven valid above.
            if hole.element() <= unsafe { hole.get(child) } {
                break;
            }

            // SAFETY: same as above.
            unsafe { hole.move_to(child) };
            child = 2 * hole.pos() + 1;
        }

        hole.pos()
    }
}

impl<K, V> PriorityQueue<K, V> {
    /// Returns the smallest node in the queue, or `None` if it is empty.
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn top(&self) -> Option<&Node<K, V>> {
        self.data.first()
    }

    /// Returns the index of the left child of `index`, if that child exists.
    #[must_use]
    pub fn left_child_index(&self, index: usize) -> Option<usize> {
        let child = index.checked_mul(2)?.checked_add(1)?;
        (child < self.len()).then_some(child)
    }

    /// Returns the index of the right child of `index`, if that child exists.
    #[must_use]
    pub fn right_child_index(&self, index: usize) -> Option<usize> {
        let child = index.checked_mul(2)?.checked_add(2)?;
        (child < self.len()).then_some(child)
    }

    /// Returns the index of the parent of `index`. The root has no parent,
    /// and neither does an index outside the queue.
    ///
    /// ```
    /// use priority_heap::PriorityQueue;
    /// let queue: PriorityQueue<_, _> = (0..5).map(|i| (i, i)).collect();
    ///
    /// assert_eq!(queue.parent_index(0), None);
    /// assert_eq!(queue.parent_index(2), Some(0));
    /// assert_eq!(queue.parent_index(4), Some(1));
    /// assert_eq!(queue.parent_index(5), None);
    /// ```
    #[must_use]
    pub fn parent_index(&self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.len() {
            return None;
        }
        Some((index - 1) / 2)
    }

    /// Returns an iterator visiting all nodes in backing-array order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            iter: self.data.iter(),
        }
    }

    /// Renders the queue breadth first, one tree level per line, each node
    /// centred in a field that halves in width with every level.
    ///
    /// ```
    /// use priority_heap::PriorityQueue;
    /// let mut queue = PriorityQueue::new();
    /// queue.push(2, 'b');
    /// queue.push(1, 'a');
    ///
    /// let tree = queue.to_tree_format_string();
    /// assert_eq!(tree.lines().count(), 2);
    /// assert_eq!(tree.lines().next().map(str::trim), Some("(1, a)"));
    /// ```
    #[must_use]
    pub fn to_tree_format_string(&self) -> String
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        tree_format(self.data.iter().map(ToString::to_string))
    }

    /// Returns the number of nodes the queue can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more nodes.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns the number of nodes in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all nodes from the queue.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for PriorityQueue<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<K: Eq, V: Eq> Eq for PriorityQueue<K, V> {}

/// Lays out `labels` breadth first: one line per tree level, each label
/// centred in a field of `10 * (len + 1)` columns divided by the level's
/// node capacity.
pub(crate) fn tree_format<I>(labels: I) -> String
where
    I: ExactSizeIterator<Item = String>,
{
    let mut string = String::new();
    let spaces = 10 * (1 + labels.len());
    let mut level_limit = 1;
    let mut nodes_on_level = 0;

    for label in labels {
        let width = spaces / level_limit;
        string.push_str(&format!("{:^width$}", label, width = width));

        nodes_on_level += 1;
        if nodes_on_level == level_limit {
            string.push('\n');
            level_limit *= 2;
            nodes_on_level = 0;
        }
    }

    string
}

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

#[allow(unused_unsafe)]
impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole {
            data,
            elt: ManuallyDrop::new(elt),
            pos,
        }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Move hole to new location
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

/// An iterator over the nodes of a `PriorityQueue`, in backing-array order.
///
/// This `struct` is created by [`PriorityQueue::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K: 'a, V: 'a> {
    iter: slice::Iter<'a, Node<K, V>>,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Node<K, V>;

    #[inline]
    fn next(&mut self) -> Option<&'a Node<K, V>> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a Node<K, V>> {
        self.iter.last()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a Node<K, V>> {
        self.iter.next_back()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A consuming iterator popping the nodes of a `PriorityQueue` in ascending
/// order.
///
/// This `struct` is created by [`PriorityQueue::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<K, V> {
    inner: PriorityQueue<K, V>,
}

impl<K: Ord, V: Ord> Iterator for IntoIterSorted<K, V> {
    type Item = Node<K, V>;

    #[inline]
    fn next(&mut self) -> Option<Node<K, V>> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<K: Ord, V: Ord> ExactSizeIterator for IntoIterSorted<K, V> {}

impl<K: Ord, V: Ord> FusedIterator for IntoIterSorted<K, V> {}

/// A draining iterator popping the nodes of a `PriorityQueue` in ascending
/// order.
///
/// This `struct` is created by [`PriorityQueue::drain_sorted()`].
#[derive(Debug)]
pub struct DrainSorted<'a, K: Ord, V: Ord> {
    inner: &'a mut PriorityQueue<K, V>,
}

impl<'a, K: Ord, V: Ord> Drop for DrainSorted<'a, K, V> {
    /// Pops the remaining nodes, in ascending order, and drops them.
    fn drop(&mut self) {
        struct DropGuard<'r, 'a, K: Ord, V: Ord>(&'r mut DrainSorted<'a, K, V>);

        impl<'r, 'a, K: Ord, V: Ord> Drop for DropGuard<'r, 'a, K, V> {
            fn drop(&mut self) {
                while self.0.inner.pop().is_some() {}
            }
        }

        while let Some(item) = self.inner.pop() {
            let guard = DropGuard(self);
            drop(item);
            mem::forget(guard);
        }
    }
}

impl<K: Ord, V: Ord> Iterator for DrainSorted<'_, K, V> {
    type Item = Node<K, V>;

    #[inline]
    fn next(&mut self) -> Option<Node<K, V>> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<K: Ord, V: Ord> ExactSizeIterator for DrainSorted<'_, K, V> {}

impl<K: Ord, V: Ord> FusedIterator for DrainSorted<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a PriorityQueue<K, V> {
    type Item = &'a Node<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K: Ord, V: Ord> FromIterator<(K, V)> for PriorityQueue<K, V> {
    /// Builds the queue by pushing every pair in turn.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> PriorityQueue<K, V> {
        let mut queue = PriorityQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<K: Ord, V: Ord> Extend<(K, V)> for PriorityQueue<K, V> {
    #[inline]
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |(key, value)| self.push(key, value));
    }
}

impl<K: Ord, V: Ord> Extend<Node<K, V>> for PriorityQueue<K, V> {
    #[inline]
    fn extend<I: IntoIterator<Item = Node<K, V>>>(&mut self, iter: I) {
        Extend::<(K, V)>::extend(self, iter.into_iter().map(Node::into_pair));
    }
}
