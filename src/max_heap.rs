use core::cmp::Reverse;
use core::fmt;

use crate::{tree_format, IntegrityError, IntoIterSorted, PriorityQueue};

/// A max-heap over a [`PriorityQueue`].
///
/// Every entry `k` is stored as the node `(Reverse(k), k)`: the min-heap
/// order over the reversed keys is the max-heap order over the entries, and
/// the node's value keeps the entry itself. Only values are ever handed
/// back. Reversing never overflows, so the whole range of an integer type
/// is accepted.
///
/// # Examples
///
/// ```
/// use priority_heap::MaxHeap;
///
/// let mut heap = MaxHeap::new();
/// heap.push(1);
/// heap.push(9);
/// heap.push(3);
///
/// assert_eq!(heap.top(), Some(&9));
/// assert_eq!(heap.pop(), Some(9));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), None);
/// ```
pub struct MaxHeap<T> {
    data: PriorityQueue<Reverse<T>, T>,
}

impl<T: Clone> Clone for MaxHeap<T> {
    fn clone(&self) -> Self {
        MaxHeap {
            data: self.data.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MaxHeap").field(&self.data).finish()
    }
}

impl<T: fmt::Display> fmt::Display for MaxHeap<T> {
    /// Writes the entries in backing-array order, separated by `", "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", node.value)?;
        }
        Ok(())
    }
}

impl<T: Ord + Clone> Default for MaxHeap<T> {
    fn default() -> MaxHeap<T> {
        MaxHeap::new()
    }
}

impl<T: Ord + Clone> MaxHeap<T> {
    /// Creates an empty `MaxHeap`.
    ///
    /// ```
    /// use priority_heap::MaxHeap;
    /// let mut heap = MaxHeap::new();
    /// heap.push(i32::MIN);
    /// ```
    #[must_use]
    pub fn new() -> MaxHeap<T> {
        MaxHeap {
            data: PriorityQueue::new(),
        }
    }

    /// Creates an empty `MaxHeap` with room for `capacity` entries before
    /// reallocating.
    ///
    /// ```
    /// use priority_heap::MaxHeap;
    /// let mut heap = MaxHeap::with_capacity(8);
    /// heap.push(2u64);
    /// assert_eq!(heap.len(), 1);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> MaxHeap<T> {
        MaxHeap {
            data: PriorityQueue::with_capacity(capacity),
        }
    }

    /// Pushes an entry, stored as `(Reverse(key), key)`.
    ///
    /// ```
    /// use priority_heap::MaxHeap;
    /// let mut heap = MaxHeap::new();
    /// heap.push(i32::MIN);
    /// heap.push(7);
    /// assert_eq!(heap.top(), Some(&7));
    /// ```
    pub fn push(&mut self, key: T) {
        self.data.push(Reverse(key.clone()), key);
    }

    /// Removes the greatest entry, or returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop().map(|node| node.value)
    }

    /// Verifies the heap order of the inner queue and that every stored
    /// node keeps its own value as the reversed key.
    ///
    /// # Errors
    ///
    /// Returns the first violation found; mismatched keys are checked first.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        if let Some(index) = self.data.iter().position(|node| node.key.0 != node.value) {
            return Err(IntegrityError::KeyMismatch { index });
        }
        self.data.check_integrity()
    }

    /// Returns an iterator which pops entries in descending order.
    pub fn into_iter_sorted(self) -> IntoIterDescending<T> {
        IntoIterDescending {
            inner: self.data.into_iter_sorted(),
        }
    }
}

impl<T> MaxHeap<T> {
    /// Returns the greatest entry, or `None` if the heap is empty.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.data.top().map(|node| &node.value)
    }

    /// Returns the number of entries in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Renders the entries breadth first, one tree level per line, in the
    /// same layout as [`PriorityQueue::to_tree_format_string`].
    ///
    /// ```
    /// use priority_heap::MaxHeap;
    /// let heap: MaxHeap<i32> = [1, 9, 3].into_iter().collect();
    ///
    /// let tree = heap.to_tree_format_string();
    /// assert_eq!(tree.lines().next().map(str::trim), Some("9"));
    /// ```
    #[must_use]
    pub fn to_tree_format_string(&self) -> String
    where
        T: fmt::Display,
    {
        tree_format(self.data.iter().map(|node| node.value.to_string()))
    }
}

/// A consuming iterator popping the entries of a [`MaxHeap`] in descending
/// order.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterDescending<T> {
    inner: IntoIterSorted<Reverse<T>, T>,
}

impl<T: Ord> Iterator for IntoIterDescending<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|node| node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Ord> ExactSizeIterator for IntoIterDescending<T> {}

impl<T: Ord + Clone> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MaxHeap<T> {
        let mut heap = MaxHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord + Clone> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.data.reserve(lower);

        iterator.for_each(move |key| self.push(key));
    }
}
