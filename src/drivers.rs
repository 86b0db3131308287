use log::debug;

use crate::{MaxHeap, PriorityQueue};

/// Sorts `array` in place, in ascending order, through a [`MaxHeap`].
///
/// Every entry is pushed, then the heap is popped into the slots from the
/// last one towards the first. Returns the sorted slice for chaining.
///
/// ```
/// use priority_heap::heap_sort;
///
/// let mut numbers = vec![5, 3, 3, 1, 4];
/// assert_eq!(heap_sort(&mut numbers), [1, 3, 3, 4, 5]);
///
/// let mut extremes = [0, i32::MIN, 5, i32::MAX];
/// assert_eq!(heap_sort(&mut extremes), [i32::MIN, 0, 5, i32::MAX]);
/// ```
pub fn heap_sort<T>(array: &mut [T]) -> &mut [T]
where
    T: Ord + Clone,
{
    debug!("heap_sort: sorting {} entries", array.len());

    let mut heap = MaxHeap::with_capacity(array.len());
    heap.extend(array.iter().cloned());

    for slot in array.iter_mut().rev() {
        match heap.pop() {
            Some(entry) => *slot = entry,
            None => break,
        }
    }

    array
}

/// Ranks teams by their loss count, ties broken by name, and returns the
/// name at the 1-based `rank`.
///
/// Returns `None` for rank `0` or when fewer than `rank` results exist.
///
/// ```
/// use priority_heap::find_ranking;
///
/// let results = vec![(3, "A"), (1, "B"), (1, "C"), (5, "D")];
/// assert_eq!(find_ranking(1, results.clone()), Some("B"));
/// assert_eq!(find_ranking(4, results.clone()), Some("D"));
/// assert_eq!(find_ranking(5, results), None);
/// ```
pub fn find_ranking<K, V, I>(rank: usize, results: I) -> Option<V>
where
    K: Ord,
    V: Ord,
    I: IntoIterator<Item = (K, V)>,
{
    let queue: PriorityQueue<K, V> = results.into_iter().collect();
    debug!("find_ranking: rank {} of {} results", rank, queue.len());

    if rank == 0 {
        return None;
    }

    queue
        .into_iter_sorted()
        .nth(rank - 1)
        .map(|node| node.value)
}
