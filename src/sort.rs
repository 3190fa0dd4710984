//! A family of sorting procedures over slices of ordered values.
//!
//! Every function here takes a mutable slice, terminates on any finite
//! input, and leaves the slice a non-decreasing permutation of what it was
//! given. Empty and single-element slices are already sorted and return
//! immediately. The comparison sorts work for any `T: Ord` with the type's
//! natural ordering; there is no comparator injection.
//!
//! Each procedure documents its own contract: whether it sorts in place,
//! whether it is stable (equal elements keep their relative input order),
//! and its time and space complexity. The two distribution sorts,
//! [`counting_sort`] and [`radix_sort`], only work on integers and are the
//! module's only fallible entry points; see [`SortError`].

use thiserror::Error;

use crate::tree::Tree;

/// Largest value range (`max - min + 1`) for which [`counting_sort`] will
/// allocate a histogram.
const MAX_HISTOGRAM_SPAN: u128 = 1 << 32;

/// Base used by [`radix_sort`]'s digit passes.
const RADIX_BASE: i64 = 10;

/// Error returned by the distribution sorts when the input falls outside
/// their documented domain. Detection happens before any element is moved,
/// so a failed call leaves the slice untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// [`radix_sort`] only supports non-negative integers.
    #[error("negative value {value} at index {index}: radix sort only supports non-negative integers")]
    NegativeValue {
        /// Index of the first offending element.
        index: usize,
        /// The offending element.
        value: i64,
    },
    /// [`counting_sort`]'s value range is too wide to allocate a histogram
    /// for.
    #[error("value range {span} exceeds the counting sort histogram limit")]
    RangeTooLarge {
        /// The rejected range, `max - min + 1`.
        span: u128,
    },
}

/// Performs bubble sort: repeated adjacent-swap passes over the whole slice
/// until a pass performs zero swaps.
///
/// Comparison sort, in place, stable.
///
/// Time complexity: `Θ(n²)` worst/average case, `Θ(n)` best case (already
/// sorted). Memory: `Θ(1)`.
///
/// # Examples
///
/// ```
/// use treesort::sort;
///
/// let mut items = [3, 1, 2];
/// sort::bubble_sort(&mut items);
///
/// assert_eq!(items, [1, 2, 3]);
/// ```
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let mut swapped = true;
    while swapped {
        swapped = false;
        for j in 1..items.len() {
            if items[j - 1] > items[j] {
                items.swap(j - 1, j);
                swapped = true;
            }
        }
    }
}

/// Performs selection sort: repeatedly swaps the minimum of the unsorted
/// suffix into place at the end of the growing sorted prefix.
///
/// Comparison sort, in place, unstable (the swap can carry an element past
/// an equal one).
///
/// Time complexity: `Θ(n²)` in all cases. Memory: `Θ(1)`.
///
/// # Examples
///
/// ```
/// use treesort::sort;
///
/// let mut items = [3, 1, 2];
/// sort::selection_sort(&mut items);
///
/// assert_eq!(items, [1, 2, 3]);
/// ```
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    for i in 0..items.len().saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..items.len() {
            if items[j] < items[min_index] {
                min_index = j;
            }
        }
        items.swap(i, min_index);
    }
}

/// Performs insertion sort: each element is shifted leftward past larger
/// predecessors into its place in the growing sorted prefix.
///
/// Comparison sort, in place, stable.
///
/// Time complexity: `Θ(n²)` worst/average case, `Θ(n)` best case (already
/// sorted). Memory: `Θ(1)`.
///
/// # Examples
///
/// ```
/// use treesort::sort;
///
/// let mut items = [3, 1, 2];
/// sort::insertion_sort(&mut items);
///
/// assert_eq!(items, [1, 2, 3]);
/// ```
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j] < items[j - 1] {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Performs heapsort: builds a max-heap over the slice by sifting down every
/// parent from the last one up to the root, then repeatedly swaps the heap's
/// maximum (`items[0]`) with the current heap end and sifts the new root
/// down through the reduced heap.
///
/// Comparison sort, in place, unstable.
///
/// Time complexity: `Θ(n lg n)` worst/average case, `Θ(n)` best case (all
/// elements equal). Memory: `Θ(1)`.
///
/// # Examples
///
/// ```
/// use treesort::sort;
///
/// let mut items = [3, 1, 2];
/// sort::heapsort(&mut items);
///
/// assert_eq!(items, [1, 2, 3]);
/// ```
pub fn heapsort<T: Ord>(items: &mut [T]) {
    build_heap(items);
    for end in (1..items.len()).rev() {
        items.swap(0, end);
        sift_down(items, 0, end);
    }
}

/// Turns the slice into a max-heap by sifting down from the last parent
/// (index `len / 2 - 1`) to the root. Indices past that point are leaves and
/// already trivial heaps.
fn build_heap<T: Ord>(items: &mut [T]) {
    for parent in (0..items.len() / 2).rev() {
        sift_down(items, parent, items.len());
    }
}

/// Restores the max-heap invariant below `parent`, treating `items[..bound]`
/// as the active heap. The children of index `i` live at `2i + 1` and
/// `2i + 2`; each step compares both in-bound children, picks the larger,
/// and swaps only if the parent is smaller, stopping as soon as no swap is
/// needed or the node has no children within the bound.
fn sift_down<T: Ord>(items: &mut [T], mut parent: usize, bound: usize) {
    loop {
        let left = 2 * parent + 1;
        let right = left + 1;
        if left >= bound {
            return;
        }

        let mut larger = left;
        if right < bound && items[right] > items[left] {
            larger = right;
        }
        if items[larger] <= items[parent] {
            return;
        }

        items.swap(parent, larger);
        parent = larger;
    }
}

/// Performs quicksort with Lomuto partitioning: the last element is the
/// pivot, everything `<=` it is swapped into a growing front region, the
/// pivot lands on the region's boundary, and both sides (exclusive of the
/// pivot) are sorted in turn.
///
/// Comparison sort, in place, unstable.
///
/// Time complexity: `Θ(n lg n)` average case, `Θ(n²)` worst case (already
/// sorted input is the classic trigger). Memory: `Θ(lg n)` recursion.
///
/// # Examples
///
/// ```
/// use treesort::sort;
///
/// let mut items = [4, 2, 4, 1, 2];
/// sort::quicksort(&mut items);
///
/// assert_eq!(items, [1, 2, 2, 4, 4]);
/// ```
pub fn quicksort<T: Ord>(items: &mut [T]) {
    // Recurse into the smaller partition and loop on the larger one, so the
    // stack depth stays O(lg n) even when the partitioning degenerates.
    let mut items = items;
    while items.len() > 1 {
        let pivot = partition(items);
        let (left, rest) = items.split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() <= right.len() {
            quicksort(left);
            items = right;
        } else {
            quicksort(right);
            items = left;
        }
    }
}

/// Lomuto partition over the whole slice with `items[len - 1]` as the pivot.
/// Scans left to right, swapping every element `<=` the pivot into the front
/// region, then swaps the pivot onto the boundary and returns its final
/// index.
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let pivot = items.len() - 1;
    let mut boundary = 0;
    for i in 0..pivot {
        if items[i] <= items[pivot] {
            items.swap(i, boundary);
            boundary += 1;
        }
    }
    items.swap(boundary, pivot);
    boundary
}

/// Performs merge sort: recursively halves the slice, sorts each half, then
/// merges the two sorted halves by repeatedly taking the smaller head.
///
/// Comparison sort, not in place (each merge goes through a freshly
/// allocated buffer before being copied back), stable.
///
/// Time complexity: `Θ(n lg n)` in all cases. Memory: `Θ(n)`.
///
/// # Examples
///
/// ```
/// use treesort::sort;
///
/// let mut items = [3, 1, 2];
/// sort::merge_sort(&mut items);
///
/// assert_eq!(items, [1, 2, 3]);
/// ```
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }

    let mid = items.len() / 2;
    merge_sort(&mut items[..mid]);
    merge_sort(&mut items[mid..]);
    merge(items, mid);
}

/// Merges the two sorted halves `items[..mid]` and `items[mid..]` through a
/// fresh buffer, then copies the result back. Ties take the left half's
/// element first, which is what keeps [`merge_sort`] stable.
fn merge<T: Ord + Clone>(items: &mut [T], mid: usize) {
    let mut merged = Vec::with_capacity(items.len());
    let (mut left, mut right) = (0, mid);

    while left < mid && right < items.len() {
        if items[left] <= items[right] {
            merged.push(items[left].clone());
            left += 1;
        } else {
            merged.push(items[right].clone());
            right += 1;
        }
    }
    merged.extend_from_slice(&items[left..mid]);
    merged.extend_from_slice(&items[right..]);

    for (slot, value) in items.iter_mut().zip(merged) {
        *slot = value;
    }
}

/// Performs tree sort: inserts every element into an ordered
/// [`Tree`](crate::tree::Tree) and overwrites the slice with the tree's
/// ascending in-order traversal.
///
/// Comparison sort, not in place, stable.
///
/// Time complexity: `Θ(n lg n)` average case, `Θ(n²)` worst case (already
/// sorted input builds a degenerate tree). Memory: `Θ(n)`.
///
/// # Examples
///
/// ```
/// use treesort::sort;
///
/// let mut items = [3, 1, 2];
/// sort::tree_sort(&mut items);
///
/// assert_eq!(items, [1, 2, 3]);
/// ```
pub fn tree_sort<T: Ord + Clone>(items: &mut [T]) {
    // Equal values descend left in the tree, so in-order traversal reads a
    // run of duplicates in reverse insertion order. Feeding the input in
    // reverse restores the original order among ties, keeping the sort
    // stable.
    let tree: Tree<T> = items.iter().rev().cloned().collect();
    for (slot, value) in items.iter_mut().zip(tree) {
        *slot = value;
    }
}

/// Performs counting sort: builds a frequency histogram over the value
/// range `[min, max]`, turns it into output positions by prefix sums, and
/// places each element into its position scanning the input in original
/// order, which preserves stability.
///
/// Distribution sort, not in place, stable. Negative values are supported:
/// the histogram is indexed by offset from the minimum.
///
/// Time complexity: `Θ(n + k)` where `k = max - min + 1`. Memory:
/// `Θ(n + k)`.
///
/// # Errors
///
/// Returns [`SortError::RangeTooLarge`], without touching the slice, when
/// `k` exceeds the histogram limit of 2³². Counting sort is the wrong tool
/// for sparse value ranges; the limit turns that misuse into an error
/// instead of a giant allocation.
///
/// # Examples
///
/// ```
/// use treesort::sort;
///
/// let mut items = [3, -1, 2, -1];
/// sort::counting_sort(&mut items)?;
///
/// assert_eq!(items, [-1, -1, 2, 3]);
/// # Ok::<(), sort::SortError>(())
/// ```
pub fn counting_sort(items: &mut [i64]) -> Result<(), SortError> {
    let (min, max) = match bounds(items) {
        Some(bounds) => bounds,
        None => return Ok(()),
    };
    let span = (max as i128 - min as i128 + 1) as u128;
    if span > MAX_HISTOGRAM_SPAN {
        return Err(SortError::RangeTooLarge { span });
    }

    let offset = |value: i64| (value as i128 - min as i128) as usize;
    let mut counts = vec![0usize; span as usize];
    for &value in items.iter() {
        counts[offset(value)] += 1;
    }

    // Prefix sums turn each count into the first output slot for its value.
    let mut next_slot = 0;
    for count in counts.iter_mut() {
        let this = *count;
        *count = next_slot;
        next_slot += this;
    }

    let mut output = vec![0i64; items.len()];
    for &value in items.iter() {
        let slot = &mut counts[offset(value)];
        output[*slot] = value;
        *slot += 1;
    }
    items.copy_from_slice(&output);
    Ok(())
}

/// Returns the smallest and largest values in the slice, or `None` when it
/// is empty.
fn bounds(items: &[i64]) -> Option<(i64, i64)> {
    let mut iter = items.iter();
    let first = *iter.next()?;
    let (mut min, mut max) = (first, first);
    for &value in iter {
        min = min.min(value);
        max = max.max(value);
    }
    Some((min, max))
}

/// Performs radix sort on non-negative integers: one stable counting pass
/// per base-10 digit, least significant digit first. Because each pass is
/// stable, earlier (less significant) orderings survive later passes and
/// the final order is correct.
///
/// Distribution sort, stable. Each digit pass goes through a same-size
/// buffer.
///
/// Time complexity: `Θ(d · (n + b))` where `d` is the digit count of the
/// maximum and `b` the base (10). Memory: `Θ(n + b)`.
///
/// # Errors
///
/// Negative values are unsupported: the sign does not live in any decimal
/// digit, so a digit-wise pass would order negatives by magnitude. Returns
/// [`SortError::NegativeValue`] for the first negative element, without
/// touching the slice. Use [`counting_sort`] for signed data.
///
/// # Examples
///
/// ```
/// use treesort::sort;
///
/// let mut items = [170, 45, 75, 90, 802, 24, 2, 66];
/// sort::radix_sort(&mut items)?;
///
/// assert_eq!(items, [2, 24, 45, 66, 75, 90, 170, 802]);
/// # Ok::<(), sort::SortError>(())
/// ```
pub fn radix_sort(items: &mut [i64]) -> Result<(), SortError> {
    if let Some(index) = items.iter().position(|&value| value < 0) {
        return Err(SortError::NegativeValue {
            index,
            value: items[index],
        });
    }
    let max = match items.iter().max() {
        Some(&max) => max,
        None => return Ok(()),
    };

    let mut output = vec![0i64; items.len()];
    let mut divisor = 1;
    loop {
        let digit = |value: i64| (value / divisor % RADIX_BASE) as usize;

        let mut counts = [0usize; RADIX_BASE as usize];
        for &value in items.iter() {
            counts[digit(value)] += 1;
        }

        let mut next_slot = 0;
        for count in counts.iter_mut() {
            let this = *count;
            *count = next_slot;
            next_slot += this;
        }

        for &value in items.iter() {
            let slot = &mut counts[digit(value)];
            output[*slot] = value;
            *slot += 1;
        }
        items.copy_from_slice(&output);

        // Stop once every remaining digit is zero. The guard also keeps
        // `divisor` from overflowing on large maxima.
        if divisor > max / RADIX_BASE {
            return Ok(());
        }
        divisor *= RADIX_BASE;
    }
}
