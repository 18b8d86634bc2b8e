//! Binary-heap sort.
//!
//! Buckets hold tens of words, so the O(n log n) worst case matters more than
//! quicksort's average case. Not stable; equal words are indistinguishable.

/// Sort `items` ascending in place.
pub fn heap_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();

    // Build a max-heap.
    for i in (0..n / 2).rev() {
        sift_down(items, n, i);
    }

    // Move the current maximum behind the shrinking heap bound.
    for end in (1..n).rev() {
        items.swap(0, end);
        sift_down(items, end, 0);
    }
}

/// Restore the max-heap property for the subtree at `root`, considering only
/// `items[..len]`.
fn sift_down<T: Ord>(items: &mut [T], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && items[left] > items[largest] {
            largest = left;
        }
        if right < len && items[right] > items[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        items.swap(root, largest);
        root = largest;
    }
}

/// True when `items` is non-decreasing.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}
