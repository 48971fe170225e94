//! # Step-animated quicksort
//!
//! Classic Lomuto-style quicksort with a pause after every visual transition.
//!
//! Cancellation is advisory. Once requested, the current partition scan stops,
//! the pivot is still dropped into place, and every later partition becomes a
//! no-op. The recursion keeps unwinding normally so the pivot cleanup passes
//! still run and every flag ends up cleared.

use futures::FutureExt;
use futures::future::BoxFuture;
use log::{debug, info, trace};

use super::tokens::{CancellationToken, Pacer};
use super::types::{Comparator, SortItem, Step};

/// Exchange two elements, flags included.
///
/// # Panics
///
/// Panics if either index is out of bounds.
pub fn swap<T>(items: &mut [SortItem<T>], a: usize, b: usize) {
    items.swap(a, b);
}

/// Rearrange `items[left..=right]` around the value at `pivot` and return the
/// pivot's final index.
///
/// Returns `None` without touching the array when cancellation was already
/// requested before the scan began. Values equal to the pivot are never swapped
/// forward.
pub async fn partition<T, P>(
    items: &mut [SortItem<T>],
    pivot: usize,
    left: usize,
    right: usize,
    comparator: Comparator<T>,
    pacer: &mut P,
    stop: &CancellationToken,
) -> Option<usize>
where
    T: PartialEq + Send + Sync,
    P: Pacer<T> + ?Sized,
{
    if stop.is_cancel_requested() {
        debug!("Partition [{left}, {right}] skipped: cancel requested");
        return None;
    }

    let mut store = left;
    // Park the pivot at the right edge for the duration of the scan
    swap(items, pivot, right);

    for v in left..right {
        if stop.is_cancel_requested() {
            info!("Partition [{left}, {right}] interrupted at index {v}");
            break;
        }

        items[v].active = true;
        items[store].active = true;
        trace!("compare {v} with store {store}");
        pacer.pause(Step::Compare { index: v, store }, items).await;

        let pivot_value = &items[right].value;
        if comparator(pivot_value, &items[v].value) && *pivot_value != items[v].value {
            items[v].swapping = true;
            items[store].swapping = true;
            pacer.pause(Step::Swap { index: v, store }, items).await;

            swap(items, v, store);
            items[v].swapping = false;
            items[store].swapping = false;
            pacer.pause(Step::Swapped { index: v, store }, items).await;

            items[store].active = false;
            store += 1;
        }

        items[v].active = false;
        items[store].active = false;
    }

    swap(items, right, store);
    debug!("Partition [{left}, {right}] settled pivot at {store}");
    Some(store)
}

/// Sort `items[left..=right]` in place.
///
/// `left` defaults to `0` and `right` to the last index. The left sub-range is
/// fully sorted, pauses included, before the right one starts.
pub fn sort<'a, T, P>(
    items: &'a mut [SortItem<T>],
    left: Option<usize>,
    right: Option<usize>,
    comparator: Comparator<T>,
    pacer: &'a mut P,
    stop: &'a CancellationToken,
) -> BoxFuture<'a, ()>
where
    T: PartialEq + Send + Sync,
    P: Pacer<T> + ?Sized,
{
    async move {
        let left = left.unwrap_or(0);
        let Some(right) = right.or_else(|| items.len().checked_sub(1)) else {
            return;
        };
        if left >= right {
            return;
        }

        let pivot = left + (right - left).div_ceil(2);
        items[pivot].pivot = true;

        if let Some(new_pivot) =
            partition(items, pivot, left, right, comparator, pacer, stop).await
        {
            if let Some(end) = new_pivot.checked_sub(1) {
                sort(&mut *items, Some(left), Some(end), comparator, &mut *pacer, stop).await;
            }
            sort(&mut *items, Some(new_pivot + 1), Some(right), comparator, &mut *pacer, stop)
                .await;
        }

        for item in items.iter_mut() {
            item.pivot = false;
        }
    }
    .boxed()
}

/// Sort the whole array in place, pausing through `pacer` at every visual step.
///
/// Resolves once the traversal completes, whether it did real work or was
/// degraded to a no-op walk by `stop`.
pub async fn quick_sort<T, P>(
    items: &mut [SortItem<T>],
    comparator: Comparator<T>,
    pacer: &mut P,
    stop: &CancellationToken,
) where
    T: PartialEq + Send + Sync,
    P: Pacer<T> + ?Sized,
{
    info!("Quicksort starting over {} items", items.len());
    sort(items, None, None, comparator, pacer, stop).await;
    if stop.is_cancel_requested() {
        info!("Quicksort finished early: cancel requested");
    } else {
        info!("Quicksort finished");
    }
}
