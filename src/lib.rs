//! sortviz library exports for testing

pub mod core;
pub mod sorter;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use sorter::{
    CancellationToken, Comparator, DelayToken, Direction, Pacer, SortItem, Step, quick_sort,
};
