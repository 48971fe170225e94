//! # Sorter
//!
//! The step-animated quicksort and the small vocabulary it speaks.
//!
//! ```text
//! quick_sort ──► sort (recursive driver) ──► partition ──► swap
//!                   │                           │
//!                   └── clears pivot flags      └── Pacer::pause at every
//!                                                   active / swapping transition
//! ```
//!
//! The algorithm knows nothing about terminals. Anything that wants to watch it
//! implements [`Pacer`] and receives a read-only view of the array at every
//! pause point.

pub mod quicksort;
pub mod tokens;
pub mod types;

pub use quicksort::{partition, quick_sort, sort, swap};
pub use tokens::{CancellationToken, DelayToken, Pacer, sleep};
pub use types::{Comparator, Direction, SortItem, Step, ascending, descending};
