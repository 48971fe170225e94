use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One element of the array being sorted, with its transient visual state.
///
/// The flags live next to the value so that visual state travels with the
/// element whenever it is swapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortItem<T> {
    pub value: T,
    /// Currently being examined.
    pub active: bool,
    /// Mid-exchange with another element.
    pub swapping: bool,
    /// Chosen as the pivot of an in-flight partition.
    pub pivot: bool,
}

impl<T> SortItem<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            active: false,
            swapping: false,
            pivot: false,
        }
    }

    /// Builds a flag-free array from plain values.
    pub fn from_values<I>(values: I) -> Vec<Self>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(Self::new).collect()
    }

    /// True when no visual flag is set.
    pub fn is_idle(&self) -> bool {
        !self.active && !self.swapping && !self.pivot
    }
}

/// Returns true when the first value should be treated as "greater".
pub type Comparator<T> = fn(&T, &T) -> bool;

pub fn ascending<T: PartialOrd>(a: &T, b: &T) -> bool {
    a > b
}

pub fn descending<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// Sort direction, selectable from config and CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn comparator<T: PartialOrd>(self) -> Comparator<T> {
        match self {
            Direction::Ascending => ascending::<T>,
            Direction::Descending => descending::<T>,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }

    /// Parses the lowercase label used in config files and env vars.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Some(Direction::Ascending),
            "descending" | "desc" => Some(Direction::Descending),
            _ => None,
        }
    }
}

/// The visual transition a pause follows.
///
/// `index` is the scan position and `store` the partition's store index at the
/// moment the pause is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Both elements were just marked active.
    Compare { index: usize, store: usize },
    /// Both elements were just marked swapping.
    Swap { index: usize, store: usize },
    /// The exchange happened and swapping was cleared.
    Swapped { index: usize, store: usize },
}
