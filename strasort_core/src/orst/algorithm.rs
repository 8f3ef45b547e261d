use std::fmt::{self, Display};

use clap::ValueEnum;

use super::{BubbleSorter, InsertionSorter, MergeSorter, QuickSorter, SelectionSorter, Sorter};

/// The built in strategies, for picking one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Builds the strategy behind this algorithm. Insertion sort uses the linear scan, construct
    /// an [`InsertionSorter`] directly for the binary search variant.
    pub fn sorter<T, K>(self) -> Box<dyn Sorter<T, K>>
    where
        T: Clone,
        K: PartialOrd,
    {
        match self {
            Algorithm::Bubble => Box::new(BubbleSorter),
            Algorithm::Selection => Box::new(SelectionSorter),
            Algorithm::Insertion => Box::new(InsertionSorter::default()),
            Algorithm::Merge => Box::new(MergeSorter),
            Algorithm::Quick => Box::new(QuickSorter),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
