//! # Introduction
//!
//! Bubble, selection, insertion, merge and quick sort written against a single [`orst::Sorter`]
//! trait, so that the algorithm behind a sort can be picked and swapped at runtime.
//!
//! ```
//! use strasort_core::orst::{Orst, QuickSorter};
//!
//! let words = ["pear", "banana", "fig", "apple"];
//! let by_len = words.orst_by_key(&QuickSorter, |w| w.len(), false).unwrap();
//! assert_eq!(by_len, ["fig", "pear", "apple", "banana"]);
//! ```

pub mod orst;
mod report;

use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use orst::{Algorithm, InsertionSorter, Selector, Sorter};

/// Sort values on the commandline. Install the `strasort` crate and run `strasort orst --help`
/// to see what options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct OrstArgs {
    #[command(subcommand)]
    command: OrstCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum OrstCommands {
    /// Sort the given values with one algorithm and print them in order.
    Sort {
        /// Algorithm to sort with.
        #[arg(short, long, value_enum, default_value_t = Algorithm::Merge)]
        algorithm: Algorithm,

        /// Sort in descending order.
        #[arg(short, long)]
        reverse: bool,

        /// What to compare the values by.
        #[arg(short, long, value_enum, default_value_t = KeyKind::Value)]
        key: KeyKind,

        /// Find insertion points with binary search. Only changes the insertion sorter.
        #[arg(long)]
        smart: bool,

        /// Values to sort.
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Walk through the built in strategies on a few small inputs.
    Demo,

    /// Sort random numbers with every algorithm, swapping strategies on one selector, and check
    /// each result against the standard library's stable sort.
    Verify {
        /// Number of random values.
        #[arg(short, long, default_value_t = 1_000)]
        len: usize,

        /// Seed for the random values. Random if absent.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Only check this algorithm.
        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum KeyKind {
    /// Parse every value as a number. Values that are not numbers, or are NaN, fail the sort.
    Value,

    /// The number of characters in each value.
    Length,
}

impl OrstArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            OrstCommands::Sort {
                algorithm,
                reverse,
                key,
                smart,
                values,
            } => {
                let sorted = match key {
                    KeyKind::Value => Selector::new(strategy(algorithm, smart))
                        .try_sort_by_key(&values, |v| v.trim().parse::<f64>(), reverse),
                    KeyKind::Length => Selector::new(strategy(algorithm, smart)).sort_by_key(
                        &values,
                        |v| v.chars().count(),
                        reverse,
                    ),
                }
                .with_context(|| format!("{algorithm} sort failed"))?;

                println!(
                    "{} {}",
                    format!("{algorithm} sort ->").bold().green(),
                    sorted.join(" ")
                );
            }
            OrstCommands::Demo => report::print_demo()?,
            OrstCommands::Verify {
                len,
                seed,
                algorithm,
            } => {
                let algorithms = match algorithm {
                    Some(algorithm) => vec![algorithm],
                    None => Algorithm::ALL.to_vec(),
                };
                report::verify(len, seed, &algorithms)?;
            }
        }

        Ok(())
    }
}

fn strategy<K>(algorithm: Algorithm, smart: bool) -> Box<dyn Sorter<String, K>>
where
    K: PartialOrd,
{
    match algorithm {
        Algorithm::Insertion if smart => Box::new(InsertionSorter { smart }),
        _ => algorithm.sorter(),
    }
}
