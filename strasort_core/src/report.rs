use anyhow::bail;
use colored::Colorize;
use prettytable::{row, Table};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::orst::{
    merge_sort, quick_sort, Algorithm, BubbleSorter, FnSorter, InsertionSorter, OrderPolicy,
    Selector,
};

const DEMO_NUMBERS: [i32; 7] = [5, 1, 4, 2, 8, 0, 2];
const DEMO_WORDS: [&str; 4] = ["pear", "banana", "fig", "apple"];

pub(crate) fn print_demo() -> anyhow::Result<()> {
    println!(
        "{} {:?}",
        "Input ->".bold().underline().blue(),
        DEMO_NUMBERS
    );

    let mut table = Table::new();
    table.add_row(row!["Strategy".bold(), "Options".bold(), "Output".bold()]);

    let mut selector = Selector::new(BubbleSorter);
    table.add_row(row![
        "bubble (struct)",
        "",
        format!("{:?}", selector.sort(&DEMO_NUMBERS, false)?)
    ]);

    selector.set_strategy(FnSorter(merge_sort::<i32, i32>));
    table.add_row(row![
        "merge (function)",
        "",
        format!("{:?}", selector.sort(&DEMO_NUMBERS, false)?)
    ]);

    selector.set_strategy(FnSorter(quick_sort::<i32, i32>));
    table.add_row(row![
        "quick (function)",
        "",
        format!("{:?}", selector.sort(&DEMO_NUMBERS, false)?)
    ]);
    table.add_row(row![
        "quick (function)",
        "reverse",
        format!("{:?}", selector.sort(&DEMO_NUMBERS, true)?)
    ]);

    for algorithm in Algorithm::ALL {
        selector.set_strategy(algorithm.sorter());
        table.add_row(row![
            format!("{algorithm} (catalogue)"),
            "",
            format!("{:?}", selector.sort(&DEMO_NUMBERS, false)?)
        ]);
    }

    let words = Selector::new(InsertionSorter { smart: true });
    table.add_row(row![
        "insertion (smart)",
        "key = length",
        format!("{:?}", words.sort_by_key(&DEMO_WORDS, |w| w.len(), false)?)
    ]);

    table.printstd();
    Ok(())
}

struct Checks {
    ascending: bool,
    descending: bool,
    stable: bool,
}

impl Checks {
    fn passed(&self) -> bool {
        self.ascending && self.descending && self.stable
    }
}

fn mark(ok: bool) -> colored::ColoredString {
    if ok {
        "ok".green()
    } else {
        "FAILED".red().bold()
    }
}

pub(crate) fn verify(
    len: usize,
    seed: Option<u64>,
    algorithms: &[Algorithm],
) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Narrow range so equal keys are common.
    let input = (0..len)
        .map(|i| (rng.gen_range(0..(len / 4).max(1) as i64), i))
        .collect::<Vec<_>>();

    let mut ascending = input.clone();
    ascending.sort_by(|a, b| a.0.cmp(&b.0));
    let mut descending = input.clone();
    descending.sort_by(|a, b| b.0.cmp(&a.0));

    println!(
        "{} {}",
        "List Size -> ".bold().underline().blue(),
        len.to_string().bold()
    );

    let mut table = Table::new();
    table.add_row(row![
        "Sorter".bold(),
        "Ascending".bold(),
        "Descending".bold(),
        "Stable".bold()
    ]);

    let value = |p: &(i64, usize)| p.0;
    let mut selector = Selector::new(BubbleSorter);
    let mut failed = Vec::new();
    for &algorithm in algorithms {
        selector.set_strategy(algorithm.sorter());

        let by_value = selector.try_sort(&input, &OrderPolicy::by_key(value, false))?;
        let reversed = selector.try_sort(&input, &OrderPolicy::by_key(value, true))?;

        let checks = Checks {
            ascending: by_value.iter().map(|p| p.0).eq(ascending.iter().map(|p| p.0)),
            descending: reversed.iter().map(|p| p.0).eq(descending.iter().map(|p| p.0)),
            stable: by_value == ascending && reversed == descending,
        };

        table.add_row(row![
            algorithm.name(),
            mark(checks.ascending),
            mark(checks.descending),
            mark(checks.stable)
        ]);

        if !checks.passed() {
            failed.push(algorithm.name());
        }
    }

    table.printstd();
    println!();

    if !failed.is_empty() {
        bail!("{} did not sort correctly", failed.join(", "));
    }
    Ok(())
}
