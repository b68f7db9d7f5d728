use std::collections::{BTreeSet, HashMap};

use crate::models::{AnalyticsSummary, FeeModelSplit, FirmRecord, StateAum, StateCount};

/// Default number of states reported in each ranking
pub const DEFAULT_TOP_N: usize = 10;

/// Group firms by state, accumulating a value per group
///
/// Groups come back in first-seen order. Firms without a state are skipped.
fn group_by_state<'a, I, T, F>(firms: I, mut value: F) -> Vec<(String, T)>
where
    I: IntoIterator<Item = &'a FirmRecord>,
    T: Default + std::ops::AddAssign,
    F: FnMut(&FirmRecord) -> T,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, T)> = Vec::new();

    for firm in firms {
        let Some(state) = firm.state.as_deref() else {
            continue;
        };
        let slot = *index.entry(state).or_insert_with(|| {
            groups.push((state.to_string(), T::default()));
            groups.len() - 1
        });
        groups[slot].1 += value(firm);
    }

    groups
}

/// Number of firms per state, most common first, top `top_n`
pub fn firms_by_state<'a, I>(firms: I, top_n: usize) -> Vec<StateCount>
where
    I: IntoIterator<Item = &'a FirmRecord>,
{
    let mut counts = group_by_state(firms, |_| 1usize);
    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);

    counts
        .into_iter()
        .map(|(state, firms)| StateCount { state, firms })
        .collect()
}

/// Total AUM per state, largest first, top `top_n`
///
/// Firms with unknown AUM contribute nothing.
pub fn aum_by_state<'a, I>(firms: I, top_n: usize) -> Vec<StateAum>
where
    I: IntoIterator<Item = &'a FirmRecord>,
{
    let mut sums = group_by_state(firms, |firm| firm.aum_millions.unwrap_or(0.0));
    sums.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sums.truncate(top_n);

    sums.into_iter()
        .map(|(state, aum_millions)| StateAum { state, aum_millions })
        .collect()
}

/// Share of firms charging performance-based fees
///
/// Unknown fee flags count as no performance fee. An empty set reports 0% for both.
pub fn fee_model_split<'a, I>(firms: I) -> FeeModelSplit
where
    I: IntoIterator<Item = &'a FirmRecord>,
{
    let (performance_fee, no_performance_fee) =
        firms.into_iter().fold((0usize, 0usize), |(yes, no), firm| {
            if firm.performance_fee.unwrap_or(false) {
                (yes + 1, no)
            } else {
                (yes, no + 1)
            }
        });
    let total = performance_fee + no_performance_fee;

    let pct = |count: usize| {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        }
    };

    FeeModelSplit {
        performance_fee,
        no_performance_fee,
        performance_fee_pct: pct(performance_fee),
        no_performance_fee_pct: pct(no_performance_fee),
    }
}

/// All reporting aggregates over the full dataset or a filtered subset
pub fn summarize<'a, I>(firms: I, top_n: usize) -> AnalyticsSummary
where
    I: IntoIterator<Item = &'a FirmRecord>,
{
    let firms: Vec<&FirmRecord> = firms.into_iter().collect();

    AnalyticsSummary {
        total_firms: firms.len(),
        firms_by_state: firms_by_state(firms.iter().copied(), top_n),
        aum_by_state: aum_by_state(firms.iter().copied(), top_n),
        fee_model: fee_model_split(firms.iter().copied()),
    }
}

/// Sorted, de-duplicated state codes present in the dataset
pub fn distinct_states<'a, I>(firms: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a FirmRecord>,
{
    firms
        .into_iter()
        .filter_map(|firm| firm.state.as_deref())
        .filter(|state| !state.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
