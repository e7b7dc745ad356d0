// File: crates/gw-core/src/aggregate.rs
// Summary: Grouping/aggregation of device records into ordered (key, value) views.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::dataset::Dataset;
use crate::format::game_label;

/// Grouping dimension for [`aggregate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupBy {
    Year,
    Series,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Year(i32),
    Series(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Year(y) => write!(f, "{y}"),
            GroupKey::Series(s) => f.write_str(s),
        }
    }
}

/// Count records per group.
///
/// Years come out ascending. Series come out in order of their first release,
/// ties broken by name.
pub fn aggregate(ds: &Dataset, by: GroupBy) -> Vec<(GroupKey, usize)> {
    match by {
        GroupBy::Year => count_by_year(ds).into_iter().map(|(y, n)| (GroupKey::Year(y), n)).collect(),
        GroupBy::Series => series_summary(ds)
            .into_iter()
            .map(|s| (GroupKey::Series(s.series), s.games))
            .collect(),
    }
}

/// Number of releases per calendar year; only years with releases appear.
pub fn count_by_year(ds: &Dataset) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for r in ds.records() {
        *counts.entry(r.year()).or_default() += 1;
    }
    counts.into_iter().collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesSummary {
    pub series: String,
    /// Year of the first release in the series.
    pub first_year: i32,
    pub last_year: i32,
    pub games: usize,
}

pub fn series_summary(ds: &Dataset) -> Vec<SeriesSummary> {
    let mut acc: HashMap<&str, (NaiveDate, NaiveDate, usize)> = HashMap::new();
    for r in ds.records() {
        let e = acc.entry(r.series.as_str()).or_insert((r.released, r.released, 0));
        e.0 = e.0.min(r.released);
        e.1 = e.1.max(r.released);
        e.2 += 1;
    }
    let mut rows: Vec<_> = acc.into_iter().collect();
    rows.sort_by(|a, b| (a.1 .0, a.0).cmp(&(b.1 .0, b.0)));
    rows.into_iter()
        .map(|(series, (first, last, games))| SeriesSummary {
            series: series.to_string(),
            first_year: first.year(),
            last_year: last.year(),
            games,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductionEntry {
    /// `"{game} ({model})"`
    pub label: String,
    pub series: String,
    pub produced: u64,
}

/// Production quantity per game in release order; records without a quantity are skipped.
pub fn production(ds: &Dataset) -> Vec<ProductionEntry> {
    let mut rows: Vec<_> = ds.records().iter().filter(|r| r.produced.is_some()).collect();
    rows.sort_by_key(|r| r.release_order);
    rows.into_iter()
        .filter_map(|r| {
            Some(ProductionEntry {
                label: game_label(&r.game, &r.model),
                series: r.series.clone(),
                produced: r.produced?,
            })
        })
        .collect()
}
