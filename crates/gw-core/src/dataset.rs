// File: crates/gw-core/src/dataset.rs
// Summary: Device records and the CSV dataset loader.
// Notes:
// - Headers are matched leniently (case, surrounding spaces, `_`/`-` vs space).
// - Columns the loader does not know are kept per record in `attributes`.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use crate::error::DataError;

/// One Game & Watch model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceRecord {
    /// 1-based position in the overall release sequence.
    pub release_order: u32,
    pub game: String,
    /// Model code, e.g. `AC-01`.
    pub model: String,
    /// Product line, e.g. `Silver` or `Wide Screen`.
    pub series: String,
    pub released: NaiveDate,
    /// Units produced, when known.
    pub produced: Option<u64>,
    /// Any other columns, keyed by normalized header.
    pub attributes: BTreeMap<String, String>,
}

impl DeviceRecord {
    pub fn year(&self) -> i32 {
        self.released.year()
    }
}

/// Read-only table of device records in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<DeviceRecord>,
}

const GAME: &[&str] = &["game", "title", "name"];
const MODEL: &[&str] = &["model", "model number"];
const SERIES: &[&str] = &["series"];
const RELEASED: &[&str] = &["date of release", "released", "release date", "date"];
const ORDER: &[&str] = &["release order", "order", "#"];
const PRODUCED: &[&str] = &["produced", "quantity", "units produced"];
const CANONICAL_COLUMNS: [&str; 6] = ["release order", "game", "model", "series", "date of release", "produced"];

impl Dataset {
    /// Build a dataset from records already in memory.
    ///
    /// Columns are the canonical ones followed by every attribute key the records carry,
    /// in sorted order.
    pub fn from_records(records: Vec<DeviceRecord>) -> Self {
        let mut columns: Vec<String> = CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect();
        let extra: BTreeSet<String> = records
            .iter()
            .flat_map(|r| r.attributes.keys())
            .map(|k| normalize_header(k))
            .collect();
        for key in extra {
            if !columns.contains(&key) {
                columns.push(key);
            }
        }
        Self { columns, records }
    }

    /// Load a CSV file with a header row.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DataError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let ds = Self::from_reader(file)?;
        info!(path = %path.display(), records = ds.len(), "loaded dataset");
        Ok(ds)
    }

    /// Parse CSV from any reader. The first row must be the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = rdr.headers()?.iter().map(normalize_header).collect::<Vec<_>>();

        let idx = |names: &[&str]| -> Option<usize> {
            columns.iter().position(|h| names.contains(&h.as_str()))
        };
        let i_game = idx(GAME);
        let i_model = idx(MODEL);
        let i_series = idx(SERIES);
        let i_released = idx(RELEASED);
        let i_order = idx(ORDER);
        let i_produced = idx(PRODUCED);

        let (i_game, i_model, i_series, i_released) = match (i_game, i_model, i_series, i_released) {
            (Some(g), Some(m), Some(s), Some(r)) => (g, m, s, r),
            _ => {
                let missing = [(i_game, GAME[0]), (i_model, MODEL[0]), (i_series, SERIES[0]), (i_released, RELEASED[0])]
                    .iter()
                    .filter(|(i, _)| i.is_none())
                    .map(|(_, name)| name.to_string())
                    .collect();
                return Err(DataError::MissingColumns(missing));
            }
        };

        let known = [Some(i_game), Some(i_model), Some(i_series), Some(i_released), i_order, i_produced];
        let extra: Vec<usize> = (0..columns.len()).filter(|i| !known.contains(&Some(*i))).collect();
        if !extra.is_empty() {
            debug!(columns = ?extra.iter().map(|&i| &columns[i]).collect::<Vec<_>>(), "keeping extra columns as attributes");
        }

        let mut records = Vec::new();
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let line = rec.position().map(|p| p.line()).unwrap_or(row as u64 + 2);
            let text = |i: usize| -> Result<String, DataError> {
                let v = rec.get(i).unwrap_or_default();
                if v.is_empty() {
                    return Err(DataError::EmptyField { line, column: columns[i].clone() });
                }
                Ok(v.to_string())
            };

            let release_order = match i_order {
                Some(i) => {
                    let v = text(i)?;
                    v.trim_start_matches('#').parse::<u32>().map_err(|e| DataError::InvalidField {
                        line,
                        column: columns[i].clone(),
                        value: v.clone(),
                        reason: e.to_string(),
                    })?
                }
                None => row as u32 + 1,
            };

            let released_raw = text(i_released)?;
            let released = parse_date(&released_raw).ok_or_else(|| DataError::InvalidField {
                line,
                column: columns[i_released].clone(),
                value: released_raw.clone(),
                reason: "expected YYYY-MM-DD, YYYY/MM/DD or 'Month D, YYYY'".into(),
            })?;

            // An empty cell means the quantity is unknown.
            let produced = match i_produced.map(|i| (i, rec.get(i).unwrap_or_default())) {
                Some((i, v)) if !v.is_empty() => Some(parse_quantity(v).ok_or_else(|| DataError::InvalidField {
                    line,
                    column: columns[i].clone(),
                    value: v.to_string(),
                    reason: "expected a non-negative integer".into(),
                })?),
                _ => None,
            };

            let attributes = extra
                .iter()
                .map(|&i| (columns[i].clone(), rec.get(i).unwrap_or_default().to_string()))
                .collect();

            records.push(DeviceRecord {
                release_order,
                game: text(i_game)?,
                model: text(i_model)?,
                series: text(i_series)?,
                released,
                produced,
                attributes,
            });
        }

        Ok(Self { columns, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DeviceRecord] {
        &self.records
    }

    /// Normalized column headers in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        let want = normalize_header(name);
        self.columns.iter().any(|c| *c == want)
    }

    /// Records released in or before `max_release_year`; `None` keeps everything.
    pub fn up_to_year(&self, max_release_year: Option<i32>) -> Dataset {
        match max_release_year {
            None => self.clone(),
            Some(max) => Dataset {
                columns: self.columns.clone(),
                records: self.records.iter().filter(|r| r.year() <= max).cloned().collect(),
            },
        }
    }

    /// Earliest and latest release year, if any records exist.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year()).min()?;
        let max = self.records.iter().map(|r| r.year()).max()?;
        Some((min, max))
    }
}

pub fn normalize_header(h: &str) -> String {
    h.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Digit grouping with `,`/`_`/space is accepted, as is an all-zero fraction (`1000000.0`).
fn parse_quantity(s: &str) -> Option<u64> {
    let digits: String = s.chars().filter(|c| !matches!(c, ',' | '_' | ' ')).collect();
    let whole = match digits.split_once('.') {
        Some((whole, frac)) if frac.chars().all(|c| c == '0') => whole,
        Some(_) => return None,
        None => digits.as_str(),
    };
    whole.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization() {
        assert_eq!(normalize_header("  Date_of-Release "), "date of release");
        assert_eq!(normalize_header("Release  Order"), "release order");
    }

    #[test]
    fn date_formats() {
        let want = NaiveDate::from_ymd_opt(1980, 4, 28);
        assert_eq!(parse_date("1980-04-28"), want);
        assert_eq!(parse_date("1980/04/28"), want);
        assert_eq!(parse_date("April 28, 1980"), want);
        assert_eq!(parse_date("28.04.1980"), None);
    }

    #[test]
    fn grouped_quantities() {
        assert_eq!(parse_quantity("1,000,000"), Some(1_000_000));
        assert_eq!(parse_quantity("250_000"), Some(250_000));
        assert_eq!(parse_quantity("-5"), None);
        assert_eq!(parse_quantity("1000000.0"), Some(1_000_000));
        assert_eq!(parse_quantity("1,500,000.00"), Some(1_500_000));
        assert_eq!(parse_quantity("2.5"), None);
        assert_eq!(parse_quantity("."), None);
    }
}
