// File: crates/gw-core/src/format.rs
// Summary: Label and tick formatting helpers.

/// Tick label style for a value axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickFormat {
    #[default]
    Plain,
    /// 1.5M / 350K style.
    Abbreviated,
}

impl TickFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            TickFormat::Plain => plain_number(value),
            TickFormat::Abbreviated => abbreviate_count(value),
        }
    }
}

/// Abbreviate large quantities: millions with one decimal, thousands with none.
///
/// `abbreviate_count(1_500_000.0) == "1.5M"`, `abbreviate_count(350_000.0) == "350K"`.
pub fn abbreviate_count(value: f64) -> String {
    if value >= 1e6 {
        format!("{:.1}M", value * 1e-6)
    } else if value >= 1e3 {
        format!("{:.0}K", value * 1e-3)
    } else {
        plain_number(value)
    }
}

fn plain_number(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

pub fn game_label(game: &str, model: &str) -> String {
    format!("{game} ({model})")
}

pub fn timeline_label(release_order: u32, game: &str, model: &str) -> String {
    format!("#{release_order} {}", game_label(game, model))
}

/// Tick years for a timeline spanning `min_year..=max_year`; one extra year closes the axis.
pub fn year_ticks(min_year: i32, max_year: i32) -> Vec<i32> {
    (min_year..=max_year + 1).collect()
}

pub fn copyright_notice(year: i32, holder: &str) -> String {
    format!("\u{00A9} {year} {holder}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations() {
        assert_eq!(abbreviate_count(1_500_000.0), "1.5M");
        assert_eq!(abbreviate_count(350_000.0), "350K");
        assert_eq!(abbreviate_count(1_000.0), "1K");
        assert_eq!(abbreviate_count(999.0), "999");
        assert_eq!(abbreviate_count(0.0), "0");
    }

    #[test]
    fn labels() {
        assert_eq!(game_label("Ball", "AC-01"), "Ball (AC-01)");
        assert_eq!(timeline_label(1, "Ball", "AC-01"), "#1 Ball (AC-01)");
        assert_eq!(year_ticks(1980, 1982), vec![1980, 1981, 1982, 1983]);
        assert_eq!(copyright_notice(2024, "Collector"), "\u{00A9} 2024 Collector");
    }
}
