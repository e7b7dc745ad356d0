// File: crates/gw-core/tests/figures.rs
// Purpose: Figure builders produce the expected chart models from the fixture dataset.

use gw_core::levels::manual_levels;
use gw_core::{Chart, ChartKind, ColorMode, DataError, Dataset, Figure, FigureOptions, LevelMode, NumericColumn};

fn fixture() -> Dataset {
    Dataset::load_csv(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/games.csv")).expect("fixture loads")
}

#[test]
fn games_produced_has_one_bar_per_known_quantity() {
    let Chart::Bar(c) = Figure::GamesProduced.build(&fixture(), &FigureOptions::default()).unwrap() else {
        panic!("expected a bar chart")
    };
    assert_eq!(c.bars.len(), 7);
    assert_eq!(c.bars[0].label, "Ball (AC-01)");
    assert_eq!(c.y_axis.max, 8_000_000.0 + 200_000.0);
    assert_eq!(c.y_axis.tick_label(1_500_000.0), "1.5M");
    assert!(c.bars.iter().all(|b| b.color.is_some()));

    let legend: Vec<&str> = c.legend.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(legend, vec!["Silver", "Gold", "Wide Screen", "Multi Screen"]);
}

#[test]
fn uniform_colors_drop_series_colors_and_legend() {
    let opts = FigureOptions { color_mode: ColorMode::Uniform, ..FigureOptions::default() };
    let Chart::Bar(c) = Figure::GamesProduced.build(&fixture(), &opts).unwrap() else { panic!() };
    assert!(c.bars.iter().all(|b| b.color.is_none()));
    assert!(c.legend.is_empty());
}

#[test]
fn releases_per_year_and_series() {
    let ds = fixture();
    let Chart::Bar(years) = Figure::GamesReleased.build(&ds, &FigureOptions::default()).unwrap() else { panic!() };
    let got: Vec<(&str, f64)> = years.bars.iter().map(|b| (b.label.as_str(), b.value)).collect();
    assert_eq!(got, vec![("1980", 3.0), ("1981", 3.0), ("1982", 3.0), ("1983", 1.0)]);
    assert_eq!(years.y_axis.max, 4.0);

    let Chart::Bar(series) = Figure::SeriesReleased.build(&ds, &FigureOptions::default()).unwrap() else { panic!() };
    let labels: Vec<&str> = series.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Silver", "Gold", "Wide Screen", "Multi Screen", "New Wide Screen", "Table Top"]);
    assert!(series.rotate_labels);
}

#[test]
fn max_release_year_limits_every_figure() {
    let opts = FigureOptions { max_release_year: Some(1980), ..FigureOptions::default() };
    let Chart::Bar(c) = Figure::GamesReleased.build(&fixture(), &opts).unwrap() else { panic!() };
    assert_eq!(c.bars.len(), 1);

    let Chart::Timeline(t) = Figure::Timeline.build(&fixture(), &opts).unwrap() else { panic!() };
    assert_eq!(t.events.len(), 3);
    assert_eq!(t.year_span(), Some((1980, 1980)));

    let early = FigureOptions { max_release_year: Some(1970), ..FigureOptions::default() };
    for f in Figure::DEFAULT {
        assert!(matches!(f.build(&fixture(), &early), Err(DataError::Empty(_))), "{f}");
    }
}

#[test]
fn timeline_levels_alternate_by_series() {
    let Chart::Timeline(t) = Figure::Timeline.build(&fixture(), &FigureOptions::default()).unwrap() else { panic!() };
    let levels: Vec<i32> = t.events.iter().map(|e| e.level).collect();
    assert_eq!(levels, vec![2, 3, 4, -2, 5, 6, -3, -4, 7, -5]);
    assert_eq!(t.events[0].text, "#1 Ball (AC-01)");
    assert!(t.footer.is_none());
}

#[test]
fn manual_levels_follow_the_table() {
    let opts = FigureOptions { levels: LevelMode::Manual, ..FigureOptions::default() };
    let Chart::Timeline(t) = Figure::Timeline.build(&fixture(), &opts).unwrap() else { panic!() };
    let levels: Vec<i32> = t.events.iter().map(|e| e.level).collect();
    assert_eq!(levels, manual_levels(10).unwrap());
    assert!(matches!(
        manual_levels(64),
        Err(DataError::TooManyForManualLevels { requested: 64, available: 63 })
    ));
}

#[test]
fn distribution_summarizes_known_values() {
    let chart = Figure::Distribution(NumericColumn::Produced).build(&fixture(), &FigureOptions::default()).unwrap();
    assert_eq!(chart.kind(), ChartKind::Distribution);
    let Chart::Distribution(d) = chart else { panic!() };
    assert_eq!(d.summary.count, 7);
    assert_eq!(d.summary.max, 8_000_000.0);
    assert_eq!(d.bins.iter().map(|b| b.count).sum::<usize>(), 7);
}

#[test]
fn figure_names_parse_and_print() {
    for f in [
        Figure::GamesProduced,
        Figure::GamesReleased,
        Figure::SeriesReleased,
        Figure::Timeline,
        Figure::Distribution(NumericColumn::ReleaseOrder),
    ] {
        assert_eq!(f.to_string().parse::<Figure>(), Ok(f));
    }
    assert_eq!("Games_Produced".parse::<Figure>(), Ok(Figure::GamesProduced));
    assert!("pie".parse::<Figure>().is_err());
    assert_eq!(Figure::Timeline.file_name(), "nintendo_game_and_watch_timeline.png");
    assert_eq!(
        Figure::Distribution(NumericColumn::ReleaseOrder).file_name(),
        "nintendo_game_and_watch_release_order_distribution.png"
    );
}
