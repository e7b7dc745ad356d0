// File: crates/gw-core/src/axis.rs
// Summary: Value axis model with label, range and tick formatting.

use crate::format::TickFormat;
use crate::grid::nice_ticks;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: TickFormat::Plain }
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    /// Tick values at a nice step; short ranges get one tick per whole unit.
    pub fn ticks(&self, max_ticks: usize) -> Vec<f64> {
        let span = self.max - self.min;
        if (1.0..=max_ticks as f64).contains(&span) {
            return ((self.min.ceil() as i64)..=(self.max.floor() as i64)).map(|v| v as f64).collect();
        }
        nice_ticks(self.min, self.max, max_ticks)
    }

    pub fn tick_label(&self, v: f64) -> String {
        self.format.apply(v)
    }
}
