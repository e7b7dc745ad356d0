// File: crates/gw-core/src/scale.rs
// Summary: Value, band (categorical) and date scales mapping data to pixels.

use chrono::NaiveDate;

/// Linear map from a data domain onto a pixel range. The range may be inverted
/// (e.g. bottom -> top for a Y axis).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f32,
    pub r1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f32, r1: f32) -> Self {
        let mut s = Self { d0, d1, r0, r1 };
        if (s.d1 - s.d0).abs() < 1e-12 { s.d1 = s.d0 + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.r0 + ((v - self.d0) / (self.d1 - self.d0)) as f32 * (self.r1 - self.r0)
    }
}

/// Evenly spaced bands for categorical bars; `fill` is the fraction of each band
/// covered by its bar.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub band: f32,
    pub fill: f32,
}

impl BandScale {
    pub fn new(n: usize, left_px: f32, right_px: f32, fill: f32) -> Self {
        let band = (right_px - left_px) / n.max(1) as f32;
        Self { left_px, band, fill: fill.clamp(0.05, 1.0) }
    }
    #[inline]
    pub fn center(&self, i: usize) -> f32 {
        self.left_px + self.band * (i as f32 + 0.5)
    }
    #[inline]
    pub fn bar_width(&self) -> f32 {
        self.band * self.fill
    }
}

/// Calendar dates onto pixels, linear in days.
#[derive(Clone, Copy, Debug)]
pub struct DateScale {
    inner: LinearScale,
}

impl DateScale {
    pub fn new(start: NaiveDate, end: NaiveDate, left_px: f32, right_px: f32) -> Self {
        Self { inner: LinearScale::new(day_number(start), day_number(end), left_px, right_px) }
    }
    #[inline]
    pub fn to_px(&self, d: NaiveDate) -> f32 {
        self.inner.to_px(day_number(d))
    }
}

fn day_number(d: NaiveDate) -> f64 {
    use chrono::Datelike;
    d.num_days_from_ce() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_handles_inverted_range() {
        let s = LinearScale::new(0.0, 10.0, 100.0, 0.0);
        assert_eq!(s.to_px(0.0), 100.0);
        assert_eq!(s.to_px(10.0), 0.0);
        assert_eq!(s.to_px(5.0), 50.0);
    }

    #[test]
    fn bands_center_bars() {
        let b = BandScale::new(4, 0.0, 400.0, 0.8);
        assert_eq!(b.center(0), 50.0);
        assert_eq!(b.center(3), 350.0);
        assert_eq!(b.bar_width(), 80.0);
    }

    #[test]
    fn dates_map_by_day() {
        let start = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(1981, 1, 1).unwrap();
        let s = DateScale::new(start, end, 0.0, 366.0);
        assert_eq!(s.to_px(start), 0.0);
        assert_eq!(s.to_px(end), 366.0);
    }
}
