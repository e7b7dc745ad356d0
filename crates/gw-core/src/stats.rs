// File: crates/gw-core/src/stats.rs
// Summary: Small numeric summaries backing the histogram and box plot panels.

/// Quantile `q` in [0, 1] of sorted data, interpolating linearly between closest ranks.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Five-number summary plus Tukey whiskers (1.5 x IQR) and the points beyond them.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    /// Lowest data point within q1 - 1.5 IQR.
    pub whisker_low: f64,
    /// Highest data point within q3 + 1.5 IQR.
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl Summary {
    /// Summarize `values`; non-finite entries are ignored. Returns `None` when nothing is left.
    pub fn of(values: &[f64]) -> Option<Self> {
        let mut v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
        if v.is_empty() {
            return None;
        }
        v.sort_by(f64::total_cmp);
        let q1 = quantile(&v, 0.25)?;
        let median = quantile(&v, 0.5)?;
        let q3 = quantile(&v, 0.75)?;
        let iqr = q3 - q1;
        let (lo_fence, hi_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);
        let inside = v.iter().copied().filter(|x| *x >= lo_fence && *x <= hi_fence);
        let whisker_low = inside.clone().fold(f64::INFINITY, f64::min);
        let whisker_high = inside.fold(f64::NEG_INFINITY, f64::max);
        let outliers = v.iter().copied().filter(|x| *x < lo_fence || *x > hi_fence).collect();
        Some(Self {
            count: v.len(),
            min: v[0],
            q1,
            median,
            q3,
            max: v[v.len() - 1],
            mean: v.iter().sum::<f64>() / v.len() as f64,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

/// Sturges' rule: ceil(log2 n) + 1 bins.
pub fn sturges_bins(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    (n as f64).log2().ceil() as usize + 1
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width histogram over [min, max]; the last bin is closed on the right.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    let v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if v.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = v.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < 1e-12 {
        max = min + 1.0;
    }
    let width = (max - min) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin { start: min + width * i as f64, end: min + width * (i + 1) as f64, count: 0 })
        .collect();
    for x in v {
        let i = (((x - min) / width) as usize).min(bins - 1);
        out[i].count += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantiles_interpolate() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&v, 0.5), Some(2.5));
        assert_eq!(quantile(&v, 0.25), Some(1.75));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn summary_flags_outliers() {
        let s = Summary::of(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(s.count, 6);
        assert_eq!(s.outliers, vec![100.0]);
        assert_eq!(s.whisker_high, 5.0);
        assert_eq!(s.whisker_low, 1.0);
        assert_eq!(s.max, 100.0);
    }

    #[test]
    fn histogram_counts_every_value() {
        let h = histogram(&[0.0, 0.5, 1.0, 2.0, 2.0], 2);
        assert_eq!(h.len(), 2);
        assert_eq!(h[0].count, 2);
        assert_eq!(h[1].count, 3);
        assert_eq!(sturges_bins(63), 7);
    }
}
