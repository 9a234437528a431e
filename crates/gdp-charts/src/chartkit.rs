//! Core chart primitives: scales and scale builders.
//! Implements Strategy pattern for flexible scale behaviors.

use crate::ChartError;
use gdp_core::GdpSeries;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Inverse scale (range to domain)
    fn invert(&self, value: f64) -> f64;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    clamp: bool,
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Widen the domain so both bounds land on a round 1/2/5-scaled step.
    /// The widened upper bound is always >= the previous one.
    pub fn nice(mut self, count: usize) -> Self {
        let (min, max) = self.domain;
        let span = max - min;

        if span <= 0.0 || count == 0 {
            return self;
        }

        let step = nice_step(span, count);
        self.domain = ((min / step).floor() * step, (max / step).ceil() * step);
        self
    }

    /// Get domain bounds
    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Get range bounds
    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Generate "nice" tick values (rounded to clean numbers) within the
    /// domain
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let range = max - min;

        if range == 0.0 || count == 0 {
            return vec![min];
        }

        let nice_step = nice_step(range, count);
        let nice_min = (min / nice_step).floor() * nice_step;
        let nice_max = (max / nice_step).ceil() * nice_step;

        let mut ticks = Vec::new();
        let mut tick = nice_min;

        while tick <= nice_max + nice_step * 0.5 {
            if tick >= min && tick <= max {
                ticks.push(tick);
            }
            tick += nice_step;
        }

        ticks
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let mut normalized = (value - d_min) / (d_max - d_min);

        if self.clamp {
            normalized = normalized.clamp(0.0, 1.0);
        }

        r_min + normalized * (r_max - r_min)
    }

    fn invert(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (r_max - r_min).abs() < f64::EPSILON {
            return (d_min + d_max) / 2.0;
        }

        let normalized = (value - r_min) / (r_max - r_min);
        d_min + normalized * (d_max - d_min)
    }
}

/// Round a raw step up to the nearest 1/2/5-scaled power of ten
pub(crate) fn nice_step(span: f64, count: usize) -> f64 {
    let rough_step = span / count as f64;
    let magnitude = 10.0_f64.powf(rough_step.log10().floor());
    let residual = rough_step / magnitude;

    if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

// ============================================================================
// TIME SCALE
// ============================================================================

/// Time scale (maps timestamps to pixel positions)
#[derive(Debug, Clone, PartialEq)]
pub struct TimeScale {
    domain: (i64, i64), // Unix timestamps in milliseconds
    range: (f64, f64),
}

impl TimeScale {
    pub fn new() -> Self {
        Self {
            domain: (0, 1),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: i64, max: i64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Get domain bounds (epoch milliseconds)
    pub fn domain_bounds(&self) -> (i64, i64) {
        self.domain
    }

    /// Get range bounds
    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Scale timestamp to pixel position
    pub fn scale(&self, timestamp: i64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if d_max == d_min {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (timestamp - d_min) as f64 / (d_max - d_min) as f64;
        r_min + normalized * (r_max - r_min)
    }

    /// Inverse scale (pixel to timestamp)
    pub fn invert(&self, value: f64) -> i64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (r_max - r_min).abs() < f64::EPSILON {
            return (d_min + d_max) / 2;
        }

        let normalized = (value - r_min) / (r_max - r_min);
        (d_min as f64 + normalized * (d_max - d_min) as f64) as i64
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SCALE BUILDERS
// ============================================================================

/// Time scale over the full date span of the series, range increasing
/// left to right.
pub fn build_time_scale(
    series: &GdpSeries,
    pixel_range: (f64, f64),
) -> Result<TimeScale, ChartError> {
    let (min_ms, max_ms) = series.time_range_ms().ok_or(ChartError::EmptyDataset)?;

    Ok(TimeScale::new()
        .domain(min_ms, max_ms)
        .range(pixel_range.0, pixel_range.1))
}

/// Value scale with domain `[0, max]`, niced so the top gridline lands on
/// a round number. Pass a decreasing pixel range (bottom, top): screen y
/// grows downward while values grow upward.
pub fn build_value_scale(
    series: &GdpSeries,
    pixel_range: (f64, f64),
) -> Result<LinearScale, ChartError> {
    let max = series.max_value().ok_or(ChartError::EmptyDataset)?;

    Ok(LinearScale::new()
        .domain(0.0, max)
        .range(pixel_range.0, pixel_range.1)
        .nice(crate::axis::VALUE_TICK_TARGET))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gdp_core::GdpDataset;

    fn series(pairs: &[(&str, f64)]) -> GdpSeries {
        GdpSeries::from_dataset(GdpDataset {
            data: pairs.iter().map(|(d, v)| (d.to_string(), *v)).collect(),
        })
        .unwrap()
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_invert() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.invert(250.0), 50.0);
    }

    #[test]
    fn test_nice_widens_upper_bound() {
        let scale = LinearScale::new()
            .domain(0.0, 18064.7)
            .range(450.0, 0.0)
            .nice(10);

        let (min, max) = scale.domain_bounds();
        assert_eq!(min, 0.0);
        assert!(max >= 18064.7);
        assert_eq!(max, 20000.0);
    }

    #[test]
    fn test_nice_keeps_exact_bounds() {
        let scale = LinearScale::new().domain(0.0, 20000.0).range(450.0, 0.0).nice(10);
        assert_eq!(scale.domain_bounds(), (0.0, 20000.0));
    }

    #[test]
    fn test_value_scale_is_decreasing() {
        let s = series(&[("1947-01-01", 243.1), ("2015-07-01", 18064.7)]);
        let scale = build_value_scale(&s, (450.0, 0.0)).unwrap();

        // Screen y shrinks as the value grows
        assert!(scale.scale(100.0) > scale.scale(5000.0));
        assert!(scale.scale(5000.0) > scale.scale(18000.0));
        // Zero maps to the bottom pixel
        assert_eq!(scale.scale(0.0), 450.0);
    }

    #[test]
    fn test_time_scale_spans_range() {
        let s = series(&[
            ("1947-01-01", 243.1),
            ("1981-04-01", 3000.0),
            ("2015-07-01", 18064.7),
        ]);
        let scale = build_time_scale(&s, (0.0, 780.0)).unwrap();

        let first = s.observations()[0].timestamp_ms();
        let mid = s.observations()[1].timestamp_ms();
        let last = s.observations()[2].timestamp_ms();

        assert_eq!(scale.scale(first), 0.0);
        assert_eq!(scale.scale(last), 780.0);
        assert!(scale.scale(mid) > 0.0 && scale.scale(mid) < 780.0);
    }

    #[test]
    fn test_builders_reject_empty_series() {
        let empty = series(&[]);
        assert_eq!(
            build_time_scale(&empty, (0.0, 780.0)).unwrap_err(),
            ChartError::EmptyDataset
        );
        assert_eq!(
            build_value_scale(&empty, (450.0, 0.0)).unwrap_err(),
            ChartError::EmptyDataset
        );
    }

    #[test]
    fn test_nice_ticks_include_top_bound() {
        let scale = LinearScale::new()
            .domain(0.0, 18064.7)
            .range(450.0, 0.0)
            .nice(10);

        let ticks = scale.nice_ticks(10);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(20000.0));
    }
}
