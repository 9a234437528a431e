//! Tick geometry for the value and time axes

use crate::chartkit::{nice_step, LinearScale, Scale, TimeScale};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};

/// Default tick count the value axis aims for
pub const VALUE_TICK_TARGET: usize = 10;
/// Default tick count the time axis aims for
pub const TIME_TICK_TARGET: usize = 10;

/// One tick: pixel offset along the axis plus its label.
///
/// Value-axis ticks double as gridlines; the renderer draws each one
/// across the full inner width.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

/// Ticks for a (niced) value scale, bottom to top
pub fn value_axis_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    scale
        .nice_ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            offset: scale.scale(value),
            label: format_tick_number(value),
        })
        .collect()
}

/// Year ticks at a nice 1/2/5-scaled step across the time domain
pub fn time_axis_ticks(scale: &TimeScale, target: usize) -> Vec<AxisTick> {
    let (min_ms, max_ms) = scale.domain_bounds();

    let (Some(start), Some(end)) = (
        DateTime::from_timestamp_millis(min_ms),
        DateTime::from_timestamp_millis(max_ms),
    ) else {
        return Vec::new();
    };

    let min_year = start.year();
    let max_year = end.year();
    let span_years = (max_year - min_year).max(1) as f64;
    let step = (nice_step(span_years, target.max(1)) as i32).max(1);

    // First tick year at or after the domain start
    let mut year = min_year.div_euclid(step) * step;
    if year < min_year {
        year += step;
    }

    let mut ticks = Vec::new();
    while year <= max_year {
        if let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) {
            let ms = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
            if ms >= min_ms && ms <= max_ms {
                ticks.push(AxisTick {
                    offset: scale.scale(ms),
                    label: year.to_string(),
                });
            }
        }
        year += step;
    }

    ticks
}

/// Plain tick label; whole numbers drop the fraction
pub fn format_tick_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chartkit::{build_time_scale, build_value_scale};
    use gdp_core::{GdpDataset, GdpSeries};

    fn series(pairs: &[(&str, f64)]) -> GdpSeries {
        GdpSeries::from_dataset(GdpDataset {
            data: pairs.iter().map(|(d, v)| (d.to_string(), *v)).collect(),
        })
        .unwrap()
    }

    #[test]
    fn test_value_ticks_cover_niced_domain() {
        let s = series(&[("1947-01-01", 243.1), ("2015-07-01", 18064.7)]);
        let scale = build_value_scale(&s, (450.0, 0.0)).unwrap();
        let ticks = value_axis_ticks(&scale, VALUE_TICK_TARGET);

        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("0"));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("20000"));
        // Bottom tick sits at the bottom pixel, top tick at the top
        assert_eq!(ticks.first().map(|t| t.offset), Some(450.0));
        assert_eq!(ticks.last().map(|t| t.offset), Some(0.0));
    }

    #[test]
    fn test_time_ticks_step_by_nice_years() {
        let s = series(&[("1947-01-01", 243.1), ("2015-07-01", 18064.7)]);
        let scale = build_time_scale(&s, (0.0, 780.0)).unwrap();
        let ticks = time_axis_ticks(&scale, TIME_TICK_TARGET);

        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["1950", "1960", "1970", "1980", "1990", "2000", "2010"]
        );

        // Offsets increase left to right and stay inside the range
        for pair in ticks.windows(2) {
            assert!(pair[0].offset < pair[1].offset);
        }
        assert!(ticks.first().map(|t| t.offset >= 0.0).unwrap_or(false));
        assert!(ticks.last().map(|t| t.offset <= 780.0).unwrap_or(false));
    }

    #[test]
    fn test_time_ticks_single_year_domain() {
        let s = series(&[("1947-01-01", 243.1), ("1947-10-01", 260.3)]);
        let scale = build_time_scale(&s, (0.0, 780.0)).unwrap();
        let ticks = time_axis_ticks(&scale, TIME_TICK_TARGET);

        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].label, "1947");
    }

    #[test]
    fn test_format_tick_number() {
        assert_eq!(format_tick_number(2000.0), "2000");
        assert_eq!(format_tick_number(0.0), "0");
        assert_eq!(format_tick_number(2.5), "2.5");
    }
}
