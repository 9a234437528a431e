//! # gdp-charts
//!
//! D3.js-style SVG charting for the GDP quarterly dashboard, built with
//! Leptos.
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales and scale builders
//! - `axis` - Tick geometry for the value and time axes
//! - `bar_chart` - The interactive GDP bar chart component

pub mod axis;
pub mod bar_chart;
pub mod chartkit;

pub use axis::*;
pub use bar_chart::*;
pub use chartkit::*;

// Re-export colors from gdp-core for convenience
pub use gdp_core::colors;

use thiserror::Error;

/// Degenerate geometry or dataset input to a scale/layout builder
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("dataset contains no observations")]
    EmptyDataset,
    #[error(
        "degenerate layout: inner area {inner_width}x{inner_height}, {observation_count} observations"
    )]
    InvalidLayout {
        inner_width: f64,
        inner_height: f64,
        observation_count: usize,
    },
}

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// GDP chart layout: room for the title block above and the source
    /// label below the plot
    pub const fn gdp() -> Self {
        Self::new(90.0, 20.0, 80.0, 100.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::gdp()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// SVG transform for the inner chart area
    pub fn inner_transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(900.0, 620.0)
    }
}

/// Plot geometry derived from canvas size, margins and observation count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub inner_width: f64,
    pub inner_height: f64,
    pub bar_width: f64,
}

impl BarLayout {
    /// Bars are uniform width with no gap, so adjacent bars touch for
    /// dense series.
    pub fn compute(
        width: f64,
        height: f64,
        margin: ChartMargin,
        observation_count: usize,
    ) -> Result<Self, ChartError> {
        let inner_width = width - margin.left - margin.right;
        let inner_height = height - margin.top - margin.bottom;

        if inner_width <= 0.0 || inner_height <= 0.0 || observation_count == 0 {
            return Err(ChartError::InvalidLayout {
                inner_width,
                inner_height,
                observation_count,
            });
        }

        Ok(Self {
            inner_width,
            inner_height,
            bar_width: inner_width / observation_count as f64,
        })
    }

    pub fn from_dimensions(
        dims: &ChartDimensions,
        observation_count: usize,
    ) -> Result<Self, ChartError> {
        Self::compute(dims.width, dims.height, dims.margin, observation_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gdp_layout() {
        let layout = BarLayout::compute(900.0, 620.0, ChartMargin::gdp(), 10).unwrap();
        assert_eq!(layout.inner_width, 780.0);
        assert_eq!(layout.inner_height, 450.0);
        assert_eq!(layout.bar_width, 78.0);
    }

    #[test]
    fn test_layout_rejects_empty_series() {
        let err = BarLayout::compute(900.0, 620.0, ChartMargin::gdp(), 0).unwrap_err();
        assert!(matches!(
            err,
            ChartError::InvalidLayout {
                observation_count: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_layout_rejects_degenerate_canvas() {
        // Margins wider than the canvas
        let err = BarLayout::compute(100.0, 620.0, ChartMargin::gdp(), 10).unwrap_err();
        assert!(matches!(err, ChartError::InvalidLayout { .. }));

        let err = BarLayout::compute(900.0, 120.0, ChartMargin::gdp(), 10).unwrap_err();
        assert!(matches!(err, ChartError::InvalidLayout { .. }));
    }

    #[test]
    fn test_dimensions_transform() {
        let dims = ChartDimensions::new(900.0, 620.0);
        assert_eq!(dims.inner_transform(), "translate(100, 90)");
        assert_eq!(dims.inner_width(), 780.0);
        assert_eq!(dims.inner_height(), 450.0);
    }
}
