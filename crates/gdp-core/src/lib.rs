//! # gdp-core
//!
//! Core domain types for the GDP quarterly chart.
//! Implements Strategy pattern for label formatting and dataset validation.

pub mod observation;
pub mod period;

pub use observation::*;
pub use period::*;

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for formatting an observation value for display
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Dollar-billions formatter used by the tooltip ("$243.1 Billions")
#[derive(Debug, Clone, Copy, Default)]
pub struct BillionsFormatter;

impl ValueFormatter for BillionsFormatter {
    fn format(&self, value: f64) -> String {
        format!("${} Billions", value)
    }
}

/// Compact formatter for large numbers (K, M, B suffixes)
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactNumberFormatter;

impl ValueFormatter for CompactNumberFormatter {
    fn format(&self, num: f64) -> String {
        let abs = num.abs();
        let sign = if num < 0.0 { "-" } else { "" };

        if abs >= 1_000_000_000.0 {
            format!("{}{:.2}B", sign, abs / 1_000_000_000.0)
        } else if abs >= 1_000_000.0 {
            format!("{}{:.2}M", sign, abs / 1_000_000.0)
        } else if abs >= 1_000.0 {
            format!("{}{:.2}K", sign, abs / 1_000.0)
        } else {
            format!("{}{:.2}", sign, abs)
        }
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const BAR: &str = "#33adff";
    pub const BAR_HOVER: &str = "#8fd0ff";
    pub const AXIS: &str = "#3a3a3a";
    pub const GRID: &str = "#242424";
    pub const BG_VOID: &str = "#0e0e0e";
    pub const BG_PANEL: &str = "#161616";
    pub const BORDER: &str = "#2a2a2a";
    pub const TEXT_PRIMARY: &str = "#f5f5f5";
    pub const TEXT_MUTED: &str = "#8a8a8a";
    pub const TOOLTIP_BG: &str = "#1f2d3a";

    pub fn bar_alpha(alpha: f64) -> String {
        format!("rgba(51, 173, 255, {:.2})", alpha)
    }
}
