//! # gdp-components
//!
//! Page-level Leptos components for the GDP quarterly dashboard:
//! the dashboard layout, the tooltip overlay and the status bar.

pub mod dashboard;
pub mod tooltip;

pub use dashboard::*;
pub use tooltip::*;
