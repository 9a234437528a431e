//! Tooltip state transitions for bar hover.
//!
//! One tooltip widget is shared by every bar. Hover events replace the
//! whole state (last writer wins), so an enter during a running fade-out
//! simply restarts the fade-in.

use gdp_core::{BillionsFormatter, Observation, PeriodFormatter, QuarterFormatter, ValueFormatter};

/// Fade-in duration when a bar is entered, in milliseconds
pub const FADE_IN_MS: u32 = 200;
/// Fade-out duration when the pointer leaves, in milliseconds
pub const FADE_OUT_MS: u32 = 500;
/// Vertical offset lifting the tooltip above the pointer, in pixels
pub const POINTER_OFFSET_Y: f64 = 28.0;
/// Opacity while visible
pub const VISIBLE_OPACITY: f64 = 0.9;

/// Snapshot of the shared tooltip widget
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    /// Value line, e.g. `$243.1 Billions`
    pub heading: String,
    /// Period line, e.g. `1947 Q1`
    pub period: String,
    /// Raw date string of the hovered observation
    pub date_string: String,
    /// Value of the hovered observation
    pub value: f64,
    /// Screen position, pixels
    pub x: f64,
    pub y: f64,
    /// Index of the hovered observation in the series
    pub source_index: Option<usize>,
    /// Duration of the opacity transition currently in effect
    pub fade_ms: u32,
}

impl TooltipState {
    pub fn opacity(&self) -> f64 {
        if self.visible { VISIBLE_OPACITY } else { 0.0 }
    }

    /// Inline style for the overlay div. Content and position persist
    /// through a fade-out; only opacity animates.
    pub fn style(&self) -> String {
        format!(
            "position: absolute; pointer-events: none; left: {}px; top: {}px; \
             opacity: {}; transition: opacity {}ms;",
            self.x,
            self.y,
            self.opacity(),
            self.fade_ms
        )
    }
}

// ============================================================================
// TOOLTIP CONTROLLER
// ============================================================================

/// Computes tooltip state from hover events
#[derive(Debug, Clone, Copy, Default)]
pub struct TooltipController {
    period: QuarterFormatter,
    value: BillionsFormatter,
}

impl TooltipController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered bar `index`. The label always comes from
    /// `date_strings[index]`, the same index the observation came from.
    pub fn hover_enter(
        &self,
        observation: &Observation,
        index: usize,
        date_strings: &[String],
        pointer_x: f64,
        pointer_y: f64,
    ) -> TooltipState {
        let date_string = date_strings.get(index).cloned().unwrap_or_default();

        TooltipState {
            visible: true,
            heading: self.value.format(observation.value),
            period: self.period.format(&date_string),
            date_string,
            value: observation.value,
            x: pointer_x,
            y: pointer_y - POINTER_OFFSET_Y,
            source_index: Some(index),
            fade_ms: FADE_IN_MS,
        }
    }

    /// Pointer left the bar: hide, keep content and position so the
    /// fade-out doesn't flicker-clear the widget.
    pub fn hover_leave(&self, previous: &TooltipState) -> TooltipState {
        TooltipState {
            visible: false,
            fade_ms: FADE_OUT_MS,
            ..previous.clone()
        }
    }
}
