//! # gdp-state
//!
//! Reactive state for the GDP quarterly dashboard.
//! One load pipeline, one tooltip; Leptos signals do the surgical updates.

pub mod tooltip;

pub use tooltip::*;

use gdp_core::GdpSeries;
use leptos::prelude::*;

// ============================================================================
// LOAD PHASE
// ============================================================================

/// Dataset load FSM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl LoadPhase {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading...",
            Self::Loaded => "Loaded",
            Self::Failed => "Load failed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Idle => "load-idle",
            Self::Loading => "load-loading",
            Self::Loaded => "load-loaded",
            Self::Failed => "load-failed",
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone)]
pub struct AppState {
    /// Validated dataset, present once the loader succeeds
    pub series: RwSignal<Option<GdpSeries>>,
    /// The single shared tooltip
    pub tooltip: RwSignal<TooltipState>,
    /// Load pipeline phase
    pub phase: RwSignal<LoadPhase>,
    /// Current error message
    pub error: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            series: RwSignal::new(None),
            tooltip: RwSignal::new(TooltipState::default()),
            phase: RwSignal::new(LoadPhase::Idle),
            error: RwSignal::new(None),
        }
    }

    // ========================================================================
    // Load Pipeline
    // ========================================================================

    pub fn set_loading(&self) {
        self.phase.set(LoadPhase::Loading);
        self.error.set(None);
    }

    /// Successful load: store the series and enter `Loaded`
    pub fn set_series(&self, series: GdpSeries) {
        self.series.set(Some(series));
        self.phase.set(LoadPhase::Loaded);
        self.error.set(None);
    }

    /// Failed load: no chart is produced, no retry is scheduled
    pub fn set_error(&self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::warn!("load pipeline failed: {msg}");
        self.phase.set(LoadPhase::Failed);
        self.error.set(Some(msg));
    }

    pub fn is_loaded(&self) -> bool {
        self.phase.get().is_loaded()
    }

    pub fn has_error(&self) -> bool {
        self.error.get().is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to the component tree
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state.clone());
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Try to get app state from context (returns None if not provided)
pub fn try_use_app_state() -> Option<AppState> {
    use_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_phase_labels() {
        assert_eq!(LoadPhase::Loading.label(), "Loading...");
        assert_eq!(LoadPhase::Failed.css_class(), "load-failed");
        assert!(LoadPhase::Loaded.is_loaded());
        assert!(!LoadPhase::Idle.is_loaded());
    }
}
