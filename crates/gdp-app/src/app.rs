//! Root application component

use gdp_charts::BarChartConfig;
use gdp_components::GdpDashboard;
use gdp_fetch::GdpClient;
use gdp_state::provide_app_state;
use leptos::prelude::*;

/// Vertical padding the page reserves around the canvas
const ROOT_PADDING: f64 = 50.0;
/// Fallback canvas height when the window size is unavailable
const DEFAULT_CANVAS_HEIGHT: f64 = 620.0;
/// Smallest canvas tall enough for the margin block
const MIN_CANVAS_HEIGHT: f64 = 300.0;

#[component]
pub fn App() -> impl IntoView {
    let state = provide_app_state();

    // Canvas size is measured once at startup and passed down explicitly
    let config = BarChartConfig {
        height: canvas_height(),
        ..BarChartConfig::default()
    };

    GdpClient::new(state).load();

    view! { <GdpDashboard config=config /> }
}

fn canvas_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .map(|h| (h - ROOT_PADDING).max(MIN_CANVAS_HEIGHT))
        .unwrap_or(DEFAULT_CANVAS_HEIGHT)
}
