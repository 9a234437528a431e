//! Main dashboard layout component

use gdp_charts::{BarChartConfig, GdpBarChart};
use gdp_state::use_app_state;
use leptos::prelude::*;

use crate::TooltipOverlay;

#[component]
pub fn GdpDashboard(#[prop(optional)] config: Option<BarChartConfig>) -> impl IntoView {
    let state = use_app_state();
    let config = config.unwrap_or_default();

    view! {
        <div class="dashboard">
            <main class="dash-main">
                <section class="panel chart-container">
                    <div class="panel-content">
                        <GdpBarChart
                            series=state.series
                            tooltip=state.tooltip
                            config=config
                        />
                        <TooltipOverlay tooltip=state.tooltip />
                    </div>
                </section>
            </main>

            <footer class="dash-footer">
                <StatusBar />
            </footer>
        </div>
    }
}

#[component]
fn StatusBar() -> impl IntoView {
    let state = use_app_state();
    let phase = state.phase;
    let error = state.error;

    view! {
        <div class="status-bar">
            <div class="sb-load">
                <span class="sb-label">"Dataset:"</span>
                <span class=move || format!("sb-value {}", phase.get().css_class())>
                    {move || phase.get().label()}
                </span>
            </div>

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="sb-error">
                            <span class="error-icon">"⚠"</span>
                            <span class="error-msg">{e}</span>
                        </div>
                    }
                })
            }}

            <div class="sb-version">
                <span>"v0.1.0"</span>
            </div>
        </div>
    }
}
