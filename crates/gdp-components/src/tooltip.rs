//! Tooltip overlay component
//!
//! A single absolutely positioned div shared by every bar. Content and
//! position come straight from [`TooltipState`]; opacity animates via the
//! CSS transition the state carries, so a fresh hover cancels a running
//! fade-out.

use gdp_state::TooltipState;
use leptos::prelude::*;

#[component]
pub fn TooltipOverlay(#[prop(into)] tooltip: Signal<TooltipState>) -> impl IntoView {
    view! {
        <div
            id="tooltip"
            class="chart-tooltip"
            data-date=move || tooltip.get().date_string
            data-gdp=move || tooltip.get().value
            style=move || tooltip.get().style()
        >
            <span class="tooltip-value">{move || tooltip.get().heading}</span>
            <br />
            <span class="tooltip-period">{move || tooltip.get().period}</span>
        </div>
    }
}
