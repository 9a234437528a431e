//! Interactive GDP bar chart component
//!
//! Renders the quarterly series as uniform-width bars with axes,
//! full-width value gridlines, a title block and hover-driven tooltip
//! updates.

use crate::{
    axis::{AxisTick, TIME_TICK_TARGET, VALUE_TICK_TARGET, time_axis_ticks, value_axis_ticks},
    chartkit::{Scale, build_time_scale, build_value_scale},
    BarLayout, ChartMargin, colors,
};
use gdp_core::GdpSeries;
use gdp_state::{TooltipController, TooltipState};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Bar chart configuration
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
    pub title: String,
    pub y_axis_label: String,
    pub source_label: String,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 620.0,
            margin: ChartMargin::gdp(),
            title: "Gross Domestic Product in United States".to_string(),
            y_axis_label: "GDP in Billions of Dollars".to_string(),
            source_label: "Source: http://www.bea.gov/national/pdf/nipaguid.pdf".to_string(),
        }
    }
}

/// Per-bar geometry plus the data attributes it carries
#[derive(Clone)]
struct BarGeom {
    index: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    value: f64,
    date_string: String,
}

/// Internal chart state computed from the series
#[derive(Clone)]
struct ChartState {
    layout: BarLayout,
    bars: Vec<BarGeom>,
    value_ticks: Vec<AxisTick>,
    time_ticks: Vec<AxisTick>,
    subtitle: String,
}

/// GDP bar chart component
#[component]
pub fn GdpBarChart(
    #[prop(into)] series: Signal<Option<GdpSeries>>,
    #[prop(into)] tooltip: RwSignal<TooltipState>,
    #[prop(optional)] config: Option<BarChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let width = config.width;
    let height = config.height;
    let margin = config.margin;
    let title = config.title;
    let y_axis_label = config.y_axis_label;
    let source_label = config.source_label;

    let controller = TooltipController::new();

    // Compute scales, layout and per-bar geometry from the series
    let chart_state = move || -> Option<ChartState> {
        let data = series.get()?;
        if data.is_empty() {
            return None;
        }

        let layout = match BarLayout::compute(width, height, margin, data.len()) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::error!("bar layout failed: {e}");
                return None;
            }
        };

        let x_scale = match build_time_scale(&data, (0.0, layout.inner_width)) {
            Ok(scale) => scale,
            Err(e) => {
                tracing::error!("time scale failed: {e}");
                return None;
            }
        };

        let y_scale = match build_value_scale(&data, (layout.inner_height, 0.0)) {
            Ok(scale) => scale,
            Err(e) => {
                tracing::error!("value scale failed: {e}");
                return None;
            }
        };

        let baseline = y_scale.scale(0.0);

        let bars = data
            .observations()
            .iter()
            .enumerate()
            .map(|(index, obs)| {
                let y = y_scale.scale(obs.value);
                BarGeom {
                    index,
                    x: x_scale.scale(obs.timestamp_ms()),
                    y,
                    width: layout.bar_width,
                    height: baseline - y,
                    value: obs.value,
                    date_string: data.date_strings()[index].clone(),
                }
            })
            .collect();

        Some(ChartState {
            layout,
            bars,
            value_ticks: value_axis_ticks(&y_scale, VALUE_TICK_TARGET),
            time_ticks: time_axis_ticks(&x_scale, TIME_TICK_TARGET),
            subtitle: data.period_label().unwrap_or_default(),
        })
    };

    view! {
        <svg class="gdp-bar-chart" width=width height=height>
            // Background
            <rect width=width height=height fill=colors::BG_PANEL rx="4" />

            // Chart area
            <g transform=format!("translate({}, {})", margin.left, margin.top)>
                {move || {
                    chart_state().map(|state| {
                        let ChartState {
                            layout,
                            bars,
                            value_ticks,
                            time_ticks,
                            subtitle,
                        } = state;
                        let inner_width = layout.inner_width;
                        let inner_height = layout.inner_height;
                        let y_label_x = -(inner_height / 2.0);

                        view! {
                            <>
                                // Title block
                                <text id="title" y="-60" fill=colors::TEXT_PRIMARY font-size="24">
                                    {title.clone()}
                                </text>
                                <text id="sub-title" y="-30" fill=colors::TEXT_MUTED font-size="14">
                                    {subtitle}
                                </text>

                                // Value axis: labels plus full-width gridlines,
                                // no domain line
                                <g id="y-axis">
                                    {value_ticks.into_iter().map(|tick| {
                                        view! {
                                            <g transform=format!("translate(0, {})", tick.offset)>
                                                <line
                                                    x1="0"
                                                    x2=inner_width
                                                    stroke=colors::GRID
                                                    stroke-width="1"
                                                />
                                                <text
                                                    x="-9"
                                                    dy="0.32em"
                                                    text-anchor="end"
                                                    fill=colors::TEXT_MUTED
                                                    font-size="11"
                                                    font-family="JetBrains Mono, monospace"
                                                >
                                                    {tick.label}
                                                </text>
                                            </g>
                                        }
                                    }).collect_view()}
                                </g>

                                <text
                                    id="y-axis-label"
                                    transform="rotate(-90)"
                                    x=y_label_x
                                    y="-50"
                                    text-anchor="middle"
                                    fill=colors::TEXT_MUTED
                                    font-size="14"
                                >
                                    {y_axis_label.clone()}
                                </text>

                                // Bars
                                <g class="bars">
                                    {bars.into_iter().map(|bar| {
                                        let index = bar.index;
                                        view! {
                                            <rect
                                                class="bar"
                                                data-gdp=bar.value
                                                data-date=bar.date_string.clone()
                                                x=bar.x
                                                y=bar.y
                                                width=bar.width
                                                height=bar.height
                                                fill=colors::BAR
                                                on:mouseover=move |ev: MouseEvent| {
                                                    series.with_untracked(|maybe| {
                                                        if let Some(data) = maybe {
                                                            if let Some((obs, _)) = data.get(index) {
                                                                tooltip.set(controller.hover_enter(
                                                                    obs,
                                                                    index,
                                                                    data.date_strings(),
                                                                    ev.page_x() as f64,
                                                                    ev.page_y() as f64,
                                                                ));
                                                            }
                                                        }
                                                    });
                                                }
                                                on:mouseout=move |_| {
                                                    tooltip.update(|t| *t = controller.hover_leave(t));
                                                }
                                            />
                                        }
                                    }).collect_view()}
                                </g>

                                // Time axis
                                <g id="x-axis" transform=format!("translate(0, {})", inner_height)>
                                    <line
                                        x1="0"
                                        x2=inner_width
                                        stroke=colors::AXIS
                                        stroke-width="1"
                                    />
                                    {time_ticks.into_iter().map(|tick| {
                                        view! {
                                            <g transform=format!("translate({}, 0)", tick.offset)>
                                                <line y1="0" y2="6" stroke=colors::AXIS stroke-width="1" />
                                                <text
                                                    y="20"
                                                    text-anchor="middle"
                                                    fill=colors::TEXT_MUTED
                                                    font-size="11"
                                                    font-family="JetBrains Mono, monospace"
                                                >
                                                    {tick.label}
                                                </text>
                                            </g>
                                        }
                                    }).collect_view()}
                                </g>

                                <text
                                    id="source-label"
                                    transform=format!("translate(0, {})", inner_height + 60.0)
                                    fill=colors::TEXT_MUTED
                                    font-size="12"
                                >
                                    {source_label.clone()}
                                </text>
                            </>
                        }
                    })
                }}
            </g>
        </svg>
    }
}
