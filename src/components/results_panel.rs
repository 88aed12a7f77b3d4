//! Tabbed renderer for per-plate analysis results.
//!
//! DESIGN
//! ======
//! The pane is a pure projection of `AnalyzerState.view`. Tab activation is
//! mutually exclusive (exactly one active tab, first by default) and each
//! panel owns an independent collapsed-by-default disclosure for the raw
//! API response. Row assembly and labeling are plain helpers so the
//! rendering contract is testable without a DOM.

#[cfg(test)]
#[path = "results_panel_test.rs"]
mod results_panel_test;

use leptos::prelude::*;

use crate::net::types::{VehicleDetails, VehicleRecord};
use crate::state::analyzer::{AnalyzerState, ViewState};

/// Placeholder shown for absent detail fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Result pane: placeholder, busy overlay, tabs, or failure panel.
#[component]
pub fn ResultsPanel() -> impl IntoView {
    let analyzer = expect_context::<RwSignal<AnalyzerState>>();

    view! {
        <section class="results-pane">
            {move || match analyzer.get().view {
                ViewState::Empty | ViewState::Staged => ready_placeholder().into_any(),
                ViewState::Busy => busy_overlay().into_any(),
                ViewState::Rendered(records) if records.is_empty() => {
                    no_details_placeholder().into_any()
                }
                ViewState::Rendered(records) => view! { <RecordTabs records=records /> }.into_any(),
                ViewState::Failed(reason) => failure_panel(&reason).into_any(),
            }}
        </section>
    }
}

/// One tab per record; activating a tab deactivates all others.
#[component]
fn RecordTabs(records: Vec<VehicleRecord>) -> impl IntoView {
    let active = RwSignal::new(0usize);
    let labels: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(index, record)| tab_label(record, index))
        .collect();

    view! {
        <div class="result-tabs">
            <nav class="result-tabs__nav">
                {labels
                    .into_iter()
                    .enumerate()
                    .map(|(index, label)| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == index {
                                        "result-tabs__tab result-tabs__tab--active"
                                    } else {
                                        "result-tabs__tab"
                                    }
                                }
                                on:click=move |_| active.set(index)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="result-tabs__content">
                {records
                    .into_iter()
                    .enumerate()
                    .map(|(index, record)| {
                        view! {
                            <div class=move || {
                                if active.get() == index {
                                    "result-tab"
                                } else {
                                    "result-tab result-tab--hidden"
                                }
                            }>
                                <RecordPanel record=record />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Panel body for one record: details, upstream error, or invalid notice.
#[component]
fn RecordPanel(record: VehicleRecord) -> impl IntoView {
    match record {
        VehicleRecord::Details(details) => detail_panel(details).into_any(),
        VehicleRecord::ApiError { plate, reason } => view! {
            <div class="record-panel record-panel--error">
                <h3 class="record-panel__heading">"API Error"</h3>
                <p class="record-panel__plate">
                    "Plate: "
                    <strong>{plate.unwrap_or_else(|| "Unknown".to_owned())}</strong>
                </p>
                <p class="record-panel__reason">"Reason: " {reason}</p>
            </div>
        }
        .into_any(),
        VehicleRecord::Invalid => view! {
            <div class="record-panel record-panel--invalid">
                <p>"Invalid data format received."</p>
            </div>
        }
        .into_any(),
    }
}

fn detail_panel(details: VehicleDetails) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let raw = pretty_raw(&details.raw);
    let rows = detail_rows(&details);

    view! {
        <div class="record-panel">
            <dl class="detail-grid">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="detail-grid__row">
                                <dt class="detail-grid__label">{label}</dt>
                                <dd class="detail-grid__value">{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            <div class="disclosure">
                <button
                    class="disclosure__toggle"
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    <h4 class="disclosure__heading">"Raw API Response"</h4>
                    <span class=move || chevron_class(expanded.get())>"\u{25be}"</span>
                </button>
                <div class=move || disclosure_class(expanded.get())>
                    <pre class="disclosure__raw">{raw}</pre>
                </div>
            </div>
        </div>
    }
}

fn ready_placeholder() -> impl IntoView {
    view! {
        <div class="results-placeholder">
            <h3>"Ready to Analyze"</h3>
            <p>"Upload a vehicle image and we'll tell you all about it."</p>
        </div>
    }
}

fn no_details_placeholder() -> impl IntoView {
    view! {
        <div class="results-placeholder results-placeholder--empty">
            <h3>"No Details Found"</h3>
            <p>"Could not retrieve information for any detected plates."</p>
        </div>
    }
}

fn busy_overlay() -> impl IntoView {
    view! {
        <div class="results-loader">
            <div class="results-loader__spinner"></div>
            <p>"Analyzing image..."</p>
        </div>
    }
}

fn failure_panel(reason: &str) -> impl IntoView {
    view! {
        <div class="results-placeholder results-placeholder--failed">
            <h3>"Analysis Failed"</h3>
            <p>{reason.to_owned()}</p>
        </div>
    }
}

/// Tab label: the record's plate when known, else a positional fallback.
pub fn tab_label(record: &VehicleRecord, index: usize) -> String {
    record
        .plate()
        .map_or_else(|| format!("Result {}", index + 1), str::to_owned)
}

/// Fixed ordered list of labeled detail fields, with placeholders for
/// absent values.
pub fn detail_rows(details: &VehicleDetails) -> Vec<(&'static str, String)> {
    vec![
        ("Plate Number", field_or_placeholder(&details.plate_number)),
        ("Owner Name", field_or_placeholder(&details.owner_name)),
        ("Make & Model", make_and_model(details)),
        ("Vehicle Class", field_or_placeholder(&details.vehicle_class)),
        ("Fuel Type", field_or_placeholder(&details.fuel_type)),
        ("Registration Date", field_or_placeholder(&details.registration_date)),
        ("Insurance Valid Until", field_or_placeholder(&details.insurance_valid_until)),
        ("Registered At", field_or_placeholder(&details.registered_at)),
        ("Chassis No.", field_or_placeholder(&details.chassis_number)),
        ("Engine No.", field_or_placeholder(&details.engine_number)),
    ]
}

/// Maker and model joined with a space; placeholder when both are absent.
fn make_and_model(details: &VehicleDetails) -> String {
    let joined = [details.maker.as_deref(), details.maker_model.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() { NOT_AVAILABLE.to_owned() } else { joined }
}

fn field_or_placeholder(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

/// Pretty-printed raw record for the disclosure view.
pub fn pretty_raw(raw: &serde_json::Value) -> String {
    serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string())
}

fn disclosure_class(expanded: bool) -> &'static str {
    if expanded {
        "disclosure__content disclosure__content--open"
    } else {
        "disclosure__content"
    }
}

fn chevron_class(expanded: bool) -> &'static str {
    if expanded {
        "disclosure__chevron disclosure__chevron--open"
    } else {
        "disclosure__chevron"
    }
}
