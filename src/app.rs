use leptos::*;

use crate::global_state::{last_updated, stream_status, window_summary};
use crate::infrastructure::websocket::StreamStatus;

fn status_text(status: StreamStatus) -> &'static str {
    match status {
        StreamStatus::Connecting => "connecting…",
        StreamStatus::Live => "● live",
        StreamStatus::Disconnected => "○ reconnecting",
    }
}

/// 🦀 Page shell: title, window summary, last update, and the Plotly container
#[component]
pub fn App(#[prop(into)] title: String, #[prop(into)] chart_id: String) -> impl IntoView {
    let window = window_summary();
    let updated = last_updated();
    let status = stream_status();

    view! {
        <style>
            {r#"
            body { margin: 0; background: #020617; color: #e5e7eb; font-family: -apple-system, BlinkMacSystemFont, sans-serif; }
            .chart-header { display: flex; gap: 12px; align-items: baseline; padding: 12px 20px; }
            .chart-header h1 { font-size: 18px; margin: 0; }
            .chart-meta { font-size: 13px; color: #94a3b8; }
            .chart-status { margin-left: auto; font-size: 12px; }
            .chart-surface { width: 100%; height: calc(100vh - 60px); }
            "#}
        </style>
        <header class="chart-header">
            <h1>{title}</h1>
            <span id="timeframe" class="chart-meta">{move || window.get()}</span>
            <span id="last-updated" class="chart-meta">{move || updated.get()}</span>
            <span class="chart-status">{move || status_text(status.get())}</span>
        </header>
        <div id=chart_id class="chart-surface"></div>
    }
}

pub fn mount_app(title: String, chart_id: String) {
    mount_to_body(move || view! { <App title=title.clone() chart_id=chart_id.clone()/> });
}
