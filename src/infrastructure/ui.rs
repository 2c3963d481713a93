//! Leptos-signal implementations of the UI text sinks.

use leptos::*;

use crate::domain::chart::{SummarySink, WindowSummary};
use crate::global_state::{last_updated, stream_status, window_summary};
use crate::infrastructure::websocket::StreamStatus;

/// Publishes summaries into the header signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalSummarySink;

impl SummarySink for SignalSummarySink {
    fn publish(&mut self, summary: &WindowSummary) {
        window_summary().set(summary.window.clone());
        last_updated().set(summary.last_updated.clone());
    }
}

pub fn publish_stream_status(status: StreamStatus) {
    stream_status().set(status);
}
