use leptos::*;

use crate::infrastructure::websocket::StreamStatus;

/// Reactive values shared by the header and the update loops.
#[derive(Clone, Copy)]
pub struct Globals {
    pub window_summary: RwSignal<String>,
    pub last_updated: RwSignal<String>,
    pub stream_status: RwSignal<StreamStatus>,
}

thread_local! {
    static GLOBALS: Globals = Globals {
        window_summary: create_rw_signal(String::new()),
        last_updated: create_rw_signal(String::new()),
        stream_status: create_rw_signal(StreamStatus::Connecting),
    };
}

pub fn globals() -> Globals {
    GLOBALS.with(|globals| *globals)
}

crate::global_signals! {
    pub window_summary => window_summary: String,
    pub last_updated => last_updated: String,
    pub stream_status => stream_status: StreamStatus,
}
