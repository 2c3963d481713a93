use chrono::{FixedOffset, Offset, Utc};

use crate::domain::market_data::Timestamp;

/// `HH:MM` in 24-hour form at the viewer's offset, e.g. `09:05`.
pub fn format_clock_label(timestamp: Timestamp, offset: FixedOffset) -> String {
    match timestamp.to_local(offset) {
        Some(local) => local.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Day, short month, year at the viewer's offset, e.g. `19 Oct 2026`.
pub fn format_date_label(timestamp: Timestamp, offset: FixedOffset) -> String {
    match timestamp.to_local(offset) {
        Some(local) => local.format("%-d %b %Y").to_string(),
        None => "----".to_string(),
    }
}

/// Naive local date-time string, the form Plotly date axes read as wall-clock time.
pub fn format_axis_datetime(timestamp: Timestamp, offset: FixedOffset) -> String {
    match timestamp.to_local(offset) {
        Some(local) => local.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        None => String::new(),
    }
}

pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Offset from `getTimezoneOffset`, which counts minutes *behind* UTC.
pub fn offset_from_js_minutes(minutes_behind_utc: f64) -> FixedOffset {
    let seconds = -(minutes_behind_utc.round() as i32) * 60;
    FixedOffset::east_opt(seconds).unwrap_or_else(utc_offset)
}

/// Current offset of the browser's local time zone. UTC off the web.
pub fn viewer_offset() -> FixedOffset {
    #[cfg(target_arch = "wasm32")]
    {
        offset_from_js_minutes(js_sys::Date::new_0().get_timezone_offset())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        utc_offset()
    }
}
