//! Pure derivations from a candle window: axis framing, live point, labels.
//!
//! Both update loops project the live slot through [`project_next_slot`], so
//! a refresh and a tick always agree on where "current" sits.

use chrono::FixedOffset;

use super::value_objects::{AxisFraming, AxisTicks, CURRENT_SLOT_LABEL, LivePoint, WindowSummary};
use crate::domain::market_data::{CandleWindow, Price, TimeInterval, Timestamp};
use crate::time_utils::{format_clock_label, format_date_label};

pub fn project_next_slot(last_candle_time: Timestamp, interval: TimeInterval) -> Timestamp {
    last_candle_time.next_slot(interval)
}

/// Ticks at every candle plus the projected slot, which is labelled `current`.
pub fn derive_axis_framing(
    window: &CandleWindow,
    interval: TimeInterval,
    offset: FixedOffset,
) -> AxisFraming {
    let next_slot = project_next_slot(window.last_candle_time(), interval);

    let mut positions: Vec<Timestamp> = window.times().collect();
    let mut labels: Vec<String> = positions.iter().map(|t| format_clock_label(*t, offset)).collect();
    positions.push(next_slot);
    labels.push(CURRENT_SLOT_LABEL.to_string());

    let window_start_label = format_clock_label(window.first().timestamp, offset);
    let window_end_label = format_clock_label(window.last_candle_time(), offset);
    let last_update_label = format!(
        "{} {}",
        format_date_label(window.last_candle_time(), offset),
        window_end_label
    );

    let summary = WindowSummary {
        window: format!(
            "· window: {} – {} ({}m)",
            window_start_label,
            window_end_label,
            interval.span_minutes(window.len())
        ),
        last_updated: format!("· last update: {last_update_label}"),
    };

    AxisFraming {
        ticks: AxisTicks { positions, labels },
        window_start_label,
        window_end_label,
        last_update_label,
        next_slot,
        summary,
    }
}

pub fn live_point(last_candle_time: Timestamp, interval: TimeInterval, price: Price) -> LivePoint {
    LivePoint {
        time: project_next_slot(last_candle_time, interval),
        price,
        label: format_usd(price.value()),
    }
}

/// `$` plus an en-US grouped amount with up to three decimals: `$65,432.123`.
pub fn format_usd(amount: f64) -> String {
    let formatted = format!("{:.3}", amount);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) if rest != "0" => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", trimmed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction}"),
        None => format!("{sign}${grouped}"),
    }
}
