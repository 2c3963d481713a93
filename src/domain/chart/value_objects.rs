use crate::domain::market_data::{CandleColumns, Price, Timestamp};

/// Label on the projected slot tick.
pub const CURRENT_SLOT_LABEL: &str = "current";

/// Trace order on the plot surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesIndex {
    Candles = 0,
    LiveMarker = 1,
}

impl SeriesIndex {
    pub fn position(self) -> usize {
        self as usize
    }
}

/// Font of the live-marker price label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: &'static str,
    pub size: u32,
}

pub const LIVE_LABEL_STYLE: TextStyle = TextStyle { color: "#ffffff", size: 12 };

/// The single point for the not-yet-closed bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct LivePoint {
    pub time: Timestamp,
    pub price: Price,
    pub label: String,
}

/// X-axis tick positions and their parallel labels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisTicks {
    pub positions: Vec<Timestamp>,
    pub labels: Vec<String>,
}

/// Human-readable strings shown beside the chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowSummary {
    pub window: String,
    pub last_updated: String,
}

/// Everything derived from a window's timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFraming {
    pub ticks: AxisTicks,
    pub window_start_label: String,
    pub window_end_label: String,
    pub last_update_label: String,
    /// Projected slot: last candle time plus one interval.
    pub next_slot: Timestamp,
    pub summary: WindowSummary,
}

/// Data replaced on one series.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesFields {
    /// Full OHLC replacement.
    Candles(CandleColumns),
    /// Replace the single live point; the style is re-sent on ticks.
    LiveMarker {
        point: LivePoint,
        label_style: Option<TextStyle>,
    },
}

impl SeriesFields {
    pub fn index(&self) -> SeriesIndex {
        match self {
            SeriesFields::Candles(_) => SeriesIndex::Candles,
            SeriesFields::LiveMarker { .. } => SeriesIndex::LiveMarker,
        }
    }
}

/// Data needed to create the plot from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub candles: CandleColumns,
    pub live: LivePoint,
    pub ticks: AxisTicks,
}
