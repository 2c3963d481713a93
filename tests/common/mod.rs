#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Mutex;

use live_candles_wasm::domain::{
    chart::{AxisTicks, ChartSink, PlotSpec, SeriesFields, SummarySink, WindowSummary},
    errors::{AppError, RenderingResult},
    logging::{LogEntry, LogLevel, Logger, init_logger},
    market_data::{Candle, CandleSource, HistoryPayload, Ohlc, Timestamp},
};

/// 2026-10-19 10:00:00 UTC
pub const TEN_AM: u64 = 1_792_404_000_000;
pub const MINUTE: u64 = 60_000;

#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    CreatePlot(PlotSpec),
    UpdateSeries(SeriesFields),
    RelayoutAxes(AxisTicks),
}

#[derive(Debug, Default)]
pub struct RecordingChartSink {
    pub calls: Vec<SinkCall>,
    pub fail_updates: bool,
    /// Reject only the unstyled marker replace sent by a refresh.
    pub fail_refresh_marker: bool,
}

impl ChartSink for RecordingChartSink {
    fn create_plot(&mut self, plot: &PlotSpec) -> RenderingResult<()> {
        self.calls.push(SinkCall::CreatePlot(plot.clone()));
        Ok(())
    }

    fn update_series(&mut self, fields: &SeriesFields) -> RenderingResult<()> {
        if self.fail_updates {
            return Err(AppError::RenderingError("surface detached".to_string()));
        }
        if self.fail_refresh_marker
            && matches!(fields, SeriesFields::LiveMarker { label_style: None, .. })
        {
            return Err(AppError::RenderingError("marker restyle rejected".to_string()));
        }
        self.calls.push(SinkCall::UpdateSeries(fields.clone()));
        Ok(())
    }

    fn relayout_axes(&mut self, ticks: &AxisTicks) -> RenderingResult<()> {
        self.calls.push(SinkCall::RelayoutAxes(ticks.clone()));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingSummarySink {
    pub published: Vec<WindowSummary>,
}

impl SummarySink for RecordingSummarySink {
    fn publish(&mut self, summary: &WindowSummary) {
        self.published.push(summary.clone());
    }
}

/// Replays queued responses, then reports no data.
#[derive(Default)]
pub struct ScriptedSource {
    responses: RefCell<VecDeque<Result<HistoryPayload, AppError>>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<HistoryPayload, AppError>>) -> Self {
        Self { responses: RefCell::new(responses.into()) }
    }
}

impl CandleSource for ScriptedSource {
    async fn fetch_history(&self) -> Result<HistoryPayload, AppError> {
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(HistoryPayload::NoData))
    }
}

pub fn candle(minute: u64, open: f64, high: f64, low: f64, close: f64) -> Candle {
    Candle::new(Timestamp::from_millis(TEN_AM + minute * MINUTE), Ohlc::new(open, high, low, close))
}

pub fn flat_candles(count: u64) -> Vec<Candle> {
    (0..count).map(|m| candle(m, 100.0, 100.0, 100.0, 100.0)).collect()
}

/// The two-bar history used across scenarios: 10:00 and 10:01.
pub fn two_bar_history() -> HistoryPayload {
    HistoryPayload::Candles(vec![
        candle(0, 100.0, 105.0, 95.0, 102.0),
        candle(1, 102.0, 104.0, 101.0, 103.0),
    ])
}

static CAPTURED: Mutex<Vec<LogEntry>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        if let Ok(mut entries) = CAPTURED.lock() {
            entries.push(entry);
        }
    }
}

/// Route the global logger into an in-memory buffer.
pub fn capture_logs() {
    init_logger(Box::new(CapturingLogger));
}

pub fn captured_errors() -> Vec<String> {
    CAPTURED
        .lock()
        .map(|entries| {
            entries
                .iter()
                .filter(|e| e.level == LogLevel::Error)
                .map(|e| e.message.clone())
                .collect()
        })
        .unwrap_or_default()
}
