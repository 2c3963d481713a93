use chrono::FixedOffset;
use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{
    chart::{
        ChartSink, ChartState, LIVE_LABEL_STYLE, PlotSpec, SeriesFields, SummarySink, WindowSummary,
        services::{derive_axis_framing, live_point},
    },
    errors::RenderingResult,
    market_data::{CandleWindow, HistoryPayload, Price, TimeInterval, Timestamp},
};

/// What a refresh did to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Nothing to show this cycle; state and chart untouched.
    NoData,
    /// First refresh: the plot was created.
    Created { candles: usize },
    /// Plot existed: series and axis ticks were replaced.
    Updated { candles: usize },
}

/// What a tick did to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Arrived before the first refresh.
    NotReady,
    /// Payload had no usable price.
    Dropped,
    /// The chart rejected the update.
    Failed,
    Applied,
}

/// Sole owner of [`ChartState`] and the sinks.
///
/// Each method is one atomic step over state and sinks; callers share the
/// coordinator through [`SharedCoordinator`] and never hold the borrow
/// across an await.
pub struct LiveChartCoordinator<C, S> {
    state: ChartState,
    chart: C,
    summary: S,
    interval: TimeInterval,
    window_size: usize,
}

pub type SharedCoordinator<C, S> = Rc<RefCell<LiveChartCoordinator<C, S>>>;

impl<C: ChartSink, S: SummarySink> LiveChartCoordinator<C, S> {
    pub fn new(chart: C, summary: S, interval: TimeInterval, window_size: usize) -> Self {
        Self { state: ChartState::default(), chart, summary, interval, window_size }
    }

    pub fn shared(self) -> SharedCoordinator<C, S> {
        Rc::new(RefCell::new(self))
    }

    pub fn state(&self) -> ChartState {
        self.state
    }

    pub fn chart_sink(&self) -> &C {
        &self.chart
    }

    pub fn chart_sink_mut(&mut self) -> &mut C {
        &mut self.chart
    }

    pub fn summary_sink(&self) -> &S {
        &self.summary
    }

    /// Merge one history payload into the chart.
    ///
    /// State moves to the new candle time as soon as the new candles are on
    /// the chart, so ticks always project from what is displayed. A later
    /// marker or axis failure is still reported to the caller.
    pub fn apply_history(
        &mut self,
        payload: HistoryPayload,
        offset: FixedOffset,
    ) -> RenderingResult<RefreshOutcome> {
        let candles = match payload {
            HistoryPayload::Candles(candles) => candles,
            HistoryPayload::NoData => return Ok(RefreshOutcome::NoData),
        };
        let Some(window) = CandleWindow::latest(candles, self.window_size) else {
            return Ok(RefreshOutcome::NoData);
        };

        let last_candle_time = window.last_candle_time();
        let framing = derive_axis_framing(&window, self.interval, offset);
        let live = live_point(last_candle_time, self.interval, window.last().ohlc.close);
        let count = window.len();

        match self.state {
            ChartState::Uninitialized => {
                self.chart.create_plot(&PlotSpec {
                    candles: window.columns(),
                    live,
                    ticks: framing.ticks,
                })?;
                self.commit(last_candle_time, &framing.summary);
                Ok(RefreshOutcome::Created { candles: count })
            }
            ChartState::Live { .. } => {
                self.chart.update_series(&SeriesFields::Candles(window.columns()))?;
                self.commit(last_candle_time, &framing.summary);
                self.chart.update_series(&SeriesFields::LiveMarker { point: live, label_style: None })?;
                self.chart.relayout_axes(&framing.ticks)?;
                Ok(RefreshOutcome::Updated { candles: count })
            }
        }
    }

    fn commit(&mut self, last_candle_time: Timestamp, summary: &WindowSummary) {
        self.state.confirm(last_candle_time);
        self.summary.publish(summary);
    }

    /// Whether a tick may touch the chart yet.
    pub fn accepts_ticks(&self) -> bool {
        self.state.last_candle_time().is_some()
    }

    /// Move the live marker to `price`, keeping its projected time.
    pub fn apply_live_price(&mut self, price: Price) -> RenderingResult<TickOutcome> {
        let Some(last_candle_time) = self.state.last_candle_time() else {
            return Ok(TickOutcome::NotReady);
        };
        if !price.is_finite() {
            return Ok(TickOutcome::Dropped);
        }

        let point = live_point(last_candle_time, self.interval, price);
        self.chart.update_series(&SeriesFields::LiveMarker {
            point,
            label_style: Some(LIVE_LABEL_STYLE),
        })?;
        Ok(TickOutcome::Applied)
    }
}
