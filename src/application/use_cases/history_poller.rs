use chrono::FixedOffset;
use futures::StreamExt;
use gloo_timers::future::IntervalStream;

use crate::application::coordinator::{RefreshOutcome, SharedCoordinator};
use crate::domain::{
    chart::{ChartSink, SummarySink},
    logging::LogComponent,
    market_data::CandleSource,
};
use crate::time_utils::viewer_offset;

/// Use Case: periodic history refresh
pub struct HistoryPoller<Src, C, S> {
    source: Src,
    coordinator: SharedCoordinator<C, S>,
    offset: fn() -> FixedOffset,
}

impl<Src, C, S> HistoryPoller<Src, C, S>
where
    Src: CandleSource,
    C: ChartSink,
    S: SummarySink,
{
    pub fn new(source: Src, coordinator: SharedCoordinator<C, S>) -> Self {
        Self { source, coordinator, offset: viewer_offset }
    }

    /// Fix the viewer offset instead of asking the browser.
    pub fn with_offset(mut self, offset: fn() -> FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// One refresh cycle. Failures are logged and leave the chart as it was.
    pub async fn refresh_history(&self) -> Option<RefreshOutcome> {
        let payload = match self.source.fetch_history().await {
            Ok(payload) => payload,
            Err(e) => {
                crate::log_error!(LogComponent::Application("HistoryPoller"), "❌ Error loading candles: {e}");
                return None;
            }
        };

        let applied = self.coordinator.borrow_mut().apply_history(payload, (self.offset)());
        match applied {
            Ok(outcome) => {
                match outcome {
                    RefreshOutcome::NoData => {
                        crate::log_debug!(LogComponent::Application("HistoryPoller"), "No candles this cycle");
                    }
                    RefreshOutcome::Created { candles } => {
                        crate::log_info!(
                            LogComponent::Application("HistoryPoller"),
                            "📊 Chart created with {candles} candles"
                        );
                    }
                    RefreshOutcome::Updated { candles } => {
                        crate::log_debug!(
                            LogComponent::Application("HistoryPoller"),
                            "🔄 Chart refreshed with {candles} candles"
                        );
                    }
                }
                Some(outcome)
            }
            Err(e) => {
                crate::log_error!(LogComponent::Application("HistoryPoller"), "❌ Error updating chart: {e}");
                None
            }
        }
    }

    /// Refresh now, then every `period_ms`. Never returns.
    pub async fn run(self, period_ms: u32) {
        self.refresh_history().await;
        let mut ticks = IntervalStream::new(period_ms);
        while ticks.next().await.is_some() {
            self.refresh_history().await;
        }
    }
}
