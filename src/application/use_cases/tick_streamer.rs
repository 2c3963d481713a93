use crate::application::coordinator::{SharedCoordinator, TickOutcome};
use crate::domain::{
    chart::{ChartSink, SummarySink},
    logging::LogComponent,
};
use crate::infrastructure::websocket::{StreamStatus, TradeMessage, TradeStreamClient};

/// Use Case: move the live marker on every trade
pub struct TickStreamer<C, S> {
    coordinator: SharedCoordinator<C, S>,
}

impl<C: ChartSink, S: SummarySink> TickStreamer<C, S> {
    pub fn new(coordinator: SharedCoordinator<C, S>) -> Self {
        Self { coordinator }
    }

    /// Handle one raw stream message.
    pub fn on_tick(&self, raw: &str) -> TickOutcome {
        let mut coordinator = self.coordinator.borrow_mut();
        if !coordinator.accepts_ticks() {
            return TickOutcome::NotReady;
        }
        let Some(price) = TradeMessage::parse_price(raw) else {
            return TickOutcome::Dropped;
        };
        coordinator.apply_live_price(price).unwrap_or_else(|e| {
            crate::log_error!(LogComponent::Application("TickStreamer"), "❌ Error moving live marker: {e}");
            TickOutcome::Failed
        })
    }

    /// Drive `on_tick` from the stream for the lifetime of the page.
    pub async fn run<R>(self, client: TradeStreamClient, on_status: R)
    where
        R: FnMut(StreamStatus),
    {
        crate::log_info!(LogComponent::Application("TickStreamer"), "🔴 Subscribing to {}", client.url());
        client
            .run(
                |raw| {
                    self.on_tick(raw);
                },
                on_status,
            )
            .await;
    }
}
