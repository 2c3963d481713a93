use wasm_bindgen_futures::spawn_local;

use crate::{
    application::{
        config::ChartConfig,
        coordinator::{LiveChartCoordinator, SharedCoordinator},
        use_cases::{HistoryPoller, TickStreamer},
    },
    domain::logging::LogComponent,
    infrastructure::{
        http::HistoryHttpClient,
        rendering::PlotlyChartSink,
        ui::{SignalSummarySink, publish_stream_status},
        websocket::{ReconnectBackoff, TradeStreamClient},
    },
};

pub type BrowserCoordinator = SharedCoordinator<PlotlyChartSink, SignalSummarySink>;

/// Wires the browser adapters to one coordinator and starts both loops.
pub struct ChartApplicationService {
    config: ChartConfig,
    coordinator: BrowserCoordinator,
}

impl ChartApplicationService {
    pub fn new(config: ChartConfig) -> Self {
        let coordinator = LiveChartCoordinator::new(
            PlotlyChartSink::new(config.chart_element_id.clone(), config.series_name.clone()),
            SignalSummarySink,
            config.candle_interval,
            config.window_size,
        )
        .shared();
        Self { config, coordinator }
    }

    /// Spawn the history poller and the tick streamer on the page's event loop.
    pub fn start(&self) {
        crate::log_info!(
            LogComponent::Application("ChartService"),
            "🚀 Starting live chart for {} (history every {}ms, window {})",
            self.config.symbol,
            self.config.poll_period_ms,
            self.config.window_size
        );

        let poller = HistoryPoller::new(
            HistoryHttpClient::new(self.config.history_url.clone()),
            self.coordinator.clone(),
        );
        let period_ms = self.config.poll_period_ms;
        spawn_local(async move {
            poller.run(period_ms).await;
        });

        let streamer = TickStreamer::new(self.coordinator.clone());
        let client = TradeStreamClient::new(
            self.config.trade_stream_url(),
            ReconnectBackoff::new(
                self.config.reconnect_initial_delay_ms,
                self.config.reconnect_max_delay_ms,
            ),
        );
        spawn_local(async move {
            streamer.run(client, publish_stream_status).await;
        });
    }
}
