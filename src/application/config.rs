use crate::domain::market_data::{Symbol, TimeInterval};

pub const DEFAULT_HISTORY_URL: &str = "https://getcandles-702357866222.northamerica-northeast1.run.app/";
pub const DEFAULT_STREAM_BASE: &str = "wss://stream.binance.com:9443/ws";

/// Runtime settings for one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub history_url: String,
    pub stream_base: String,
    pub symbol: Symbol,
    /// Trace name of the candle series.
    pub series_name: String,
    pub chart_element_id: String,
    pub poll_period_ms: u32,
    pub candle_interval: TimeInterval,
    pub window_size: usize,
    pub reconnect_initial_delay_ms: u32,
    pub reconnect_max_delay_ms: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            history_url: DEFAULT_HISTORY_URL.to_string(),
            stream_base: DEFAULT_STREAM_BASE.to_string(),
            symbol: Symbol::from("BTCUSDT"),
            series_name: "BTC".to_string(),
            chart_element_id: "chart".to_string(),
            poll_period_ms: 60_000,
            candle_interval: TimeInterval::OneMinute,
            window_size: 60,
            reconnect_initial_delay_ms: 1_000,
            reconnect_max_delay_ms: 32_000,
        }
    }
}

impl ChartConfig {
    pub fn with_history_url(mut self, url: impl Into<String>) -> Self {
        self.history_url = url.into();
        self
    }

    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    pub fn with_series_name(mut self, name: impl Into<String>) -> Self {
        self.series_name = name.into();
        self
    }

    /// Trade stream for the configured pair, e.g. `.../ws/btcusdt@trade`.
    pub fn trade_stream_url(&self) -> String {
        format!("{}/{}@trade", self.stream_base.trim_end_matches('/'), self.symbol.stream_name())
    }
}
