use futures::StreamExt;
use gloo_net::websocket::{Message, futures::WebSocket};
use gloo_timers::future::sleep;

use super::backoff::ReconnectBackoff;
use crate::domain::logging::LogComponent;

/// Connection phase reported to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamStatus {
    Connecting,
    /// At least one message arrived on the current connection.
    Live,
    Disconnected,
}

/// Long-lived subscription to a trade-price websocket, reconnecting with backoff.
pub struct TradeStreamClient {
    url: String,
    backoff: ReconnectBackoff,
}

impl TradeStreamClient {
    pub fn new(url: impl Into<String>, backoff: ReconnectBackoff) -> Self {
        Self { url: url.into(), backoff }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn connect(&self) -> Result<WebSocket, String> {
        crate::log_info!(LogComponent::Infrastructure("TradeStream"), "🔌 Connecting to {}", self.url);
        WebSocket::open(&self.url).map_err(|e| format!("Failed to open WebSocket: {e:?}"))
    }

    /// Feed every text frame to `on_message`. Never returns.
    pub async fn run<F, R>(mut self, mut on_message: F, mut on_status: R)
    where
        F: FnMut(&str),
        R: FnMut(StreamStatus),
    {
        loop {
            on_status(StreamStatus::Connecting);
            match self.connect() {
                Ok(mut stream) => {
                    let mut live = false;
                    while let Some(msg) = stream.next().await {
                        match msg {
                            Ok(Message::Text(data)) => {
                                if !live {
                                    live = true;
                                    self.backoff.reset();
                                    on_status(StreamStatus::Live);
                                    crate::log_info!(LogComponent::Infrastructure("TradeStream"), "✅ Trade stream live");
                                }
                                on_message(&data);
                            }
                            Ok(Message::Bytes(_)) => {}
                            Err(e) => {
                                crate::log_error!(
                                    LogComponent::Infrastructure("TradeStream"),
                                    "❌ WebSocket error: {e:?}"
                                );
                                break;
                            }
                        }
                    }
                }
                Err(e) => {
                    crate::log_error!(LogComponent::Infrastructure("TradeStream"), "❌ Connection error: {e}");
                }
            }

            on_status(StreamStatus::Disconnected);
            let delay = self.backoff.next_delay();
            crate::log_warn!(
                LogComponent::Infrastructure("TradeStream"),
                "🔌 Reconnecting in {}ms",
                delay.as_millis()
            );
            sleep(delay).await;
        }
    }
}
