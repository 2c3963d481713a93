use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::app::mount_app;
use crate::application::{ChartApplicationService, ChartConfig};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::Symbol;

thread_local! {
    static RUNNING: RefCell<Option<ChartApplicationService>> = const { RefCell::new(None) };
}

/// Options accepted from JavaScript; every field falls back to the default.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct LiveChartOptions {
    history_url: Option<String>,
    symbol: Option<String>,
    series_name: Option<String>,
}

#[wasm_bindgen]
impl LiveChartOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(setter = historyUrl)]
    pub fn set_history_url(&mut self, url: String) {
        self.history_url = Some(url);
    }

    #[wasm_bindgen(setter)]
    pub fn set_symbol(&mut self, symbol: String) {
        self.symbol = Some(symbol);
    }

    #[wasm_bindgen(setter = seriesName)]
    pub fn set_series_name(&mut self, name: String) {
        self.series_name = Some(name);
    }
}

impl LiveChartOptions {
    fn into_config(self) -> Result<ChartConfig, JsValue> {
        let mut config = ChartConfig::default();
        if let Some(url) = self.history_url {
            config = config.with_history_url(url);
        }
        if let Some(symbol) = self.symbol {
            config = config.with_symbol(Symbol::new(symbol).map_err(|e| JsValue::from_str(&e.to_string()))?);
        }
        if let Some(name) = self.series_name {
            config = config.with_series_name(name);
        }
        Ok(config)
    }
}

/// Mount the page and start both update loops. A second call is a no-op.
#[wasm_bindgen(js_name = startLiveChart)]
pub fn start_live_chart(options: Option<LiveChartOptions>) -> Result<(), JsValue> {
    let config = options.unwrap_or_default().into_config()?;

    RUNNING.with(|running| {
        let mut running = running.borrow_mut();
        if running.is_some() {
            get_logger().warn(LogComponent::Presentation("WasmApi"), "Live chart already running");
            return Ok(());
        }

        mount_app(
            format!("{} · {}", config.symbol, config.candle_interval),
            config.chart_element_id.clone(),
        );
        let service = ChartApplicationService::new(config);
        service.start();
        *running = Some(service);
        Ok(())
    })
}
