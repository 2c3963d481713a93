use serde::Deserialize;

use crate::domain::market_data::Price;

/// Trade event from the `<symbol>@trade` stream. Only the price is read.
#[derive(Debug, Deserialize)]
pub struct TradeMessage {
    #[serde(rename = "p", default)]
    pub price: Option<NumberField>,
}

/// Binance sends prices as strings; some relays send numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Number(f64),
    Text(String),
}

impl NumberField {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberField::Number(value) => Some(*value),
            NumberField::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }
}

impl TradeMessage {
    /// Finite trade price, or `None` for anything unusable.
    pub fn parse_price(raw: &str) -> Option<Price> {
        let message: TradeMessage = serde_json::from_str(raw).ok()?;
        let value = message.price?.as_f64()?;
        value.is_finite().then(|| Price::new(value))
    }
}
