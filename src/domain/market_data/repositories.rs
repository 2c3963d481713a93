use crate::domain::errors::AppError;
use crate::domain::market_data::Candle;

/// What one history poll produced.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryPayload {
    Candles(Vec<Candle>),
    /// Empty array or a body that is not an array at all.
    NoData,
}

/// Source of the recent candle history
#[allow(async_fn_in_trait)]
pub trait CandleSource {
    async fn fetch_history(&self) -> Result<HistoryPayload, AppError>;
}
