pub use super::value_objects::{Price, Timestamp};
use serde::{Deserialize, Serialize};

/// Value Object - OHLC prices of one bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ohlc {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl Ohlc {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open: Price::new(open),
            high: Price::new(high),
            low: Price::new(low),
            close: Price::new(close),
        }
    }
}

/// Domain entity - one closed candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: Timestamp,
    pub ohlc: Ohlc,
}

impl Candle {
    pub fn new(timestamp: Timestamp, ohlc: Ohlc) -> Self {
        Self { timestamp, ohlc }
    }
}

/// The most recent candles shown on the chart, oldest first.
///
/// Never empty. Order is whatever the source delivered; strictly
/// increasing time is expected but not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleWindow {
    candles: Vec<Candle>,
}

/// Column-wise view of a window, the shape chart traces consume.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandleColumns {
    pub times: Vec<Timestamp>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

impl CandleWindow {
    /// Keep the last `size` candles. `None` when nothing is left.
    pub fn latest(mut candles: Vec<Candle>, size: usize) -> Option<Self> {
        if candles.len() > size {
            candles.drain(..candles.len() - size);
        }
        if candles.is_empty() {
            return None;
        }
        Some(Self { candles })
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn first(&self) -> &Candle {
        &self.candles[0]
    }

    pub fn last(&self) -> &Candle {
        &self.candles[self.candles.len() - 1]
    }

    /// Time of the newest confirmed candle.
    pub fn last_candle_time(&self) -> Timestamp {
        self.last().timestamp
    }

    pub fn times(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.candles.iter().map(|c| c.timestamp)
    }

    pub fn columns(&self) -> CandleColumns {
        let mut columns = CandleColumns::default();
        for candle in &self.candles {
            columns.times.push(candle.timestamp);
            columns.open.push(candle.ohlc.open.value());
            columns.high.push(candle.ohlc.high.value());
            columns.low.push(candle.ohlc.low.value());
            columns.close.push(candle.ohlc.close.value());
        }
        columns
    }
}
