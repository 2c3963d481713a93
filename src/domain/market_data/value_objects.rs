use chrono::{DateTime, FixedOffset, Utc};
use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

use crate::domain::errors::AppError;

/// Value Object - quoted price
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

/// Value Object - epoch milliseconds (UTC)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Constructor, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }

    /// The slot `interval` after this one.
    pub fn next_slot(&self, interval: TimeInterval) -> Self {
        Self(self.0.saturating_add(interval.duration_ms()))
    }

    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.0).ok()?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }

    /// Wall-clock time at the viewer's offset.
    pub fn to_local(&self, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        self.to_utc().map(|utc| utc.with_timezone(&offset))
    }
}

/// Value Object - trading pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, AppError> {
        if symbol.trim().is_empty() {
            return Err(AppError::ValidationError("Symbol cannot be empty".to_string()));
        }
        Ok(Self(symbol.trim().to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Binance stream names are lowercase.
    pub fn stream_name(&self) -> String {
        self.0.to_lowercase()
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

/// Value Object - candle bucket width. The chart only runs on one-minute candles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay)]
pub enum TimeInterval {
    #[default]
    #[strum(serialize = "1m")]
    OneMinute,
}

impl TimeInterval {
    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::OneMinute => 60 * 1000,
        }
    }

    /// Minutes spanned by `count` buckets, as shown in the window summary.
    pub fn span_minutes(&self, count: usize) -> u64 {
        self.duration_ms() / 60_000 * count as u64
    }
}
