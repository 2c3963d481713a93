//! Candle history over HTTP: payload decoding and the gloo client.

mod history_client;

pub use history_client::HistoryHttpClient;

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    errors::AppError,
    market_data::{Candle, HistoryPayload, Ohlc, Timestamp},
};

/// One element of the history array.
#[derive(Debug, Deserialize)]
pub struct HistoryCandleDto {
    #[serde(default)]
    pub time: Option<TimeField>,
    #[serde(default)]
    pub ts: Option<TimeField>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Epoch milliseconds or a date-time string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TimeField {
    Millis(f64),
    Text(String),
}

impl TimeField {
    /// Zero and the empty string count as absent.
    fn is_blank(&self) -> bool {
        match self {
            TimeField::Millis(value) => *value == 0.0,
            TimeField::Text(text) => text.trim().is_empty(),
        }
    }

    fn to_timestamp(&self) -> Result<Timestamp, AppError> {
        match self {
            TimeField::Millis(value) => millis_to_timestamp(*value),
            TimeField::Text(text) => parse_time_text(text.trim()),
        }
    }
}

fn millis_to_timestamp(value: f64) -> Result<Timestamp, AppError> {
    if !value.is_finite() || value < 0.0 || value > u64::MAX as f64 {
        return Err(AppError::ParseError(format!("Invalid candle time: {value}")));
    }
    Ok(Timestamp::from_millis(value as u64))
}

/// Offset-less date-times are taken as UTC, not as the viewer's local time.
fn parse_time_text(text: &str) -> Result<Timestamp, AppError> {
    if let Ok(millis) = text.parse::<f64>() {
        return millis_to_timestamp(millis);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return millis_to_timestamp(parsed.timestamp_millis() as f64);
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .ok_or_else(|| AppError::ParseError(format!("Unrecognised candle time: {text}")))
        .and_then(|naive| millis_to_timestamp(naive.and_utc().timestamp_millis() as f64))
}

impl HistoryCandleDto {
    pub fn to_domain_candle(&self) -> Result<Candle, AppError> {
        let time = match (&self.time, &self.ts) {
            (Some(time), _) if !time.is_blank() => time,
            (_, Some(ts)) => ts,
            (Some(time), None) => time,
            (None, None) => return Err(AppError::ParseError("Candle without time or ts".to_string())),
        };
        Ok(Candle::new(
            time.to_timestamp()?,
            Ohlc::new(self.open, self.high, self.low, self.close),
        ))
    }
}

/// Decode a history response body.
///
/// Anything but a non-empty array is [`HistoryPayload::NoData`]. A bad
/// element fails the whole payload.
pub fn parse_history_payload(body: Value) -> Result<HistoryPayload, AppError> {
    let items = match body {
        Value::Array(items) if !items.is_empty() => items,
        _ => return Ok(HistoryPayload::NoData),
    };

    let candles = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<HistoryCandleDto>(item)
                .map_err(|e| AppError::ParseError(format!("Candle #{index}: {e}")))
                .and_then(|dto| dto.to_domain_candle())
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HistoryPayload::Candles(candles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEN_AM: u64 = 1_792_404_000_000;

    fn candles(payload: HistoryPayload) -> Vec<Candle> {
        match payload {
            HistoryPayload::Candles(candles) => candles,
            HistoryPayload::NoData => panic!("expected candles"),
        }
    }

    #[test]
    fn non_arrays_and_empty_arrays_are_no_data() {
        assert_eq!(parse_history_payload(json!([])).unwrap(), HistoryPayload::NoData);
        assert_eq!(parse_history_payload(json!({"error": "busy"})).unwrap(), HistoryPayload::NoData);
        assert_eq!(parse_history_payload(json!(null)).unwrap(), HistoryPayload::NoData);
        assert_eq!(parse_history_payload(json!("[]")).unwrap(), HistoryPayload::NoData);
    }

    #[test]
    fn reads_time_in_all_supported_shapes() {
        let body = json!([
            {"time": TEN_AM, "open": 1, "high": 2, "low": 0.5, "close": 1.5},
            {"time": "2026-10-19T10:01:00Z", "open": 1, "high": 2, "low": 0.5, "close": 1.5},
            {"ts": "2026-10-19T10:02:00.000Z", "open": 1, "high": 2, "low": 0.5, "close": 1.5},
            {"ts": "2026-10-19 10:03:00", "open": 1, "high": 2, "low": 0.5, "close": 1.5},
            {"time": "", "ts": (TEN_AM + 4 * 60_000).to_string(), "open": 1, "high": 2, "low": 0.5, "close": 1.5}
        ]);
        let times: Vec<u64> = candles(parse_history_payload(body).unwrap())
            .iter()
            .map(|c| c.timestamp.value())
            .collect();
        let expected: Vec<u64> = (0..5).map(|m| TEN_AM + m * 60_000).collect();
        assert_eq!(times, expected);
    }

    #[test]
    fn zero_time_falls_back_to_ts() {
        let body = json!([{"time": 0, "ts": TEN_AM, "open": 1, "high": 1, "low": 1, "close": 1}]);
        assert_eq!(candles(parse_history_payload(body).unwrap())[0].timestamp.value(), TEN_AM);
    }

    #[test]
    fn keeps_prices_and_source_order() {
        let body = json!([
            {"time": TEN_AM + 60_000, "open": 102, "high": 104, "low": 101, "close": 103},
            {"time": TEN_AM, "open": 100, "high": 105, "low": 95, "close": 102}
        ]);
        let parsed = candles(parse_history_payload(body).unwrap());
        assert_eq!(parsed[0].ohlc, Ohlc::new(102.0, 104.0, 101.0, 103.0));
        assert_eq!(parsed[1].timestamp.value(), TEN_AM);
    }

    #[test]
    fn bad_elements_fail_the_payload() {
        let missing_close = json!([{"time": TEN_AM, "open": 1, "high": 1, "low": 1}]);
        assert!(matches!(parse_history_payload(missing_close), Err(AppError::ParseError(_))));

        let no_time = json!([{"open": 1, "high": 1, "low": 1, "close": 1}]);
        assert!(parse_history_payload(no_time).is_err());

        let garbage_time = json!([{"time": "yesterday", "open": 1, "high": 1, "low": 1, "close": 1}]);
        assert!(parse_history_payload(garbage_time).is_err());

        let negative = json!([{"time": -5, "open": 1, "high": 1, "low": 1, "close": 1}]);
        assert!(parse_history_payload(negative).is_err());
    }
}
