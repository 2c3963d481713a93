//! Trade-price websocket: DTO, reconnect policy, and the gloo client.

pub mod backoff;
pub mod dto;
pub mod trade_stream_client;

pub use backoff::*;
pub use dto::*;
pub use trade_stream_client::*;
