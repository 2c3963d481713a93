pub mod http;
pub mod rendering;
pub mod services;
pub mod ui;
pub mod websocket;
