pub mod history_poller;
pub mod tick_streamer;

pub use history_poller::*;
pub use tick_streamer::*;
