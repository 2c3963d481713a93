use crate::domain::market_data::Timestamp;

/// Lifecycle of the plot surface.
///
/// `Uninitialized` until the first successful refresh creates the plot,
/// `Live` afterwards. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartState {
    #[default]
    Uninitialized,
    Live { last_candle_time: Timestamp },
}

impl ChartState {
    pub fn is_initialized(&self) -> bool {
        matches!(self, ChartState::Live { .. })
    }

    /// Newest confirmed candle, once the plot exists.
    pub fn last_candle_time(&self) -> Option<Timestamp> {
        match self {
            ChartState::Uninitialized => None,
            ChartState::Live { last_candle_time } => Some(*last_candle_time),
        }
    }

    /// The only transition: any state moves to `Live` at the new candle time.
    pub fn confirm(&mut self, last_candle_time: Timestamp) {
        *self = ChartState::Live { last_candle_time };
    }
}
