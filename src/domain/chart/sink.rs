use super::value_objects::{AxisTicks, PlotSpec, SeriesFields, WindowSummary};
use crate::domain::errors::RenderingResult;

/// Rendering surface the chart is drawn on.
pub trait ChartSink {
    /// Build the plot with the candle trace and the live-marker trace.
    fn create_plot(&mut self, plot: &PlotSpec) -> RenderingResult<()>;

    /// Replace the data of the series named by `fields.index()`.
    fn update_series(&mut self, fields: &SeriesFields) -> RenderingResult<()>;

    /// Replace x-axis tick positions and labels, leaving the rest of the layout alone.
    fn relayout_axes(&mut self, ticks: &AxisTicks) -> RenderingResult<()>;
}

/// Text elements showing the window range and the last update time.
pub trait SummarySink {
    fn publish(&mut self, summary: &WindowSummary);
}
