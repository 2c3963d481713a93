pub mod plotly_payload;
pub mod plotly_sink;

pub use plotly_payload::ChartTheme;
pub use plotly_sink::PlotlyChartSink;
