//! JSON bodies for `Plotly.newPlot`, `Plotly.restyle` and `Plotly.relayout`.

use chrono::FixedOffset;
use serde_json::{Value, json};

use crate::domain::{
    chart::{AxisTicks, LIVE_LABEL_STYLE, LivePoint, PlotSpec, SeriesFields, TextStyle},
    market_data::{CandleColumns, Timestamp},
};
use crate::time_utils::format_axis_datetime;

/// Static look of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub background: &'static str,
    pub grid: &'static str,
    pub tick_font: &'static str,
    pub increasing: &'static str,
    pub decreasing: &'static str,
    pub marker: &'static str,
    pub marker_size: u32,
    pub label_font: TextStyle,
    pub x_title: &'static str,
    pub y_title: &'static str,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: "#020617",
            grid: "#1e293b",
            tick_font: "#e5e7eb",
            increasing: "#22c55e",
            decreasing: "#ef4444",
            marker: "#eab308",
            marker_size: 9,
            label_font: LIVE_LABEL_STYLE,
            x_title: "Last 60 minutes + current",
            y_title: "Price",
        }
    }
}

/// Arguments of one `newPlot` call.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlotPayload {
    pub data: Value,
    pub layout: Value,
    pub config: Value,
}

fn axis_times(times: &[Timestamp], offset: FixedOffset) -> Vec<String> {
    times.iter().map(|t| format_axis_datetime(*t, offset)).collect()
}

fn text_style(style: &TextStyle) -> Value {
    json!({ "color": style.color, "size": style.size })
}

fn candle_trace(columns: &CandleColumns, name: &str, theme: &ChartTheme, offset: FixedOffset) -> Value {
    json!({
        "x": axis_times(&columns.times, offset),
        "open": columns.open,
        "high": columns.high,
        "low": columns.low,
        "close": columns.close,
        "type": "candlestick",
        "increasing": { "line": { "color": theme.increasing } },
        "decreasing": { "line": { "color": theme.decreasing } },
        "name": name,
    })
}

fn live_trace(point: &LivePoint, theme: &ChartTheme, offset: FixedOffset) -> Value {
    json!({
        "x": [format_axis_datetime(point.time, offset)],
        "y": [point.price.value()],
        "text": [point.label],
        "textposition": "top center",
        "textfont": text_style(&theme.label_font),
        "mode": "markers+text",
        "marker": { "size": theme.marker_size, "color": theme.marker },
        "name": "Live",
        "showlegend": false,
    })
}

pub fn new_plot_payload(
    plot: &PlotSpec,
    series_name: &str,
    theme: &ChartTheme,
    offset: FixedOffset,
) -> NewPlotPayload {
    let data = json!([
        candle_trace(&plot.candles, series_name, theme, offset),
        live_trace(&plot.live, theme, offset),
    ]);
    let layout = json!({
        "paper_bgcolor": theme.background,
        "plot_bgcolor": theme.background,
        "xaxis": {
            "title": theme.x_title,
            "tickmode": "array",
            "tickvals": axis_times(&plot.ticks.positions, offset),
            "ticktext": plot.ticks.labels,
            "tickangle": -45,
            "tickfont": { "color": theme.tick_font, "size": 10 },
            "gridcolor": theme.grid,
            "rangeslider": { "visible": false },
        },
        "yaxis": {
            "title": theme.y_title,
            "tickfont": { "color": theme.tick_font },
            "gridcolor": theme.grid,
        },
        "margin": { "l": 50, "r": 20, "t": 40, "b": 80 },
        "showlegend": false,
    });
    let config = json!({ "responsive": true, "displaylogo": false });
    NewPlotPayload { data, layout, config }
}

/// Restyle body; each attribute is wrapped once more because Plotly
/// reads the outer array as "one entry per target trace".
pub fn restyle_payload(fields: &SeriesFields, offset: FixedOffset) -> Value {
    match fields {
        SeriesFields::Candles(columns) => json!({
            "x": [axis_times(&columns.times, offset)],
            "open": [columns.open],
            "high": [columns.high],
            "low": [columns.low],
            "close": [columns.close],
        }),
        SeriesFields::LiveMarker { point, label_style } => {
            let mut update = json!({
                "x": [[format_axis_datetime(point.time, offset)]],
                "y": [[point.price.value()]],
                "text": [[point.label]],
            });
            if let (Some(style), Some(map)) = (label_style, update.as_object_mut()) {
                map.insert("textfont".to_string(), json!([text_style(style)]));
            }
            update
        }
    }
}

pub fn relayout_payload(ticks: &AxisTicks, offset: FixedOffset) -> Value {
    json!({
        "xaxis.tickvals": axis_times(&ticks.positions, offset),
        "xaxis.ticktext": ticks.labels,
    })
}
