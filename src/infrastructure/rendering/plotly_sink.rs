use gloo::utils::format::JsValueSerdeExt;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::plotly_payload::{ChartTheme, new_plot_payload, relayout_payload, restyle_payload};
use crate::domain::{
    chart::{AxisTicks, ChartSink, PlotSpec, SeriesFields},
    errors::{AppError, RenderingResult},
};
use crate::time_utils::viewer_offset;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn plotly_new_plot(
        element_id: &str,
        data: &JsValue,
        layout: &JsValue,
        config: &JsValue,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, js_name = restyle, catch)]
    fn plotly_restyle(element_id: &str, update: &JsValue, traces: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, js_name = relayout, catch)]
    fn plotly_relayout(element_id: &str, update: &JsValue) -> Result<JsValue, JsValue>;
}

fn to_js(value: &Value) -> RenderingResult<JsValue> {
    JsValue::from_serde(value).map_err(|e| AppError::RenderingError(format!("Serialize failed: {e}")))
}

fn plotly_failed(call: &str, err: JsValue) -> AppError {
    AppError::RenderingError(format!("Plotly.{call} failed: {err:?}"))
}

/// [`ChartSink`] over the page's global `Plotly` object.
pub struct PlotlyChartSink {
    element_id: String,
    series_name: String,
    theme: ChartTheme,
}

impl PlotlyChartSink {
    pub fn new(element_id: impl Into<String>, series_name: impl Into<String>) -> Self {
        Self { element_id: element_id.into(), series_name: series_name.into(), theme: ChartTheme::default() }
    }
}

impl ChartSink for PlotlyChartSink {
    fn create_plot(&mut self, plot: &PlotSpec) -> RenderingResult<()> {
        let payload = new_plot_payload(plot, &self.series_name, &self.theme, viewer_offset());
        plotly_new_plot(
            &self.element_id,
            &to_js(&payload.data)?,
            &to_js(&payload.layout)?,
            &to_js(&payload.config)?,
        )
        .map_err(|e| plotly_failed("newPlot", e))?;
        Ok(())
    }

    fn update_series(&mut self, fields: &SeriesFields) -> RenderingResult<()> {
        let update = restyle_payload(fields, viewer_offset());
        let traces = JsValue::from(js_sys::Array::of1(&JsValue::from(fields.index().position() as u32)));
        plotly_restyle(&self.element_id, &to_js(&update)?, &traces).map_err(|e| plotly_failed("restyle", e))?;
        Ok(())
    }

    fn relayout_axes(&mut self, ticks: &AxisTicks) -> RenderingResult<()> {
        let update = relayout_payload(ticks, viewer_offset());
        plotly_relayout(&self.element_id, &to_js(&update)?).map_err(|e| plotly_failed("relayout", e))?;
        Ok(())
    }
}
