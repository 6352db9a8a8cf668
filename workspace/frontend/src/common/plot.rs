//! Thin bridge to the Plotly.js global loaded by `index.html`.

use plotly::Layout;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn to_js<S: Serialize>(value: &S) -> Option<JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| log::error!("Failed to serialize chart data: {}", e))
        .ok()?;
    js_sys::JSON::parse(&json)
        .map_err(|e| log::error!("Failed to parse chart JSON: {:?}", e))
        .ok()
}

/// Collects traces of different kinds into one plot.
#[derive(Default)]
pub struct Traces(Vec<serde_json::Value>);

impl Traces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: Serialize>(&mut self, trace: S) {
        match serde_json::to_value(&trace) {
            Ok(value) => self.0.push(value),
            Err(e) => log::error!("Failed to serialize trace: {}", e),
        }
    }
}

/// Draws `traces` into the element with id `div_id`.
pub fn draw(div_id: &str, traces: &Traces, layout: &Layout) {
    let (Some(data), Some(layout)) = (to_js(&traces.0), to_js(layout)) else {
        return;
    };
    let config = to_js(&serde_json::json!({ "responsive": true, "displayModeBar": false }))
        .unwrap_or(JsValue::UNDEFINED);

    log::trace!("Drawing chart {} with {} traces", div_id, traces.0.len());
    newPlot(div_id, data, layout, config);
}
