//! Browser bindings.
//!
//! Points are passed as `{ x, y }` objects, the depot as such an object or
//! `null`, and the result comes back as
//! `{ route, totalDistance, algorithmUsed, computeTimeMs }`.

use wasm_bindgen::prelude::*;

use crate::models::Point;
use crate::optimizer::{Optimizer, OptimizerConfig};

/// Optimizes a route with default settings.
#[wasm_bindgen]
pub fn optimize(points: JsValue, depot: JsValue, algorithm: &str) -> Result<JsValue, JsValue> {
    run(points, depot, algorithm, OptimizerConfig::default())
}

/// Optimizes a route with explicit settings, e.g. `{ seed: 42, genetic: { generations: 200 } }`.
#[wasm_bindgen(js_name = optimizeWithConfig)]
pub fn optimize_with_config(
    points: JsValue,
    depot: JsValue,
    algorithm: &str,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let config: OptimizerConfig = if config.is_undefined() || config.is_null() {
        OptimizerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Cannot read config: {e}")))?
    };
    run(points, depot, algorithm, config)
}

fn run(points: JsValue, depot: JsValue, algorithm: &str, config: OptimizerConfig) -> Result<JsValue, JsValue> {
    let points: Vec<Point> = serde_wasm_bindgen::from_value(points)
        .map_err(|e| JsValue::from_str(&format!("Cannot read points: {e}")))?;
    let depot: Option<Point> = serde_wasm_bindgen::from_value(depot)
        .map_err(|e| JsValue::from_str(&format!("Cannot read depot: {e}")))?;

    let result = Optimizer::new(config)
        .optimize(&points, depot, algorithm)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}
