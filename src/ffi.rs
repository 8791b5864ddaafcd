//! C ABI over JSON strings.
//!
//! Request:
//!
//! ```json
//! { "points": [{"x": 0, "y": 0}, {"x": 3, "y": 4}], "depot": null,
//!   "algorithm": "2opt", "config": { "seed": 7 } }
//! ```
//!
//! The response is an [`OptimizationResult`](crate::OptimizationResult) as
//! JSON, or `{"error": "..."}`. Returned strings must be released with
//! [`u_tour_free_string`].

use std::ffi::{CStr, CString};

use libc::c_char;
use serde::Deserialize;

use crate::models::Point;
use crate::optimizer::{Optimizer, OptimizerConfig};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    points: Vec<Point>,
    #[serde(default)]
    depot: Option<Point>,
    algorithm: String,
    #[serde(default)]
    config: OptimizerConfig,
}

/// Handles one JSON request and returns the JSON response.
pub fn optimize_json(request: &str) -> String {
    let request: Request = match serde_json::from_str(request) {
        Ok(r) => r,
        Err(e) => return error_json(&format!("Cannot read request: {e}")),
    };
    let result = Optimizer::new(request.config).optimize(&request.points, request.depot, &request.algorithm);
    match result {
        Ok(result) => serde_json::to_string(&result).unwrap_or_else(|e| error_json(&e.to_string())),
        Err(e) => error_json(&e.to_string()),
    }
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Optimizes a route described by a NUL-terminated JSON request.
///
/// Returns a newly allocated NUL-terminated JSON string, or null if
/// `request` is null or not valid UTF-8.
///
/// # Safety
///
/// `request` must be null or point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn u_tour_optimize(request: *const c_char) -> *mut c_char {
    if request.is_null() {
        return std::ptr::null_mut();
    }
    let Ok(request) = CStr::from_ptr(request).to_str() else {
        return std::ptr::null_mut();
    };
    match CString::new(optimize_json(request)) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases a string returned by [`u_tour_optimize`].
///
/// # Safety
///
/// `s` must be null or a pointer obtained from [`u_tour_optimize`] that has
/// not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn u_tour_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
