//! Pure helper functions for extracting typed parameters from a
//! `serde_json::Value` object.
//!
//! Each helper takes a JSON object, a key, and a default; a missing key or
//! a wrong-typed value falls back to the default. These never fail, so
//! scene configuration always resolves to usable values.

use glam::DVec2;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or
/// wrong type. JSON integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing,
/// negative, fractional, or wrong type.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a point from `params[name]`, returning `default` unless the
/// value is a two-element numeric array `[x, y]` (the same shape `DVec2`
/// serializes to).
pub fn param_point(params: &Value, name: &str, default: DVec2) -> DVec2 {
    let Some(items) = params.get(name).and_then(Value::as_array) else {
        return default;
    };
    match (
        items.len(),
        items.first().and_then(Value::as_f64),
        items.get(1).and_then(Value::as_f64),
    ) {
        (2, Some(x), Some(y)) => DVec2::new(x, y),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"size": 2.5});
        assert!((param_f64(&params, "size", 1.0) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"capture_radius": 2});
        assert!((param_f64(&params, "capture_radius", 0.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "size", 3.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_wrong_type() {
        let params = json!({"size": "large"});
        assert!((param_f64(&params, "size", 1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!("not an object");
        assert!((param_f64(&params, "size", 7.0) - 7.0).abs() < f64::EPSILON);
    }

    // -- param_usize --

    #[test]
    fn param_usize_extracts_existing_integer() {
        let params = json!({"steps_per_edge": 42});
        assert_eq!(param_usize(&params, "steps_per_edge", 20), 42);
    }

    #[test]
    fn param_usize_returns_default_when_key_missing() {
        let params = json!({});
        assert_eq!(param_usize(&params, "steps_per_edge", 20), 20);
    }

    #[test]
    fn param_usize_returns_default_for_float_value() {
        let params = json!({"steps_per_edge": 2.5});
        assert_eq!(param_usize(&params, "steps_per_edge", 99), 99);
    }

    #[test]
    fn param_usize_returns_default_for_negative_integer() {
        let params = json!({"steps_per_edge": -1});
        assert_eq!(param_usize(&params, "steps_per_edge", 5), 5);
    }

    // -- param_point --

    #[test]
    fn param_point_extracts_two_element_array() {
        let params = json!({"center": [0.5, -1.0]});
        let p = param_point(&params, "center", DVec2::ZERO);
        assert_eq!(p, DVec2::new(0.5, -1.0));
    }

    #[test]
    fn param_point_accepts_integer_components() {
        let params = json!({"center": [-2, 1]});
        assert_eq!(param_point(&params, "center", DVec2::ZERO), DVec2::new(-2.0, 1.0));
    }

    #[test]
    fn param_point_returns_default_when_key_missing() {
        let params = json!({});
        let d = DVec2::new(-2.0, -1.0);
        assert_eq!(param_point(&params, "center", d), d);
    }

    #[test]
    fn param_point_returns_default_for_wrong_arity() {
        let d = DVec2::ZERO;
        assert_eq!(param_point(&json!({"center": [1.0]}), "center", d), d);
        assert_eq!(param_point(&json!({"center": [1.0, 2.0, 3.0]}), "center", d), d);
    }

    #[test]
    fn param_point_returns_default_for_non_numeric_components() {
        let d = DVec2::new(1.0, 1.0);
        assert_eq!(param_point(&json!({"center": ["a", "b"]}), "center", d), d);
    }

    #[test]
    fn param_point_round_trips_dvec2_serialization() {
        // DVec2 serializes to [x, y]; feeding that back through param_point
        // must reproduce the point.
        let p = DVec2::new(3.25, -4.5);
        let params = json!({ "center": serde_json::to_value(p).unwrap() });
        assert_eq!(param_point(&params, "center", DVec2::ZERO), p);
    }
}
