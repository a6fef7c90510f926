use clipath::Point;
use js_sys::{Float64Array, Object, Reflect};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

/// Points as `[x0, y0, x1, y1, ...]`.
pub fn arr_points(points: &[Point]) -> Float64Array {
    let arr = Float64Array::new_with_length((points.len() * 2) as u32);
    for (i, p) in points.iter().enumerate() {
        arr.set_index((i * 2) as u32, p.x);
        arr.set_index((i * 2 + 1) as u32, p.y);
    }
    arr
}

/// Inverse of [`arr_points`]; `None` for odd-length input.
pub fn points_from_arr(arr: &Float64Array) -> Option<Vec<Point>> {
    let flat = arr.to_vec();
    if flat.len() % 2 != 0 {
        return None;
    }
    Some(flat.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect())
}

pub fn index_value(index: Option<usize>) -> JsValue {
    match index {
        Some(i) => JsValue::from_f64(i as f64),
        None => JsValue::NULL,
    }
}

/// Decode a JS value through its JSON text so integers stay integers for
/// tagged enums and `usize` fields.
pub fn from_js<T: serde::de::DeserializeOwned>(v: &JsValue) -> Result<T, String> {
    if v.is_undefined() || v.is_function() || v.is_symbol() {
        return Err("expected a JSON value".to_string());
    }
    let text = js_sys::JSON::stringify(v).map_err(|_| "value is not JSON-serializable".to_string())?;
    let text = text.as_string().ok_or_else(|| "value is not JSON-serializable".to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}
