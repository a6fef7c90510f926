use crate::interop::{new_obj, set_kv};
use clipath::{EditError, Notice};
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min));
    set_kv(&d, "max", &JsValue::from_f64(max));
    set_kv(&d, "got", &JsValue::from_f64(got));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

#[inline]
pub fn invalid_index(index: u32, len: usize) -> JsValue {
    let d = new_obj();
    set_kv(&d, "index", &JsValue::from_f64(index as f64));
    set_kv(&d, "len", &JsValue::from_f64(len as f64));
    err("invalid_index", "point index out of range", Some(d.into()))
}

pub fn invalid_command(message: impl Into<String>) -> JsValue {
    err("invalid_command", message, None)
}

/// `{ ok: false, error }` for a core editing failure. The message is the
/// user-visible warning text.
pub fn edit_error(e: &EditError) -> JsValue {
    let code = match e {
        EditError::MinimumPoints => "min_points",
        EditError::IndexOutOfRange { .. } => "invalid_index",
        EditError::UnknownPreset(_) => "unknown_preset",
        EditError::InvalidPoint(_) => "out_of_range",
        EditError::Css(_) => "css_parse",
        EditError::Snapshot(_) => "invalid_snapshot",
    };
    let data = match e {
        EditError::IndexOutOfRange { index, len } => {
            let d = new_obj();
            set_kv(&d, "index", &JsValue::from_f64(*index as f64));
            set_kv(&d, "len", &JsValue::from_f64(*len as f64));
            Some(d.into())
        }
        EditError::InvalidPoint(i) => {
            let d = new_obj(); set_kv(&d, "index", &JsValue::from_f64(*i as f64));
            Some(d.into())
        }
        _ => None,
    };
    err(code, e.to_string(), data)
}

/// `{ kind, index | name, message }` for a confirmation toast.
pub fn notice(n: &Notice) -> JsValue {
    let v = n
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or_else(|_| new_obj().into());
    if let Some(o) = v.dyn_ref::<js_sys::Object>() {
        set_kv(o, "message", &JsValue::from_str(&n.message()));
    }
    v
}
