use crate::{error, interop, ShapeEditor, Zoom};
use clipath::{presets, Command, Pointer, Rect};
use js_sys::{Array, Float64Array};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console. `level` is one of
/// error/warn/info/debug/trace. Returns false if logging is unavailable.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    let level: log::Level = match level.parse() {
        Ok(l) => l,
        Err(_) => return false,
    };
    #[cfg(feature = "console_log")]
    {
        console_log::init_with_level(level).is_ok()
    }
    #[cfg(not(feature = "console_log"))]
    {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "clipath-wasm built without console_log; ignoring level {}",
            level
        )));
        false
    }
}

/// Preset gallery: `[{ name, points: Float64Array, svg }]`.
#[wasm_bindgen]
pub fn preset_list() -> JsValue {
    let out = Array::new();
    for p in presets::all() {
        let o = interop::new_obj();
        interop::set_kv(&o, "name", &JsValue::from_str(p.name));
        interop::set_kv(&o, "points", &interop::arr_points(p.points).into());
        interop::set_kv(&o, "svg", &JsValue::from_str(&p.svg_points()));
        out.push(&o.into());
    }
    out.into()
}

fn rect_args(left: f64, top: f64, width: f64, height: f64) -> Result<Rect, JsValue> {
    for (name, v) in [("left", left), ("top", top), ("width", width), ("height", height)] {
        if !v.is_finite() {
            return Err(error::non_finite(name));
        }
    }
    if width <= 0.0 {
        return Err(error::out_of_range("width", f64::MIN_POSITIVE, f64::MAX, width));
    }
    if height <= 0.0 {
        return Err(error::out_of_range("height", f64::MIN_POSITIVE, f64::MAX, height));
    }
    Ok(Rect::new(left, top, width, height))
}

#[wasm_bindgen]
impl ShapeEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ShapeEditor {
        crate::ShapeEditor::rs_new()
    }
    pub fn version(&self) -> u64 {
        self.inner.version()
    }

    // State for handle rendering
    pub fn point_count(&self) -> u32 {
        self.inner.point_count() as u32
    }
    pub fn get_points(&self) -> Float64Array {
        interop::arr_points(self.inner.points())
    }
    pub fn get_point(&self, index: u32) -> JsValue {
        match self.inner.points().get(index as usize) {
            Some(p) => serde_wasm_bindgen::to_value(&[p.x, p.y]).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }
    pub fn active_index(&self) -> JsValue {
        interop::index_value(self.inner.active_index())
    }
    pub fn dragging_index(&self) -> JsValue {
        interop::index_value(self.inner.dragging_index())
    }
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    // Point management
    pub fn add_point(&mut self) -> u32 {
        self.inner.add_point() as u32
    }
    pub fn add_point_res(&mut self) -> JsValue {
        let index = self.inner.add_point();
        error::ok(error::notice(&clipath::Notice::PointAdded { index }))
    }
    pub fn remove_point(&mut self, index: u32) -> bool {
        self.inner.remove_point(index as usize).is_ok()
    }
    pub fn remove_point_res(&mut self, index: u32) -> JsValue {
        match self.inner.remove_point(index as usize) {
            Ok(_) => error::ok(error::notice(&clipath::Notice::PointRemoved { index: index as usize })),
            Err(e) => error::edit_error(&e),
        }
    }
    pub fn remove_active_point(&mut self) -> bool {
        self.inner.remove_active_point().is_ok()
    }
    pub fn remove_active_point_res(&mut self) -> JsValue {
        match self.inner.remove_active_point() {
            Ok(index) => error::ok(error::notice(&clipath::Notice::PointRemoved { index })),
            Err(e) => error::edit_error(&e),
        }
    }

    // Dragging
    pub fn begin_drag(&mut self, index: u32) -> bool {
        self.inner.begin_drag(index as usize)
    }
    pub fn begin_drag_res(&mut self, index: u32) -> JsValue {
        if self.inner.begin_drag(index as usize) {
            error::ok(JsValue::from_bool(true))
        } else {
            error::invalid_index(index, self.inner.point_count())
        }
    }
    /// Pointer-move handler; returns whether a point moved.
    pub fn update_drag(
        &mut self,
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> bool {
        let rect = Rect::new(left, top, width, height);
        self.inner.update_drag(Pointer { x: client_x, y: client_y }, rect).is_some()
    }
    pub fn update_drag_res(
        &mut self,
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> JsValue {
        if !client_x.is_finite() {
            return error::non_finite("client_x");
        }
        if !client_y.is_finite() {
            return error::non_finite("client_y");
        }
        let rect = match rect_args(left, top, width, height) {
            Ok(r) => r,
            Err(e) => return e,
        };
        match self.inner.update_drag(Pointer { x: client_x, y: client_y }, rect) {
            Some(p) => error::ok(serde_wasm_bindgen::to_value(&[p.x, p.y]).unwrap_or(JsValue::NULL)),
            None => error::ok(JsValue::NULL),
        }
    }
    pub fn end_drag(&mut self) -> bool {
        self.inner.end_drag()
    }

    // Presets
    pub fn select_preset(&mut self, name: &str) -> bool {
        self.inner.apply_preset_named(name).is_ok()
    }
    pub fn select_preset_res(&mut self, name: &str) -> JsValue {
        match self.inner.apply_preset_named(name) {
            Ok(n) => error::ok(error::notice(&n)),
            Err(e) => error::edit_error(&e),
        }
    }
    /// Replace the shape with caller-supplied points `[x0, y0, ...]`.
    pub fn set_points_res(&mut self, points: &Float64Array) -> JsValue {
        let pts = match interop::points_from_arr(points) {
            Some(p) => p,
            None => return error::err("invalid_array", "points must have even length", None),
        };
        match self.inner.select_preset(&pts) {
            Ok(()) => error::ok(JsValue::from_f64(pts.len() as f64)),
            Err(e) => error::edit_error(&e),
        }
    }

    // CSS output
    pub fn css_polygon(&self) -> String {
        self.inner.to_css_polygon()
    }
    pub fn css_declaration(&self) -> String {
        self.inner.to_css_declaration()
    }
    pub fn css_block(&self) -> String {
        self.inner.to_css_block()
    }
    pub fn load_css_res(&mut self, text: &str) -> JsValue {
        match self.inner.load_css(text) {
            Ok(()) => error::ok(JsValue::from_f64(self.inner.point_count() as f64)),
            Err(e) => error::edit_error(&e),
        }
    }

    // JSON snapshots
    pub fn to_json(&self) -> JsValue {
        self.inner
            .to_json_value()
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .unwrap_or(JsValue::NULL)
    }
    pub fn from_json(&mut self, v: JsValue) -> bool {
        match interop::from_js::<serde_json::Value>(&v) {
            Ok(val) => self.inner.from_json_value(val).is_ok(),
            Err(_) => false,
        }
    }
    pub fn from_json_res(&mut self, v: JsValue) -> JsValue {
        let val = match interop::from_js::<serde_json::Value>(&v) {
            Ok(val) => val,
            Err(e) => return error::err("invalid_snapshot", e, None),
        };
        match self.inner.from_json_value(val) {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::edit_error(&e),
        }
    }

    /// Apply a UI command such as `{ type: "add_point" }`. The value is the
    /// confirmation notice or null.
    pub fn dispatch(&mut self, cmd: JsValue) -> JsValue {
        let cmd: Command = match interop::from_js(&cmd) {
            Ok(c) => c,
            Err(e) => return error::invalid_command(e),
        };
        match self.inner.dispatch(cmd) {
            Ok(Some(n)) => error::ok(error::notice(&n)),
            Ok(None) => error::ok(JsValue::NULL),
            Err(e) => error::edit_error(&e),
        }
    }
}

#[wasm_bindgen]
impl Zoom {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Zoom {
        Zoom { inner: clipath::Zoom::new() }
    }
    pub fn level(&self) -> f64 {
        self.inner.level()
    }
    pub fn wheel(&mut self, delta_y: f64) -> f64 {
        self.inner.wheel(delta_y)
    }
    pub fn set(&mut self, level: f64) -> f64 {
        self.inner.set(level)
    }
    pub fn reset(&mut self) -> f64 {
        self.inner.reset()
    }
    pub fn label(&self) -> String {
        self.inner.label()
    }
    pub fn dims_label(&self, width: f64, height: f64) -> String {
        self.inner.dims_label(width, height)
    }
}
