use clipath_wasm::{preset_list, ShapeEditor, Zoom};
use js_sys::{Array, Float64Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(v: &JsValue, k: &str) -> JsValue { Reflect::get(v, &JsValue::from_str(k)).unwrap_or(JsValue::UNDEFINED) }
fn is_ok(v: &JsValue) -> bool { get(v, "ok").as_bool().unwrap_or(false) }

#[wasm_bindgen_test]
fn default_shape_and_css() {
    let ed = ShapeEditor::new();
    assert_eq!(ed.point_count(), 3);
    assert_eq!(ed.get_points().to_vec(), vec![50.0, 0.0, 0.0, 100.0, 100.0, 100.0]);
    assert_eq!(ed.css_polygon(), "polygon(50% 0%, 0% 100%, 100% 100%)");
    assert_eq!(ed.css_declaration(), "clip-path: polygon(50% 0%, 0% 100%, 100% 100%);");
    assert!(ed.active_index().is_null());
    assert!(!ed.is_dragging());
    assert!(ed.get_point(7).is_null());
}

#[wasm_bindgen_test]
fn drag_flow_updates_points() {
    let mut ed = ShapeEditor::new();
    assert!(ed.begin_drag(1));
    assert!(ed.is_dragging());
    assert_eq!(ed.dragging_index().as_f64(), Some(1.0));
    assert!(ed.update_drag(60.0, 30.0, 10.0, 10.0, 100.0, 40.0));
    assert!(ed.update_drag(-500.0, 9_000.0, 10.0, 10.0, 100.0, 40.0));
    assert!(ed.end_drag());
    assert!(!ed.is_dragging());
    assert!(ed.dragging_index().is_null());
    assert_eq!(ed.rs_inner().points()[1], clipath::Point::new(0.0, 100.0));
    assert!(!ed.update_drag(60.0, 30.0, 10.0, 10.0, 100.0, 40.0));
}

#[wasm_bindgen_test]
fn add_and_remove_report_notices() {
    let mut ed = ShapeEditor::new();
    let r = ed.add_point_res();
    assert!(is_ok(&r));
    assert_eq!(get(&get(&r, "value"), "message").as_string().as_deref(), Some("New point added"));
    assert_eq!(ed.active_index().as_f64(), Some(3.0));
    let r = ed.remove_active_point_res();
    assert!(is_ok(&r));
    assert_eq!(get(&get(&r, "value"), "message").as_string().as_deref(), Some("Point removed"));
    assert_eq!(ed.point_count(), 3);
}

#[wasm_bindgen_test]
fn presets_and_dispatch() {
    let mut ed = ShapeEditor::new();
    let r = ed.select_preset_res("Star");
    assert!(is_ok(&r));
    assert_eq!(get(&get(&r, "value"), "message").as_string().as_deref(), Some("Star shape applied"));
    assert_eq!(ed.point_count(), 10);

    let cmd = Object::new();
    Reflect::set(&cmd, &"type".into(), &"add_point".into()).unwrap();
    let r = ed.dispatch(cmd.into());
    assert!(is_ok(&r));
    assert_eq!(ed.point_count(), 11);

    let list: Array = preset_list().into();
    assert_eq!(list.length(), 10);
    let first = list.get(0);
    assert_eq!(get(&first, "name").as_string().as_deref(), Some("Triangle"));
    assert_eq!(get(&first, "svg").as_string().as_deref(), Some("50,0 0,100 100,100"));
}

#[wasm_bindgen_test]
fn json_and_css_round_trip() {
    let mut ed = ShapeEditor::new();
    ed.select_preset("Square");
    ed.begin_drag(2);
    ed.end_drag();
    let snap = ed.to_json();
    let mut other = ShapeEditor::new();
    assert!(other.from_json(snap));
    assert_eq!(other.css_polygon(), ed.css_polygon());
    assert_eq!(other.active_index().as_f64(), Some(2.0));

    let r = other.load_css_res("polygon(10% 10%, 90% 10%, 50% 90%)");
    assert!(is_ok(&r));
    assert_eq!(other.css_polygon(), "polygon(10% 10%, 90% 10%, 50% 90%)");

    let arr = Float64Array::from(&[0.0, 0.0, 100.0, 0.0, 50.0, 50.0][..]);
    assert!(is_ok(&other.set_points_res(&arr)));
    assert_eq!(other.css_polygon(), "polygon(0% 0%, 100% 0%, 50% 50%)");
}

#[wasm_bindgen_test]
fn zoom_wrapper() {
    let mut z = Zoom::new();
    assert_eq!(z.label(), "100%");
    z.wheel(-10.0);
    assert_eq!(z.label(), "110%");
    z.set(2.0);
    assert_eq!(z.dims_label(1000.0, 500.0), "500 x 250");
    assert_eq!(z.reset(), 1.0);
}

#[wasm_bindgen_test]
fn notices_carry_kind_and_payload() {
    let mut ed = ShapeEditor::new();
    let added = get(&ed.add_point_res(), "value");
    assert_eq!(get(&added, "kind").as_string().as_deref(), Some("point_added"));
    assert_eq!(get(&added, "index").as_f64(), Some(3.0));
    let removed = get(&ed.remove_point_res(0), "value");
    assert_eq!(get(&removed, "kind").as_string().as_deref(), Some("point_removed"));
    assert_eq!(get(&removed, "message").as_string().as_deref(), Some("Point removed"));
    let applied = get(&ed.select_preset_res("frame"), "value");
    assert_eq!(get(&applied, "kind").as_string().as_deref(), Some("preset_applied"));
    assert_eq!(get(&applied, "name").as_string().as_deref(), Some("Frame"));
    assert_eq!(get(&applied, "message").as_string().as_deref(), Some("Frame shape applied"));
}
