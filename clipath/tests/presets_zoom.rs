use clipath::presets;
use clipath::zoom::{MAX_ZOOM, MIN_ZOOM};
use clipath::{limits, ShapeEditor, Zoom};

#[test]
fn presets_are_valid_shapes() {
    let all = presets::all();
    assert_eq!(all.len(), 10);
    for p in all {
        assert!(p.points.len() >= limits::MIN_POINTS, "{}", p.name);
        assert!(p.points.iter().all(|pt| pt.is_valid()), "{}", p.name);
    }
    let names: Vec<&str> = all.iter().map(|p| p.name).collect();
    assert_eq!(names[0], "Triangle");
    assert_eq!(names[9], "Custom");
}

#[test]
fn find_is_case_insensitive() {
    assert_eq!(presets::find("pentagon").map(|p| p.points.len()), Some(5));
    assert_eq!(presets::find(" Frame ").map(|p| p.name), Some("Frame"));
    assert!(presets::find("hexagon").is_none());
    assert_eq!(presets::default_preset().name, "Triangle");
}

#[test]
fn svg_thumbnail_points() {
    assert_eq!(presets::TRIANGLE.svg_points(), "50,0 0,100 100,100");
}

#[test]
fn applying_each_preset_matches_its_css() {
    let mut ed = ShapeEditor::new();
    for p in presets::all() {
        let n = ed.apply_preset(p);
        assert_eq!(n.message(), format!("{} shape applied", p.name));
        assert_eq!(ed.points(), p.points);
        assert_eq!(ed.active_index(), None);
    }
    ed.apply_preset(&presets::SQUARE);
    assert_eq!(ed.to_css_polygon(), "polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)");
}

#[test]
fn zoom_steps_and_clamps() {
    let mut z = Zoom::new();
    assert_eq!(z.label(), "100%");
    z.wheel(1.0);
    assert_eq!(z.label(), "90%");
    z.wheel(-3.0);
    z.wheel(0.0);
    assert_eq!(z.label(), "110%");
    for _ in 0..100 {
        z.wheel(-1.0);
    }
    assert_eq!(z.level(), MAX_ZOOM);
    for _ in 0..100 {
        z.wheel(1.0);
    }
    assert_eq!(z.level(), MIN_ZOOM);
    assert_eq!(z.label(), "20%");
    assert_eq!(z.reset(), 1.0);
    assert_eq!(z.set(9.0), MAX_ZOOM);
    assert_eq!(z.set(f64::NAN), MAX_ZOOM);
}

#[test]
fn zoom_reports_unscaled_dims() {
    let mut z = Zoom::new();
    z.set(2.0);
    assert_eq!(z.base_size(1600.0, 1200.0), (800.0, 600.0));
    assert_eq!(z.dims_label(1600.0, 1201.0), "800 x 601");
}
