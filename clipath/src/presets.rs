use crate::model::Point;

/// A named reference shape offered in the gallery. Preset data is `'static`,
/// so editing the selected shape can never write back into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub points: &'static [Point],
}

impl Preset {
    /// Thumbnail points for an SVG `<polygon points="...">` in a 0..100 viewBox.
    pub fn svg_points(&self) -> String {
        let mut s = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                s.push(' ');
            }
            s.push_str(&format!("{},{}", p.x, p.y));
        }
        s
    }
}

const fn p(x: f64, y: f64) -> Point { Point::new(x, y) }

pub const TRIANGLE: Preset = Preset {
    name: "Triangle",
    points: &[p(50.0, 0.0), p(0.0, 100.0), p(100.0, 100.0)],
};

pub const SQUARE: Preset = Preset {
    name: "Square",
    points: &[p(0.0, 0.0), p(100.0, 0.0), p(100.0, 100.0), p(0.0, 100.0)],
};

pub const TRAPEZOID: Preset = Preset {
    name: "Trapezoid",
    points: &[p(20.0, 0.0), p(80.0, 0.0), p(100.0, 100.0), p(0.0, 100.0)],
};

pub const PENTAGON: Preset = Preset {
    name: "Pentagon",
    points: &[p(50.0, 0.0), p(100.0, 38.0), p(82.0, 100.0), p(18.0, 100.0), p(0.0, 38.0)],
};

pub const STAR: Preset = Preset {
    name: "Star",
    points: &[
        p(50.0, 0.0), p(61.0, 35.0), p(98.0, 35.0), p(68.0, 57.0), p(79.0, 91.0),
        p(50.0, 70.0), p(21.0, 91.0), p(32.0, 57.0), p(2.0, 35.0), p(39.0, 35.0),
    ],
};

pub const ARROW: Preset = Preset {
    name: "Arrow",
    points: &[
        p(40.0, 0.0), p(40.0, 20.0), p(100.0, 20.0), p(100.0, 80.0),
        p(40.0, 80.0), p(40.0, 100.0), p(0.0, 50.0),
    ],
};

pub const MESSAGE: Preset = Preset {
    name: "Message",
    points: &[
        p(0.0, 0.0), p(100.0, 0.0), p(100.0, 75.0), p(75.0, 75.0),
        p(75.0, 100.0), p(50.0, 75.0), p(0.0, 75.0),
    ],
};

pub const CROSS: Preset = Preset {
    name: "Cross",
    points: &[
        p(20.0, 0.0), p(0.0, 20.0), p(30.0, 50.0), p(0.0, 80.0), p(20.0, 100.0), p(50.0, 70.0),
        p(80.0, 100.0), p(100.0, 80.0), p(70.0, 50.0), p(100.0, 20.0), p(80.0, 0.0), p(50.0, 30.0),
    ],
};

pub const FRAME: Preset = Preset {
    name: "Frame",
    points: &[
        p(0.0, 0.0), p(0.0, 100.0), p(25.0, 100.0), p(25.0, 25.0), p(75.0, 25.0),
        p(75.0, 75.0), p(25.0, 75.0), p(14.0, 100.0), p(100.0, 100.0), p(100.0, 0.0),
    ],
};

pub const CUSTOM: Preset = Preset {
    name: "Custom",
    points: &[p(20.0, 20.0), p(80.0, 20.0), p(80.0, 80.0), p(50.0, 95.0), p(20.0, 80.0)],
};

static PRESETS: [Preset; 10] =
    [TRIANGLE, SQUARE, TRAPEZOID, PENTAGON, STAR, ARROW, MESSAGE, CROSS, FRAME, CUSTOM];

/// Gallery order.
pub fn all() -> &'static [Preset] { &PRESETS }

pub fn find(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// The shape the editor starts with.
pub fn default_preset() -> &'static Preset { &TRIANGLE }
