use crate::limits;
use crate::model::Point;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CssError {
    #[error("input exceeds {} bytes", limits::MAX_CSS_LEN)]
    TooLong,
    #[error("expected polygon(...)")]
    NotPolygon,
    #[error("unbalanced parenthesis")]
    Unbalanced,
    #[error("point {index}: expected two percentage coordinates")]
    BadPoint { index: usize },
    #[error("point {index}: invalid number '{token}'")]
    BadNumber { index: usize, token: String },
    #[error("point {index}: '{token}' is not a percentage")]
    NotPercent { index: usize, token: String },
    #[error("point {index}: coordinate {value} outside 0..100")]
    OutOfRange { index: usize, value: f64 },
    #[error("polygon needs at least {} points, got {got}", limits::MIN_POINTS)]
    TooFewPoints { got: usize },
    #[error("polygon exceeds {} points", limits::MAX_POINTS)]
    TooManyPoints,
}

fn push_coord(out: &mut String, p: Point) {
    let (x, y) = p.rounded();
    out.push_str(&x.to_string());
    out.push_str("% ");
    out.push_str(&y.to_string());
    out.push('%');
}

/// `polygon(50% 0%, 0% 100%, 100% 100%)`
pub fn polygon(points: &[Point]) -> String {
    let mut s = String::with_capacity(9 + points.len() * 10);
    s.push_str("polygon(");
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        push_coord(&mut s, *p);
    }
    s.push(')');
    s
}

/// The declaration copied to the clipboard.
pub fn declaration(points: &[Point]) -> String {
    format!("clip-path: {};", polygon(points))
}

/// Multi-line declaration for the code panel, one point per line.
pub fn block(points: &[Point]) -> String {
    let mut s = String::from("clip-path: polygon(\n");
    for (i, p) in points.iter().enumerate() {
        s.push_str("  ");
        push_coord(&mut s, *p);
        if i + 1 < points.len() {
            s.push(',');
        }
        s.push('\n');
    }
    s.push_str(");");
    s
}

/// Parse `polygon(...)` text, optionally wrapped as a full `clip-path:`
/// declaration. Coordinates must be percentages within 0..100.
pub fn parse_polygon(text: &str) -> Result<Vec<Point>, CssError> {
    if text.len() > limits::MAX_CSS_LEN {
        return Err(CssError::TooLong);
    }
    let mut s = text.trim();
    if let Some(rest) = strip_prefix_ci(s, "clip-path") {
        s = rest.trim_start().strip_prefix(':').ok_or(CssError::NotPolygon)?.trim_start();
    }
    s = s.trim_end();
    if let Some(rest) = s.strip_suffix(';') {
        s = rest.trim_end();
    }
    let body = strip_prefix_ci(s, "polygon").ok_or(CssError::NotPolygon)?.trim_start();
    let body = body.strip_prefix('(').ok_or(CssError::NotPolygon)?;
    let body = body.strip_suffix(')').ok_or(CssError::Unbalanced)?;
    if body.contains('(') || body.contains(')') {
        return Err(CssError::Unbalanced);
    }

    let mut points = Vec::new();
    for (index, item) in body.split(',').enumerate() {
        if points.len() >= limits::MAX_POINTS {
            return Err(CssError::TooManyPoints);
        }
        let mut toks = item.split_whitespace();
        let (tx, ty) = match (toks.next(), toks.next(), toks.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => return Err(CssError::BadPoint { index }),
        };
        let x = parse_percent(index, tx)?;
        let y = parse_percent(index, ty)?;
        points.push(Point::new(x, y));
    }
    if points.len() < limits::MIN_POINTS {
        return Err(CssError::TooFewPoints { got: points.len() });
    }
    Ok(points)
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) { Some(&s[prefix.len()..]) } else { None }
}

fn parse_percent(index: usize, token: &str) -> Result<f64, CssError> {
    let num = token.strip_suffix('%').ok_or_else(|| CssError::NotPercent {
        index,
        token: token.to_string(),
    })?;
    let value: f64 = num.parse().map_err(|_| CssError::BadNumber {
        index,
        token: token.to_string(),
    })?;
    if !value.is_finite() {
        return Err(CssError::BadNumber { index, token: token.to_string() });
    }
    if !limits::in_percent_bounds(value) {
        return Err(CssError::OutOfRange { index, value });
    }
    Ok(value)
}
