//! Scalar parsers for layout attributes.
//!
//! The markup stores positions and sizes as comma-separated pairs
//! (`Location="10,10"`, `Size="80,16"`) and modes as comma-separated token
//! pairs (`PackSize="a,f"`). Parsing never fails: a missing or unparseable
//! component becomes `0` (or the caller's default token) and is reported
//! once through [`warn_once`].

use serde::Serialize;
use swgui_common::warning::warn_once;

/// A point or offset in reference space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in reference space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Parse a single numeric component, treating blanks and garbage as `0`.
fn parse_component(raw: Option<&str>, source: &str) -> f32 {
    let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return 0.0;
    };
    match text.parse::<f32>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            warn_once(
                "layout",
                &format!("unparseable number '{text}' in '{source}', using 0"),
            );
            0.0
        }
    }
}

/// Parse a comma-separated numeric pair such as `"10,20"`.
///
/// Missing, empty, or non-numeric components become `0`. Anything after the
/// second comma is ignored.
#[must_use]
pub fn parse_pair(text: &str) -> (f32, f32) {
    let mut parts = text.split(',');
    let first = parse_component(parts.next(), text);
    let second = parse_component(parts.next(), text);
    (first, second)
}

/// Parse a `Location` attribute; `None` yields the origin.
#[must_use]
pub fn parse_location(text: Option<&str>) -> Vec2 {
    text.map_or_else(Vec2::default, |t| {
        let (x, y) = parse_pair(t);
        Vec2::new(x, y)
    })
}

/// Parse a `Size` or `ScrollExtent` attribute; `None` yields a zero size.
#[must_use]
pub fn parse_size(text: Option<&str>) -> Size {
    text.map_or_else(Size::default, |t| {
        let (w, h) = parse_pair(t);
        Size::new(w, h)
    })
}

/// Split a two-token mode string such as `"nfn,cpc"` into its horizontal and
/// vertical tokens, substituting `default` for a missing or blank token.
#[must_use]
pub fn parse_mode_pair<'a>(text: Option<&'a str>, default: &'a str) -> (&'a str, &'a str) {
    let Some(text) = text else {
        return (default, default);
    };
    let mut parts = text.split(',').map(str::trim);
    let horizontal = parts.next().filter(|t| !t.is_empty()).unwrap_or(default);
    let vertical = parts.next().filter(|t| !t.is_empty()).unwrap_or(default);
    (horizontal, vertical)
}
