//! Geometry and alignment configuration stored on nodes.
//!
//! These are raw configuration values: they are never bound to
//! properties or data, so their wire shape is the same in every
//! document version.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    #[serde(with = "layerkit_model::number")]
    pub x: f64,
    #[serde(with = "layerkit_model::number")]
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas size of an artboard. A missing height grows with the content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArtboardFrame {
    #[serde(with = "layerkit_model::number")]
    pub width: f64,
    #[serde(default, with = "layerkit_model::number::option")]
    pub height: Option<f64>,
}

impl Default for ArtboardFrame {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: None,
        }
    }
}

/// A point in a view's unit coordinate space, `(0, 0)` being top leading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPoint {
    #[serde(with = "layerkit_model::number")]
    pub x: f64,
    #[serde(with = "layerkit_model::number")]
    pub y: f64,
}

impl UnitPoint {
    pub const TOP_LEADING: UnitPoint = UnitPoint::new(0.0, 0.0);
    pub const TOP: UnitPoint = UnitPoint::new(0.5, 0.0);
    pub const CENTER: UnitPoint = UnitPoint::new(0.5, 0.5);
    pub const BOTTOM: UnitPoint = UnitPoint::new(0.5, 1.0);
    pub const BOTTOM_TRAILING: UnitPoint = UnitPoint::new(1.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for UnitPoint {
    fn default() -> Self {
        UnitPoint::CENTER
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    #[default]
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl Alignment {
    /// Anchor point of this alignment in unit coordinates.
    pub fn unit_point(self) -> UnitPoint {
        let x = match self {
            Alignment::TopLeading | Alignment::Leading | Alignment::BottomLeading => 0.0,
            Alignment::Top | Alignment::Center | Alignment::Bottom => 0.5,
            Alignment::TopTrailing | Alignment::Trailing | Alignment::BottomTrailing => 1.0,
        };
        let y = match self {
            Alignment::TopLeading | Alignment::Top | Alignment::TopTrailing => 0.0,
            Alignment::Leading | Alignment::Center | Alignment::Trailing => 0.5,
            Alignment::BottomLeading | Alignment::Bottom | Alignment::BottomTrailing => 1.0,
        };
        UnitPoint::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
    FirstTextBaseline,
    LastTextBaseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Edge {
    Top,
    Leading,
    Bottom,
    Trailing,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Leading, Edge::Bottom, Edge::Trailing];
}

/// Resolved insets, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl EdgeInsets {
    /// Insets of `length` on each of `edges`, zero elsewhere.
    pub fn on_edges(edges: &[Edge], length: f64) -> Self {
        let mut insets = EdgeInsets::default();
        for edge in edges {
            match edge {
                Edge::Top => insets.top = length,
                Edge::Leading => insets.leading = length,
                Edge::Bottom => insets.bottom = length,
                Edge::Trailing => insets.trailing = length,
            }
        }
        insets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_unit_points() {
        assert_eq!(Alignment::TopLeading.unit_point(), UnitPoint::TOP_LEADING);
        assert_eq!(Alignment::Center.unit_point(), UnitPoint::CENTER);
        assert_eq!(Alignment::BottomTrailing.unit_point(), UnitPoint::BOTTOM_TRAILING);
    }

    #[test]
    fn alignment_wire_names() {
        assert_eq!(
            serde_json::to_value(Alignment::BottomLeading).unwrap(),
            serde_json::json!("bottomLeading")
        );
        assert_eq!(
            serde_json::to_value(VerticalAlignment::FirstTextBaseline).unwrap(),
            serde_json::json!("firstTextBaseline")
        );
    }

    #[test]
    fn insets_on_edges() {
        let insets = EdgeInsets::on_edges(&[Edge::Top, Edge::Bottom], 8.0);
        assert_eq!(
            insets,
            EdgeInsets {
                top: 8.0,
                leading: 0.0,
                bottom: 8.0,
                trailing: 0.0,
            }
        );
    }
}
