//! Colours for the balance line and its points.

use crate::series::Direction;

/// Colour of the balance line.
pub(super) const LINE_COLOR: &str = "rgba(75, 192, 192, 1)";
/// Colour of the area fill directly under the line.
pub(super) const AREA_TOP_COLOR: &str = "rgba(75, 192, 192, 0.4)";
/// Colour the area fill fades to at the bottom of the chart.
pub(super) const AREA_BOTTOM_COLOR: &str = "rgba(75, 192, 192, 0)";
/// Border colour drawn around every point.
pub(super) const POINT_BORDER_COLOR: &str = "white";
/// Background of the hover tooltip.
pub(super) const TOOLTIP_BACKGROUND_COLOR: &str = "rgba(0, 0, 0, 0.8)";
/// Border of the hover tooltip.
pub(super) const TOOLTIP_BORDER_COLOR: &str = "rgba(255, 255, 255, 0.2)";
/// Colour of the text inside the hover tooltip.
pub(super) const TOOLTIP_TEXT_COLOR: &str = "white";

/// The style token for a point on the balance line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointStyle {
    /// The balance went up.
    Rise,
    /// The balance went down.
    Fall,
    /// The balance did not change.
    Neutral,
}

impl PointStyle {
    /// The fill colour used for points with this style.
    pub fn color(self) -> &'static str {
        match self {
            PointStyle::Rise => "rgba(75, 192, 192, 0.6)",
            PointStyle::Fall => "rgba(255, 99, 132, 0.6)",
            PointStyle::Neutral => "rgba(201, 203, 207, 0.6)",
        }
    }
}

impl From<Direction> for PointStyle {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => PointStyle::Rise,
            Direction::Down => PointStyle::Fall,
            Direction::Flat => PointStyle::Neutral,
        }
    }
}
