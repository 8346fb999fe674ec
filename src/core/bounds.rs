use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::graph::NodePosition;

/// Closed value range of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Tightest range containing every value, or `None` for an empty input.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut iter = values.into_iter().map(OrderedFloat);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        });
        Some(Self::new(min.0, max.0))
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Expands both ends by `ratio * span`. A zero span stays zero, and the
    /// range is returned unpadded when padding would leave the finite `f64`
    /// range.
    #[must_use]
    pub fn padded(self, ratio: f64) -> Self {
        let padding = self.span() * ratio;
        let padded = Self::new(self.min - padding, self.max + padding);
        if padded.span().is_finite() {
            padded
        } else {
            self
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Data extent of a node set on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphExtent {
    pub x: AxisBounds,
    pub y: AxisBounds,
}

impl GraphExtent {
    /// Returns `None` when `positions` is empty.
    pub fn from_positions(positions: &[NodePosition]) -> Option<Self> {
        Some(Self {
            x: AxisBounds::from_values(positions.iter().map(|point| point.x))?,
            y: AxisBounds::from_values(positions.iter().map(|point| point.y))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisBounds, GraphExtent};
    use crate::core::graph::NodePosition;

    #[test]
    fn extent_tracks_each_axis_independently() {
        let extent = GraphExtent::from_positions(&[
            NodePosition::new(-3.0, 7.0),
            NodePosition::new(4.0, -1.0),
            NodePosition::new(1.0, 2.0),
        ])
        .expect("non-empty");
        assert_eq!(extent.x, AxisBounds::new(-3.0, 4.0));
        assert_eq!(extent.y, AxisBounds::new(-1.0, 7.0));
    }

    #[test]
    fn zero_span_has_zero_padding() {
        let padded = AxisBounds::new(5.0, 5.0).padded(0.1);
        assert_eq!(padded, AxisBounds::new(5.0, 5.0));
    }

    #[test]
    fn padding_that_overflows_keeps_the_raw_range() {
        let bounds = AxisBounds::new(0.0, f64::MAX);
        assert_eq!(bounds.padded(0.05), bounds);
    }

    #[test]
    fn empty_positions_have_no_extent() {
        assert!(GraphExtent::from_positions(&[]).is_none());
    }
}
