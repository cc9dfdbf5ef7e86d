//! Alignment anchors.
//!
//! Anchored variants pin a widget at a fixed inset from a named container
//! corner, independent of its siblings. Floating variants hand placement to
//! the flow packer; for those, the variant only says which corner of the
//! packed slot the widget hugs, not where the slot is.

use crate::geometry::{Point, Rect, Size};

/// Placement anchor for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Inset from the container's top-left corner.
    #[default]
    LeftTop,
    /// Inset from the container's top-right corner.
    RightTop,
    /// Inset from the container's bottom-left corner.
    LeftBottom,
    /// Inset from the container's bottom-right corner.
    RightBottom,
    /// Flow-packed; hugs the top-left of its slot.
    FloatLeftTop,
    /// Flow-packed; hugs the top-right of its slot.
    FloatRightTop,
}

impl Alignment {
    /// Whether this widget participates in the flow packer.
    pub fn is_floating(&self) -> bool {
        matches!(self, Alignment::FloatLeftTop | Alignment::FloatRightTop)
    }
}

/// Offset of an anchored widget within its container.
///
/// `position` is read as an inset from the anchor corner. Insets that would
/// push the widget past the opposite edge saturate toward the anchor, so the
/// result is always a valid origin (the widget may still extend past the
/// container and clip on paint).
pub fn anchored_offset(
    alignment: Alignment,
    position: Point,
    size: Size,
    container: Size,
) -> Point {
    let from_right = container
        .width
        .saturating_sub(size.width)
        .saturating_sub(position.x);
    let from_bottom = container
        .height
        .saturating_sub(size.height)
        .saturating_sub(position.y);

    match alignment {
        Alignment::LeftTop => position,
        Alignment::RightTop => Point::new(from_right, position.y),
        Alignment::LeftBottom => Point::new(position.x, from_bottom),
        Alignment::RightBottom => Point::new(from_right, from_bottom),
        // Floating widgets get their origin from the packer; the requested
        // position is advisory only and drops out here.
        Alignment::FloatLeftTop | Alignment::FloatRightTop => Point::ORIGIN,
    }
}

/// Origin of a floating widget within the slot the packer assigned it.
pub fn hug_offset(alignment: Alignment, slot: Rect, size: Size) -> Point {
    match alignment {
        Alignment::FloatRightTop => Point::new(
            slot.x + slot.width.saturating_sub(size.width),
            slot.y,
        ),
        _ => slot.origin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size {
        width: 100,
        height: 80,
    };

    #[test]
    fn floating_partition() {
        assert!(Alignment::FloatLeftTop.is_floating());
        assert!(Alignment::FloatRightTop.is_floating());
        assert!(!Alignment::LeftTop.is_floating());
        assert!(!Alignment::RightBottom.is_floating());
    }

    #[test]
    fn left_top_is_the_inset_itself() {
        let offset = anchored_offset(
            Alignment::LeftTop,
            Point::new(3, 4),
            Size::new(10, 10),
            CONTAINER,
        );
        assert_eq!(offset, Point::new(3, 4));
    }

    #[test]
    fn right_top_measures_from_the_right_edge() {
        let offset = anchored_offset(
            Alignment::RightTop,
            Point::new(5, 2),
            Size::new(10, 10),
            CONTAINER,
        );
        assert_eq!(offset, Point::new(85, 2));
    }

    #[test]
    fn corners_are_symmetric() {
        let size = Size::new(20, 10);
        let lb = anchored_offset(Alignment::LeftBottom, Point::ORIGIN, size, CONTAINER);
        let rb = anchored_offset(Alignment::RightBottom, Point::ORIGIN, size, CONTAINER);
        assert_eq!(lb, Point::new(0, 70));
        assert_eq!(rb, Point::new(80, 70));
    }

    #[test]
    fn oversized_widget_saturates_to_the_anchor_corner() {
        let offset = anchored_offset(
            Alignment::RightBottom,
            Point::ORIGIN,
            Size::new(200, 200),
            CONTAINER,
        );
        assert_eq!(offset, Point::ORIGIN);
    }

    #[test]
    fn hug_left_top_is_slot_origin() {
        let slot = Rect::new(40, 0, 30, 20);
        assert_eq!(
            hug_offset(Alignment::FloatLeftTop, slot, Size::new(30, 20)),
            Point::new(40, 0)
        );
    }

    #[test]
    fn hug_right_top_sticks_to_the_slot_right_edge() {
        let slot = Rect::new(40, 0, 30, 20);
        assert_eq!(
            hug_offset(Alignment::FloatRightTop, slot, Size::new(10, 20)),
            Point::new(60, 0)
        );
    }
}
