//! Sizing policies.
//!
//! A widget carries a requested size plus a [`Sizing`] policy; the resolver
//! turns the pair into a concrete extent given the space the container can
//! offer. Resolution never fails: over-constrained requests are clamped so a
//! misconfigured widget degrades to a collapsed or clipped rectangle instead
//! of aborting the paint cycle.
//!
//! Resolution is split in two steps. [`preferred_size`] answers "what does
//! this widget want, given the whole container" and is what the flow packer
//! uses to decide line wraps. [`resolve_size`] clamps the preference to the
//! space actually remaining. Clamping before the wrap decision would hide
//! the very overflow that triggers a wrap.

use crate::geometry::Size;

/// Sizing policy for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sizing {
    /// Use the requested width and height verbatim (clipped to fit).
    #[default]
    Fixed,
    /// Consume all remaining space on both axes; the request is ignored.
    Fill,
    /// Height fills the remaining container height; the requested width is
    /// read as a percentage of the container's total width.
    FillHeightRelativeWidth,
}

/// The size a widget wants, measured against the whole container.
///
/// Unclamped on the horizontal axis so callers can detect that a preference
/// exceeds the space left on the current line.
pub fn preferred_size(requested: Size, sizing: Sizing, container: Size) -> Size {
    match sizing {
        Sizing::Fixed => requested,
        Sizing::Fill => container,
        Sizing::FillHeightRelativeWidth => Size {
            width: percent_of(container.width, requested.width),
            height: container.height,
        },
    }
}

/// Resolve a request into a concrete size that fits in `avail`.
///
/// `container` is the container's full extent, needed for the percentage
/// basis of [`Sizing::FillHeightRelativeWidth`]; `avail` is the space still
/// unclaimed at the widget's position.
pub fn resolve_size(requested: Size, sizing: Sizing, avail: Size, container: Size) -> Size {
    match sizing {
        // Fill takes whatever is left, ignoring the request entirely.
        Sizing::Fill => avail,
        _ => preferred_size(requested, sizing, container).min(avail),
    }
}

/// `percent` of `whole`, rounded down. Percentages above 100 are honored so
/// an oversized request overflows (and clips) rather than erroring.
fn percent_of(whole: u16, percent: u16) -> u16 {
    ((whole as u32 * percent as u32) / 100).min(u16::MAX as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size {
        width: 100,
        height: 80,
    };

    #[test]
    fn fixed_returns_request_when_it_fits() {
        let resolved = resolve_size(Size::new(40, 20), Sizing::Fixed, CONTAINER, CONTAINER);
        assert_eq!(resolved, Size::new(40, 20));
    }

    #[test]
    fn fixed_never_exceeds_available() {
        let resolved = resolve_size(
            Size::new(500, 500),
            Sizing::Fixed,
            Size::new(30, 10),
            CONTAINER,
        );
        assert_eq!(resolved, Size::new(30, 10));
    }

    #[test]
    fn fill_returns_exactly_the_available_space() {
        let resolved = resolve_size(Size::new(1, 1), Sizing::Fill, Size::new(60, 79), CONTAINER);
        assert_eq!(resolved, Size::new(60, 79));
    }

    #[test]
    fn fill_ignores_request() {
        let a = resolve_size(Size::ZERO, Sizing::Fill, CONTAINER, CONTAINER);
        let b = resolve_size(Size::new(999, 999), Sizing::Fill, CONTAINER, CONTAINER);
        assert_eq!(a, b);
    }

    #[test]
    fn relative_width_is_percent_of_container_width() {
        let preferred = preferred_size(Size::new(40, 20), Sizing::FillHeightRelativeWidth, CONTAINER);
        assert_eq!(preferred, Size::new(40, 80));

        let narrow = Size {
            width: 50,
            height: 80,
        };
        let preferred = preferred_size(Size::new(40, 20), Sizing::FillHeightRelativeWidth, narrow);
        assert_eq!(preferred.width, 20); // 40% of 50
        assert_eq!(preferred.height, 80);
    }

    #[test]
    fn relative_width_clamps_to_remaining_space() {
        let resolved = resolve_size(
            Size::new(60, 30),
            Sizing::FillHeightRelativeWidth,
            Size::new(40, 80),
            CONTAINER,
        );
        assert_eq!(resolved, Size::new(40, 80));
    }

    #[test]
    fn relative_width_over_100_percent_is_honored_in_preference() {
        let preferred = preferred_size(Size::new(150, 1), Sizing::FillHeightRelativeWidth, CONTAINER);
        assert_eq!(preferred.width, 150);
    }

    #[test]
    fn zero_available_space_collapses_the_widget() {
        let resolved = resolve_size(Size::new(40, 20), Sizing::Fixed, Size::ZERO, CONTAINER);
        assert!(resolved.is_empty());
    }
}
