//! Flow packer - inline-block style wrapping placement.
//!
//! Floating widgets are laid out left to right until they exceed the
//! container width, then wrap to the next line. The packer is a single
//! forward pass: once a slot is assigned it is never revisited, so the same
//! sequence of requests always produces the same rectangles.

use crate::geometry::{Rect, Size};

use super::sizing::{preferred_size, resolve_size, Sizing};

/// Assigns slots to floating widgets within a fixed container extent.
///
/// One packer instance must be shared across all floating children of a
/// container so the cursor carries from one placement to the next. The
/// packer never fails: widgets that land at or past the container's bottom
/// edge collapse or clip at paint time instead.
#[derive(Debug)]
pub struct FlowPacker {
    /// Container extent the flow runs inside.
    container: Size,
    /// Cursor column on the current line.
    line_x: u16,
    /// Top row of the current line.
    line_y: u16,
    /// Height of the tallest widget on the current line.
    line_height: u16,
}

impl FlowPacker {
    /// Start a flow pass at the container's top-left.
    pub fn new(container: Size) -> Self {
        Self {
            container,
            line_x: 0,
            line_y: 0,
            line_height: 0,
        }
    }

    /// Place the next floating widget and return its slot.
    ///
    /// The wrap decision uses the widget's *preferred* width (measured
    /// against the whole container); the final size is then clamped to the
    /// space remaining in the slot. A widget that does not fit even on an
    /// empty line is placed at the line start and clipped.
    pub fn place(&mut self, requested: Size, sizing: Sizing) -> Rect {
        // Fill takes whatever remains on the line, so it never forces a wrap.
        let preferred_width = match sizing {
            Sizing::Fill => 0,
            _ => preferred_size(requested, sizing, self.container).width,
        };

        // Wrap only when the line already holds something; a lone oversized
        // widget stays put rather than wrapping forever.
        if self.line_x > 0 && self.line_x.saturating_add(preferred_width) > self.container.width {
            self.line_y = self.line_y.saturating_add(self.line_height);
            self.line_x = 0;
            self.line_height = 0;
        }

        let avail = Size::new(
            self.container.width.saturating_sub(self.line_x),
            self.container.height.saturating_sub(self.line_y),
        );
        let size = resolve_size(requested, sizing, avail, self.container);

        let slot = Rect::new(self.line_x, self.line_y, size.width, size.height);

        self.line_x = self.line_x.saturating_add(size.width);
        self.line_height = self.line_height.max(size.height);

        slot
    }
}
