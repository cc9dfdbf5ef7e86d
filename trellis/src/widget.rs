//! Widget system.
//!
//! A widget carries declarative placement hints ([`Placement`]) and knows how
//! to paint its content into the rectangle its parent resolved for it. It
//! never computes its own position: geometry belongs to the container.
//!
//! Insertion order in a container is load-bearing twice over: it is the
//! packing order for floating widgets and the paint (z-) order, with
//! later-added widgets painting over earlier ones where they overlap.

use unicode_width::UnicodeWidthChar;

use crate::geometry::{Point, Size};
use crate::layout::{Alignment, Sizing};
use crate::surface::Region;

/// Declarative placement hints a widget hands its container.
///
/// Immutable for the widget's lifetime; a widget wanting different geometry
/// is rebuilt by its owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placement {
    /// Requested origin. An inset from the anchor corner for anchored
    /// widgets; advisory only for floating ones.
    pub position: Point,
    /// Requested extent, interpreted through `sizing`.
    pub size: Size,
    pub alignment: Alignment,
    pub sizing: Sizing,
}

impl Placement {
    /// Placement requesting `size` at the container's top-left.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the requested origin.
    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Set the alignment anchor.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the sizing policy.
    pub fn sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }
}

/// A paintable element of the widget tree.
pub trait Widget {
    /// The placement hints the container resolves against.
    fn placement(&self) -> Placement;

    /// Paint content into the resolved rectangle. The region is already
    /// clipped; writes outside it are dropped, never an error.
    fn paint(&self, region: &mut Region<'_>);
}

/// A boxed widget for dynamic dispatch in container children lists.
pub type BoxedWidget = Box<dyn Widget>;

/// A leaf widget displaying text, wrapped to its resolved width.
pub struct TextBox {
    placement: Placement,
    text: String,
}

impl TextBox {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            text: String::new(),
        }
    }

    /// Build with initial text.
    pub fn with_text(placement: Placement, text: impl Into<String>) -> Self {
        Self {
            placement,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text. Content mutation is the one mutable part
    /// of a widget's lifecycle; geometry hints stay fixed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for TextBox {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn paint(&self, region: &mut Region<'_>) {
        let size = region.size();
        if size.is_empty() {
            return;
        }

        // Greedy wrap: fill each row up to the region width, measured in
        // display columns (the same basis the region paints with), then
        // continue on the next. Lines beyond the region height clip.
        let mut row = 0u16;
        for line in self.text.lines() {
            let mut chunk = String::new();
            let mut cols = 0u16;
            let mut painted = false;

            for ch in line.chars() {
                let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
                if cols > 0 && cols.saturating_add(w) > size.width {
                    if row >= size.height {
                        return;
                    }
                    region.put_str(0, row, &chunk);
                    row += 1;
                    painted = true;
                    chunk.clear();
                    cols = 0;
                }
                chunk.push(ch);
                cols += w;
            }

            // Flush the tail; an empty source line still takes a row, but a
            // line that ended exactly at the region width does not add a
            // blank one.
            if !chunk.is_empty() || !painted {
                if row >= size.height {
                    return;
                }
                region.put_str(0, row, &chunk);
                row += 1;
            }
        }
    }
}
