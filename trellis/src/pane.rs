//! Pane - the container widget.
//!
//! A pane owns an ordered sequence of child widgets and resolves their
//! rectangles every frame. Anchored children are placed directly from their
//! alignment; floating children are fed, in insertion order, through one
//! shared [`FlowPacker`] pass so the flow cursor carries across all of them.
//! Anchored children do not perturb the cursor.
//!
//! A pane is itself a widget, so panes nest into a tree.

use crate::geometry::{Rect, Size};
use crate::layout::{anchored_offset, hug_offset, resolve_size, FlowPacker};
use crate::surface::Region;
use crate::widget::{BoxedWidget, Placement, Widget};

/// A container widget with flow-packed and anchored children.
pub struct Pane {
    placement: Placement,
    title: Option<String>,
    border: bool,
    children: Vec<BoxedWidget>,
}

impl Pane {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            title: None,
            border: false,
            children: Vec::new(),
        }
    }

    /// Draw a one-cell border; children lay out inside it.
    pub fn with_border(mut self) -> Self {
        self.border = true;
        self
    }

    /// Title text shown on the top border edge.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Append a child. Insertion order fixes both packing and paint order.
    pub fn add_widget(&mut self, widget: impl Widget + 'static) {
        self.children.push(Box::new(widget));
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The extent children lay out in, given the pane's own extent.
    fn interior(&self, size: Size) -> Rect {
        if self.border && size.width > 2 && size.height > 2 {
            Rect::new(1, 1, size.width - 2, size.height - 2)
        } else {
            Rect::from_origin_size(crate::geometry::Point::ORIGIN, size)
        }
    }

    /// Resolve every child's rectangle for a pane of extent `container`.
    ///
    /// One forward pass in insertion order; rectangles are relative to the
    /// pane's interior origin. Recomputed on every call - geometry is never
    /// cached across mutations.
    pub fn resolve_layout(&self, container: Size) -> Vec<Rect> {
        let interior = self.interior(container);
        let mut packer = FlowPacker::new(interior.size());

        self.children
            .iter()
            .map(|child| {
                let hints = child.placement();
                let local = if hints.alignment.is_floating() {
                    let slot = packer.place(hints.size, hints.sizing);
                    let origin = hug_offset(hints.alignment, slot, slot.size());
                    Rect::from_origin_size(origin, slot.size())
                } else {
                    let size =
                        resolve_size(hints.size, hints.sizing, interior.size(), interior.size());
                    let origin =
                        anchored_offset(hints.alignment, hints.position, size, interior.size());
                    Rect::from_origin_size(origin, size)
                };
                local.translate(interior.origin())
            })
            .collect()
    }
}

impl Widget for Pane {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn paint(&self, region: &mut Region<'_>) {
        let size = region.size();
        if size.is_empty() {
            return;
        }

        if self.border {
            paint_border(region, size, self.title.as_deref());
        }

        // Same order as layout: later children overwrite earlier ones.
        let rects = self.resolve_layout(size);
        for (child, rect) in self.children.iter().zip(rects) {
            child.paint(&mut region.region(rect));
        }
    }
}

fn paint_border(region: &mut Region<'_>, size: Size, title: Option<&str>) {
    let right = size.width - 1;
    let bottom = size.height - 1;

    for x in 0..size.width {
        region.put(x, 0, '-');
        region.put(x, bottom, '-');
    }
    for y in 0..size.height {
        region.put(0, y, '|');
        region.put(right, y, '|');
    }
    region.put(0, 0, '+');
    region.put(right, 0, '+');
    region.put(0, bottom, '+');
    region.put(right, bottom, '+');

    if let Some(title) = title {
        if size.width > 4 {
            let label = format!(" {title} ");
            region.put_str(2, 0, &label);
        }
    }
}
