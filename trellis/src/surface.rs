//! Character-cell paint surface.
//!
//! A [`Surface`] is the fixed-size buffer one frame is composited into
//! before the shell flushes it to the terminal. Widgets never touch the
//! surface directly; they paint through a [`Region`], a clipped window onto
//! the surface, so content can never escape the rectangle the container
//! resolved for it. Writes outside a region are silently dropped - that is
//! the "clipped on paint" half of the error model (the other half being
//! clamped sizes).

use unicode_width::UnicodeWidthChar;

use crate::geometry::{Rect, Size};

/// Sentinel stored in the trailing cell of a double-width character.
/// Skipped when a row is assembled for flushing.
const CONTINUATION: char = '\0';

/// A fixed-size grid of character cells.
#[derive(Debug, Clone)]
pub struct Surface {
    size: Size,
    cells: Vec<char>,
}

impl Surface {
    /// Create a surface filled with spaces.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: vec![' '; size.width as usize * size.height as usize],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Reset every cell to a space.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Write one cell. Out-of-bounds writes are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char) {
        if x < self.size.width && y < self.size.height {
            self.cells[y as usize * self.size.width as usize + x as usize] = ch;
        }
    }

    /// Read one cell. Out-of-bounds reads come back as a space.
    pub fn get(&self, x: u16, y: u16) -> char {
        if x < self.size.width && y < self.size.height {
            self.cells[y as usize * self.size.width as usize + x as usize]
        } else {
            ' '
        }
    }

    /// Assemble one row as a printable string.
    pub fn row(&self, y: u16) -> String {
        let mut out = String::with_capacity(self.size.width as usize);
        for x in 0..self.size.width {
            let ch = self.get(x, y);
            if ch != CONTINUATION {
                out.push(ch);
            }
        }
        out
    }

    /// All rows, top to bottom. Used by the shell's flush and by tests.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.size.height).map(|y| self.row(y))
    }

    /// A clipped paint window over `bounds` (intersected with the surface).
    pub fn region(&mut self, bounds: Rect) -> Region<'_> {
        let full = Rect::from_origin_size(crate::geometry::Point::ORIGIN, self.size);
        let bounds = full.intersection(&bounds).unwrap_or(Rect::ZERO);
        Region {
            surface: self,
            bounds,
        }
    }
}

/// A clipped window onto a [`Surface`].
///
/// Coordinates passed to a region are local to its top-left corner; anything
/// falling outside the region's bounds is discarded.
pub struct Region<'a> {
    surface: &'a mut Surface,
    bounds: Rect,
}

impl Region<'_> {
    /// The paintable extent of this region.
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// Write one cell at region-local coordinates.
    pub fn put(&mut self, x: u16, y: u16, ch: char) {
        if x < self.bounds.width && y < self.bounds.height {
            self.surface.put(self.bounds.x + x, self.bounds.y + y, ch);
        }
    }

    /// Fill the whole region with one character.
    pub fn fill(&mut self, ch: char) {
        for y in 0..self.bounds.height {
            for x in 0..self.bounds.width {
                self.put(x, y, ch);
            }
        }
    }

    /// Write a string on one row, truncating at the region's right edge.
    ///
    /// Advances by display width, so double-width characters occupy two
    /// cells and are dropped entirely when only one cell remains.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str) {
        let mut col = x;
        for ch in text.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if col.saturating_add(w) > self.bounds.width {
                break;
            }
            self.put(col, y, ch);
            if w == 2 {
                self.put(col + 1, y, CONTINUATION);
            }
            col += w;
        }
    }

    /// A nested region: `bounds` is local to this region and clipped by it.
    pub fn region(&mut self, bounds: Rect) -> Region<'_> {
        let local = Rect::new(0, 0, self.bounds.width, self.bounds.height);
        let clipped = local.intersection(&bounds).unwrap_or(Rect::ZERO);
        Region {
            bounds: clipped.translate(self.bounds.origin()),
            surface: &mut *self.surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn new_surface_is_blank() {
        let surface = Surface::new(Size::new(4, 2));
        assert_eq!(surface.row(0), "    ");
        assert_eq!(surface.row(1), "    ");
    }

    #[test]
    fn put_and_get_round_trip() {
        let mut surface = Surface::new(Size::new(4, 2));
        surface.put(2, 1, 'x');
        assert_eq!(surface.get(2, 1), 'x');
        assert_eq!(surface.row(1), "  x ");
    }

    #[test]
    fn out_of_bounds_put_is_dropped() {
        let mut surface = Surface::new(Size::new(4, 2));
        surface.put(4, 0, 'x');
        surface.put(0, 2, 'x');
        assert_eq!(surface.row(0), "    ");
        assert_eq!(surface.row(1), "    ");
    }

    #[test]
    fn region_clips_to_its_bounds() {
        let mut surface = Surface::new(Size::new(10, 4));
        let mut region = surface.region(Rect::new(2, 1, 3, 2));
        region.fill('#');
        region.put(3, 0, '!'); // Past the region's width; dropped
        assert_eq!(surface.row(0), "          ");
        assert_eq!(surface.row(1), "  ###     ");
        assert_eq!(surface.row(2), "  ###     ");
        assert_eq!(surface.row(3), "          ");
    }

    #[test]
    fn region_outside_surface_paints_nothing() {
        let mut surface = Surface::new(Size::new(4, 4));
        let mut region = surface.region(Rect::new(10, 10, 3, 3));
        region.fill('#');
        assert!(surface.rows().all(|row| row.trim().is_empty()));
    }

    #[test]
    fn region_partially_off_surface_is_clipped() {
        let mut surface = Surface::new(Size::new(4, 2));
        let mut region = surface.region(Rect::new(2, 0, 5, 5));
        region.fill('#');
        assert_eq!(surface.row(0), "  ##");
        assert_eq!(surface.row(1), "  ##");
    }

    #[test]
    fn put_str_truncates_at_the_right_edge() {
        let mut surface = Surface::new(Size::new(5, 1));
        surface
            .region(Rect::new(0, 0, 5, 1))
            .put_str(0, 0, "hello world");
        assert_eq!(surface.row(0), "hello");
    }

    #[test]
    fn put_str_accounts_for_wide_characters() {
        let mut surface = Surface::new(Size::new(5, 1));
        surface.region(Rect::new(0, 0, 5, 1)).put_str(0, 0, "a\u{4f60}b");
        // '你' is double-width: a + wide + b covers 4 columns.
        assert_eq!(surface.row(0), "a\u{4f60}b ");
    }

    #[test]
    fn nested_region_translates_and_clips() {
        let mut surface = Surface::new(Size::new(8, 4));
        let mut outer = surface.region(Rect::new(1, 1, 6, 2));
        let mut inner = outer.region(Rect::new(2, 0, 10, 1));
        inner.fill('*');
        assert_eq!(surface.row(1), "   **** ");
        assert_eq!(surface.row(2), "        ");
    }

    #[test]
    fn region_of_empty_rect_is_inert() {
        let mut surface = Surface::new(Size::new(4, 4));
        let mut region = surface.region(Rect::from_origin_size(Point::ORIGIN, Size::ZERO));
        region.fill('#');
        assert_eq!(region.size(), Size::ZERO);
    }
}
