//! Region layout shared by rendering and mouse hit-testing

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::core::Slot;

/// Width of a glyph cell (`+` or `=`)
const GLYPH_WIDTH: u16 = 5;

/// Height of a value box
const BOX_HEIGHT: u16 = 3;

/// The five horizontal regions of the equation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquationLayout {
    /// Left counter box
    pub left: Rect,
    /// `+` glyph
    pub plus: Rect,
    /// Middle counter box
    pub middle: Rect,
    /// `=` glyph
    pub equals: Rect,
    /// Total box
    pub total: Rect,
}

impl EquationLayout {
    /// Splits `area` into the equation row, vertically centred
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(BOX_HEIGHT),
                Constraint::Fill(1),
            ])
            .split(area);

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(GLYPH_WIDTH),
                Constraint::Fill(1),
                Constraint::Length(GLYPH_WIDTH),
                Constraint::Fill(1),
            ])
            .split(rows[1]);

        Self {
            left: cells[0],
            plus: cells[1],
            middle: cells[2],
            equals: cells[3],
            total: cells[4],
        }
    }

    /// Returns the box for a counter slot
    #[must_use]
    pub const fn slot_area(&self, slot: Slot) -> Rect {
        match slot {
            Slot::Left => self.left,
            Slot::Middle => self.middle,
        }
    }

    /// Returns the counter under a terminal cell, if any
    ///
    /// Glyphs and the total box are not clickable.
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Slot> {
        let pos = Position::new(column, row);
        Slot::ALL
            .into_iter()
            .find(|slot| self.slot_area(*slot).contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> EquationLayout {
        EquationLayout::compute(Rect::new(0, 0, 60, 9))
    }

    #[test]
    fn test_regions_are_ordered_left_to_right() {
        let l = layout();
        assert!(l.left.x < l.plus.x);
        assert!(l.plus.x < l.middle.x);
        assert!(l.middle.x < l.equals.x);
        assert!(l.equals.x < l.total.x);
    }

    #[test]
    fn test_glyph_width_is_fixed() {
        let l = layout();
        assert_eq!(l.plus.width, GLYPH_WIDTH);
        assert_eq!(l.equals.width, GLYPH_WIDTH);
    }

    #[test]
    fn test_row_is_vertically_centred() {
        let l = layout();
        assert_eq!(l.left.height, BOX_HEIGHT);
        assert_eq!(l.left.y, 3);
    }

    #[test]
    fn test_hit_test_counters() {
        let l = layout();
        assert_eq!(l.hit_test(l.left.x + 1, l.left.y + 1), Some(Slot::Left));
        assert_eq!(
            l.hit_test(l.middle.x + 1, l.middle.y + 1),
            Some(Slot::Middle)
        );
    }

    #[test]
    fn test_hit_test_non_clickable() {
        let l = layout();
        assert_eq!(l.hit_test(l.plus.x + 1, l.plus.y + 1), None);
        assert_eq!(l.hit_test(l.total.x + 1, l.total.y + 1), None);
        assert_eq!(l.hit_test(0, 0), None);
    }

    #[test]
    fn test_slot_area() {
        let l = layout();
        assert_eq!(l.slot_area(Slot::Left), l.left);
        assert_eq!(l.slot_area(Slot::Middle), l.middle);
    }
}
