//! Grid cursor: where the next card cell goes.

use super::Rect;
use crate::config::{CardGeometry, POINTS_PER_INCH};
use serde::{Deserialize, Serialize};

/// Insertion point for the next cell: sheet page, column, row.
///
/// Cells fill a column top to bottom, columns left to right, then spill onto
/// a new page. Positions are derived from the indices rather than
/// accumulated, so they never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutCursor {
    pub page: usize,
    pub column: usize,
    pub row: usize,
}

impl LayoutCursor {
    /// Top-left slot of the first page.
    pub fn start() -> Self {
        Self::default()
    }

    /// Card-sized frame at this slot, in points with a bottom-left origin.
    pub fn frame(&self, geometry: &CardGeometry) -> Rect {
        let g = Points::from(geometry);
        Rect {
            x: g.column_x(self.column),
            y: g.row_y(self.row),
            width: g.card_width,
            height: g.card_height,
        }
    }

    /// The slot after this one.
    ///
    /// Moves one card down; if that card would dip below the bottom margin,
    /// moves to the top of the next column; if that column would cross the
    /// right margin, moves to the top-left of the next page.
    pub fn advance(self, geometry: &CardGeometry) -> Self {
        let g = Points::from(geometry);
        if g.row_y(self.row + 1) >= g.vertical_margin {
            return Self {
                row: self.row + 1,
                ..self
            };
        }
        if g.column_x(self.column + 1) + g.card_width <= g.page_width - g.horizontal_margin {
            return Self {
                column: self.column + 1,
                row: 0,
                ..self
            };
        }
        Self {
            page: self.page + 1,
            column: 0,
            row: 0,
        }
    }
}

/// How many (columns, rows) of cards fit on one sheet page.
pub fn grid_capacity(geometry: &CardGeometry) -> (usize, usize) {
    let mut cursor = LayoutCursor::start();
    let (mut columns, mut rows) = (1, 1);
    loop {
        let next = cursor.advance(geometry);
        if next.page != cursor.page {
            return (columns, rows);
        }
        columns = columns.max(next.column + 1);
        rows = rows.max(next.row + 1);
        cursor = next;
    }
}

/// Geometry converted to points once per call.
struct Points {
    page_width: f32,
    page_height: f32,
    card_width: f32,
    card_height: f32,
    vertical_margin: f32,
    horizontal_margin: f32,
    column_step: f32,
    row_step: f32,
}

impl From<&CardGeometry> for Points {
    fn from(g: &CardGeometry) -> Self {
        let pt = |inches: f32| inches * POINTS_PER_INCH;
        Self {
            page_width: pt(g.page_width),
            page_height: pt(g.page_height),
            card_width: pt(g.card_width),
            card_height: pt(g.card_height),
            vertical_margin: pt(g.vertical_margin),
            horizontal_margin: pt(g.horizontal_margin),
            column_step: pt(g.card_width + g.horizontal_spacing),
            row_step: pt(g.card_height + g.vertical_spacing),
        }
    }
}

impl Points {
    fn column_x(&self, column: usize) -> f32 {
        self.horizontal_margin + column as f32 * self.column_step
    }

    /// Bottom edge of a card in `row`.
    fn row_y(&self, row: usize) -> f32 {
        self.page_height - self.vertical_margin - self.card_height - row as f32 * self.row_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn first_frame_sits_at_top_left_margin() {
        let frame = LayoutCursor::start().frame(&CardGeometry::default());
        assert!(close(frame.x, 21.6));
        assert!(close(frame.y, 504.0));
        assert!(close(frame.width, 180.0));
        assert!(close(frame.height, 252.0));
    }

    #[test]
    fn advance_walks_down_then_across_then_over() {
        let g = CardGeometry::default();
        let c0 = LayoutCursor::start();
        let c1 = c0.advance(&g);
        assert_eq!(c1, LayoutCursor { page: 0, column: 0, row: 1 });
        let c2 = c1.advance(&g);
        assert_eq!(c2, LayoutCursor { page: 0, column: 1, row: 0 });
        let c5 = c2.advance(&g).advance(&g).advance(&g);
        assert_eq!(c5, LayoutCursor { page: 0, column: 2, row: 1 });
        assert_eq!(c5.advance(&g), LayoutCursor { page: 1, column: 0, row: 0 });
    }

    #[test]
    fn letter_sheet_holds_three_by_two() {
        assert_eq!(grid_capacity(&CardGeometry::default()), (3, 2));
    }

    #[test]
    fn frames_stay_inside_margins() {
        let g = CardGeometry::default();
        let mut cursor = LayoutCursor::start();
        for _ in 0..30 {
            let f = cursor.frame(&g);
            assert!(f.x >= 21.6 - 1e-3);
            assert!(f.right() <= 612.0 - 21.6 + 1e-3);
            assert!(f.y >= 36.0 - 1e-3);
            assert!(f.top() <= 792.0 - 36.0 + 1e-3);
            cursor = cursor.advance(&g);
        }
    }

    #[test]
    fn tabloid_sheet_fits_more_cards() {
        let g = CardGeometry {
            page_width: 11.0,
            page_height: 17.0,
            ..CardGeometry::default()
        };
        // width: 0.3 + 4 * 2.6 - 0.1 = 10.6 <= 10.7; height: 4 rows of 3.6 - 0.1 = 14.3 <= 16
        assert_eq!(grid_capacity(&g), (4, 4));
    }
}
