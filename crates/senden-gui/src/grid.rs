//! Places widgets into the cell grid computed by `senden_core::layout`.
//!
//! The engine hands over regions in cell coordinates; this module converts
//! them to pixel offsets and stacks the active regions over a ruled
//! backdrop of the cells nothing claimed.

use iced::widget::{column, container, row, Space};
use iced::{Element, Length};

use senden_core::layout::{GridLayout, Region, CELL_HEIGHT, CELL_WIDTH};

use crate::theme::{self, ColorScheme};

/// Pixel bounds of a region: (x, y, width, height).
pub fn region_bounds(region: Region) -> (f32, f32, f32, f32) {
    (
        region.start_col as f32 * CELL_WIDTH,
        region.start_row as f32 * CELL_HEIGHT,
        region.cols() as f32 * CELL_WIDTH,
        region.rows() as f32 * CELL_HEIGHT,
    )
}

/// Pin `content` over the cells of `region`.
///
/// The outer container fills the window so the offset padding positions the
/// inner, fixed-size box; stacking several of these keeps every region
/// anchored to the same origin.
pub fn place<'a, Message: 'a>(
    region: Region,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let (x, y, w, h) = region_bounds(region);
    container(
        container(content)
            .width(Length::Fixed(w))
            .height(Length::Fixed(h)),
    )
    .padding(iced::Padding::new(0.0).top(y).left(x))
    .into()
}

/// The backdrop: one fixed-size box per grid cell, with a hairline rule on
/// every cell no active region covers.
pub fn background<'a, Message: 'a>(
    layout: &GridLayout,
    cs: &ColorScheme,
) -> Element<'a, Message> {
    let mut grid = column![];
    for r in 0..layout.grid.rows {
        let mut cells = row![];
        for c in 0..layout.grid.columns {
            cells = cells.push(
                container(Space::new())
                    .width(Length::Fixed(CELL_WIDTH))
                    .height(Length::Fixed(CELL_HEIGHT))
                    .style(theme::grid_cell(cs, layout.is_inert(r, c))),
            );
        }
        grid = grid.push(cells);
    }
    grid.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_bounds_scale_by_cell_quantum() {
        let (x, y, w, h) = region_bounds(Region::new(2, 13, 1, 5));
        assert_eq!(x, 96.0);
        assert_eq!(y, 64.0);
        assert_eq!(w, 4.0 * 96.0);
        assert_eq!(h, 11.0 * 32.0);
    }

    #[test]
    fn test_single_cell_bounds() {
        let (x, y, w, h) = region_bounds(Region::cell(14, 2));
        assert_eq!((x, y), (192.0, 448.0));
        assert_eq!((w, h), (96.0, 32.0));
    }
}
