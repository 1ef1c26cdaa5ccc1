//! Responsive grid layout engine.
//!
//! The window is quantized into fixed 96×32 cells. From one viewport
//! snapshot we derive a [`GridSize`], pick a [`LayoutMode`], and carve the
//! grid into the three active regions (sidebar, content, dark-mode toggle).
//! Everything here is pure; the renderer decides what to draw into each
//! region.

/// Width of one grid cell in logical pixels.
pub const CELL_WIDTH: f32 = 96.0;
/// Height of one grid cell in logical pixels.
pub const CELL_HEIGHT: f32 = 32.0;
/// Below this viewport width the layout collapses to the mobile variant.
pub const MOBILE_BREAKPOINT: f32 = 640.0;
/// At this column count or fewer the layout collapses to the compact variant.
pub const COMPACT_MAX_COLUMNS: u32 = 4;

/// Upper bound on the content pane's end column in desktop mode.
const DESKTOP_CONTENT_MAX_COL: u32 = 12;

/// A viewport measurement in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Grid dimensions derived from a single [`Viewport`] snapshot.
///
/// All four fields come from the same measurement; the struct is only ever
/// built whole, never patched field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub columns: u32,
    pub rows: u32,
    pub mobile_width: bool,
    pub compact_columns: bool,
}

impl GridSize {
    /// Quantize a viewport into whole cells.
    pub fn from_viewport(viewport: Viewport) -> Self {
        let columns = (viewport.width / CELL_WIDTH).floor() as u32;
        let rows = (viewport.height / CELL_HEIGHT).floor() as u32;
        Self {
            columns,
            rows,
            mobile_width: viewport.width < MOBILE_BREAKPOINT,
            compact_columns: columns <= COMPACT_MAX_COLUMNS,
        }
    }

    /// True once both axes have at least one full cell.
    pub fn is_measured(&self) -> bool {
        self.columns > 0 && self.rows > 0
    }
}

/// A half-open rectangle of grid cells: rows `[start_row, end_row)`,
/// columns `[start_col, end_col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start_row: u32,
    pub end_row: u32,
    pub start_col: u32,
    pub end_col: u32,
}

impl Region {
    pub fn new(start_row: u32, end_row: u32, start_col: u32, end_col: u32) -> Self {
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }

    /// A single cell at (row, col).
    pub fn cell(row: u32, col: u32) -> Self {
        Self::new(row, row + 1, col, col + 1)
    }

    /// Degenerate regions carry no cells and are skipped by the renderer.
    pub fn is_empty(&self) -> bool {
        self.end_row <= self.start_row || self.end_col <= self.start_col
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.start_row && row < self.end_row && col >= self.start_col && col < self.end_col
    }

    pub fn overlaps(&self, other: &Region) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.start_row < other.end_row
            && other.start_row < self.end_row
            && self.start_col < other.end_col
            && other.start_col < self.end_col
    }

    pub fn rows(&self) -> u32 {
        self.end_row.saturating_sub(self.start_row)
    }

    pub fn cols(&self) -> u32 {
        self.end_col.saturating_sub(self.start_col)
    }
}

/// Which responsive variant is active.
///
/// Selected solely from [`GridSize`]; dispatched once per recomputation so
/// the engine and the renderer never duplicate the branch conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Mobile,
    Desktop,
}

impl LayoutMode {
    /// Pick the variant for a grid. Priority: compact column count beats the
    /// mobile width check.
    pub fn select(grid: GridSize) -> Self {
        if grid.compact_columns {
            LayoutMode::Compact
        } else if grid.mobile_width {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

/// The computed partition of the grid for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub mode: LayoutMode,
    pub sidebar: Region,
    pub content: Region,
    pub dark_toggle: Region,
    pub grid: GridSize,
}

impl GridLayout {
    /// Partition the grid, or `None` while the viewport has no full cell in
    /// either axis (not yet measured — callers render nothing).
    pub fn compute(grid: GridSize) -> Option<Self> {
        if !grid.is_measured() {
            return None;
        }

        let GridSize { columns, rows, .. } = grid;
        let mode = LayoutMode::select(grid);
        let content_rows = (2, rows.saturating_sub(2));

        // NOTE: the compact sidebar sits on the last row while mobile spans
        // it; the row arithmetic is intentionally not unified across modes.
        let (sidebar, content) = match mode {
            LayoutMode::Compact => (
                Region::cell(rows - 1, 0),
                Region::new(content_rows.0, content_rows.1, 0, columns),
            ),
            LayoutMode::Mobile => (
                Region::new(rows - 1, rows, 0, columns - 1),
                Region::new(content_rows.0, content_rows.1, 1, columns - 1),
            ),
            LayoutMode::Desktop => (
                Region::new(3, 7, 0, 1),
                Region::new(
                    content_rows.0,
                    content_rows.1,
                    2,
                    (columns - 2).min(DESKTOP_CONTENT_MAX_COL),
                ),
            ),
        };

        Some(Self {
            mode,
            sidebar,
            content,
            dark_toggle: Region::cell(rows - 1, columns - 1),
            grid,
        })
    }

    /// Convenience: derive the grid and partition it in one step.
    pub fn from_viewport(viewport: Viewport) -> Option<Self> {
        Self::compute(GridSize::from_viewport(viewport))
    }

    /// True when the cell at (row, col) belongs to no active region.
    pub fn is_inert(&self, row: u32, col: u32) -> bool {
        !self.sidebar.contains(row, col)
            && !self.content.contains(row, col)
            && !self.dark_toggle.contains(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: f32, height: f32) -> GridLayout {
        GridLayout::from_viewport(Viewport::new(width, height))
            .expect("viewport should be measurable")
    }

    #[test]
    fn test_grid_derivation() {
        let grid = GridSize::from_viewport(Viewport::new(300.0, 500.0));
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.rows, 15);
        assert!(grid.mobile_width);
        assert!(grid.compact_columns);

        let grid = GridSize::from_viewport(Viewport::new(700.0, 800.0));
        assert_eq!(grid.columns, 7);
        assert_eq!(grid.rows, 25);
        assert!(!grid.mobile_width);
        assert!(!grid.compact_columns);
    }

    #[test]
    fn test_not_ready_until_measured() {
        assert!(GridLayout::from_viewport(Viewport::new(0.0, 500.0)).is_none());
        assert!(GridLayout::from_viewport(Viewport::new(500.0, 0.0)).is_none());
        // Sub-cell viewports round down to zero and are equally unready.
        assert!(GridLayout::from_viewport(Viewport::new(95.0, 31.0)).is_none());
    }

    #[test]
    fn test_compact_wins_over_mobile() {
        // 4 columns at a width under the breakpoint: compact, not mobile.
        assert_eq!(layout(400.0, 500.0).mode, LayoutMode::Compact);
        // 4 columns can also happen above the breakpoint only in theory, but
        // the column bound alone must decide.
        let grid = GridSize {
            columns: 4,
            rows: 10,
            mobile_width: false,
            compact_columns: true,
        };
        assert_eq!(LayoutMode::select(grid), LayoutMode::Compact);
    }

    #[test]
    fn test_mobile_between_compact_and_breakpoint() {
        // 5 columns (480..576px) is still under 640: mobile.
        let l = layout(500.0, 500.0);
        assert_eq!(l.mode, LayoutMode::Mobile);
        assert_eq!(l.grid.columns, 5);
    }

    #[test]
    fn test_compact_scenario_300x500() {
        let l = layout(300.0, 500.0);
        assert_eq!(l.mode, LayoutMode::Compact);
        assert_eq!(l.sidebar, Region::cell(14, 0));
        assert_eq!(l.content, Region::new(2, 13, 0, 3));
        assert_eq!(l.dark_toggle, Region::cell(14, 2));
    }

    #[test]
    fn test_desktop_scenario_700x800() {
        let l = layout(700.0, 800.0);
        assert_eq!(l.mode, LayoutMode::Desktop);
        assert_eq!(l.sidebar, Region::new(3, 7, 0, 1));
        assert_eq!(l.content, Region::new(2, 23, 2, 5));
        assert_eq!(l.dark_toggle, Region::cell(24, 6));
    }

    #[test]
    fn test_mobile_regions() {
        let l = layout(580.0, 640.0);
        assert_eq!(l.mode, LayoutMode::Mobile);
        assert_eq!(l.grid.columns, 6);
        assert_eq!(l.grid.rows, 20);
        assert_eq!(l.sidebar, Region::new(19, 20, 0, 5));
        assert_eq!(l.content, Region::new(2, 18, 1, 5));
        assert_eq!(l.dark_toggle, Region::cell(19, 5));
    }

    #[test]
    fn test_desktop_content_col_cap() {
        // 1600px → 16 columns; content end column caps at 12.
        let l = layout(1600.0, 800.0);
        assert_eq!(l.mode, LayoutMode::Desktop);
        assert_eq!(l.content.end_col, 12);
    }

    #[test]
    fn test_sidebar_content_never_overlap() {
        for w in (1..=30).map(|i| i as f32 * 64.0) {
            for h in (1..=30).map(|i| i as f32 * 48.0) {
                if let Some(l) = GridLayout::from_viewport(Viewport::new(w, h)) {
                    assert!(
                        !l.sidebar.overlaps(&l.content),
                        "overlap at {w}x{h}: {:?}",
                        l
                    );
                }
            }
        }
    }

    #[test]
    fn test_short_viewport_has_empty_content() {
        // 3 rows: the content band [2, rows-2) collapses to nothing, but the
        // partition still exists.
        let l = layout(700.0, 100.0);
        assert!(l.content.is_empty());
        assert!(!l.sidebar.is_empty());
    }

    #[test]
    fn test_inert_cells() {
        let l = layout(300.0, 500.0);
        // Row 0 is above every region in compact mode.
        assert!(l.is_inert(0, 0));
        assert!(!l.is_inert(14, 0)); // sidebar
        assert!(!l.is_inert(14, 2)); // dark toggle
        assert!(!l.is_inert(2, 1)); // content
        assert!(l.is_inert(14, 1)); // gap between sidebar and toggle
    }
}
