//! Design tokens: spacing, typography, and layout constants.
//!
//! Spacing sits on a 4px grid. The cell quantum itself (96×32) lives in
//! `senden_core::layout`; everything here is interior styling.

// ── Spacing (4px base grid) ──────────────────────────────────────

pub const SPACE_XXS: f32 = 2.0;
pub const SPACE_XS: f32 = 4.0;
pub const SPACE_SM: f32 = 8.0;
pub const SPACE_MD: f32 = 12.0;
pub const SPACE_LG: f32 = 16.0;
pub const SPACE_XL: f32 = 24.0;
pub const SPACE_2XL: f32 = 32.0;

// ── Typography ───────────────────────────────────────────────────

pub const TEXT_SM: f32 = 12.0;
pub const TEXT_LG: f32 = 16.0;
pub const TEXT_XL: f32 = 22.0;

// Line heights (multipliers for `LineHeight::Relative`)
pub const LINE_HEIGHT_TIGHT: f32 = 1.2;
pub const LINE_HEIGHT_NORMAL: f32 = 1.45;
pub const LINE_HEIGHT_LOOSE: f32 = 1.6;

// ── Navigation ───────────────────────────────────────────────────

pub const NAV_ICON_SIZE: f32 = 18.0;
pub const NAV_LABEL_SIZE: f32 = 12.0;

// ── Input components ─────────────────────────────────────────────

pub const INPUT_FONT_SIZE: f32 = TEXT_SM;
pub const INPUT_PADDING: [f32; 2] = [SPACE_SM, SPACE_MD]; // [8, 12]
pub const INPUT_WIDTH: f32 = 200.0;

// ── Drawer ───────────────────────────────────────────────────────

pub const DRAWER_WIDTH: f32 = 240.0;

// ── Border radii ─────────────────────────────────────────────────

pub const RADIUS_SM: f32 = 4.0;
pub const RADIUS_MD: f32 = 8.0;
pub const RADIUS_LG: f32 = 12.0;
pub const RADIUS_FULL: f32 = 9999.0;
