//! Shared numeric constants for the media element core.

// ── Geometry ────────────────────────────────────────────────────

/// Minimum width/height in surface units for any resized dimension.
pub const MIN_DIM: f64 = 20.0;

/// The same floor as stored in attributes (whole units).
pub const MIN_DIM_UNITS: u32 = 20;

// ── Menu placement ──────────────────────────────────────────────

/// Vertical offset in surface units between the element edge and the
/// alignment menu when placed above or below.
pub const MENU_OFFSET: f64 = 32.0;
