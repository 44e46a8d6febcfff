//! Pure resize geometry: directional handles, signed deltas, aspect locking.
//!
//! Everything here is deterministic and side-effect-free. The element
//! controller feeds pointer deltas through [`resize`] on every move; the
//! preset-size menu buttons go through [`preset_size`]. Neither function
//! touches any state, which keeps the whole resize feel testable as plain
//! arithmetic.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::MIN_DIM;

/// A point on the interaction surface, in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rendered size in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Round to whole units, as committed attribute values.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded(self) -> (u32, u32) {
        (self.width.round().max(0.0) as u32, self.height.round().max(0.0) as u32)
    }
}

/// Which of the eight resize handles is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleDirection {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl HandleDirection {
    /// All eight handle directions, clockwise from north.
    pub const ALL: [Self; 8] =
        [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// Horizontal sign of the drag: `+1` east, `-1` west, `0` otherwise.
    #[must_use]
    pub fn sign_x(self) -> f64 {
        match self {
            Self::E | Self::Ne | Self::Se => 1.0,
            Self::W | Self::Nw | Self::Sw => -1.0,
            Self::N | Self::S => 0.0,
        }
    }

    /// Vertical sign of the drag: `+1` south, `-1` north, `0` otherwise.
    #[must_use]
    pub fn sign_y(self) -> f64 {
        match self {
            Self::S | Self::Se | Self::Sw => 1.0,
            Self::N | Self::Ne | Self::Nw => -1.0,
            Self::E | Self::W => 0.0,
        }
    }

    /// Pure-horizontal handle (east or west edge midpoint).
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::E | Self::W)
    }

    /// Pure-vertical handle (north or south edge midpoint).
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::N | Self::S)
    }

    /// Corner handle (both axes driven).
    #[must_use]
    pub fn is_corner(self) -> bool {
        !self.is_horizontal() && !self.is_vertical()
    }

    /// CSS cursor hint for a host rendering this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }
}

/// An aspect ratio usable for locking: finite and strictly positive.
fn usable_aspect(aspect: Option<f64>) -> Option<f64> {
    aspect.filter(|a| a.is_finite() && *a > 0.0)
}

/// Compute the resized dimensions for a drag of `(dx, dy)` from `start`.
///
/// Each axis the handle drives is offset by the signed delta and floored at
/// [`MIN_DIM`]; an undriven axis keeps its start value. With `keep_aspect`
/// and a usable `aspect` (width / height), the locked axis is derived:
/// horizontal handles and corners are width-driven (`h = round(w / aspect)`),
/// vertical handles are height-driven (`w = round(h * aspect)`). Both
/// dimensions are floored again after locking so the result is always a
/// committable size.
#[must_use]
pub fn resize(
    direction: HandleDirection,
    start: Size,
    dx: f64,
    dy: f64,
    aspect: Option<f64>,
    keep_aspect: bool,
) -> Size {
    let mut width = start.width;
    let mut height = start.height;

    let sign_x = direction.sign_x();
    let sign_y = direction.sign_y();
    if sign_x != 0.0 {
        width = (start.width + dx * sign_x).max(MIN_DIM);
    }
    if sign_y != 0.0 {
        height = (start.height + dy * sign_y).max(MIN_DIM);
    }

    if keep_aspect {
        if let Some(aspect) = usable_aspect(aspect) {
            if direction.is_vertical() {
                width = (height * aspect).round();
            } else {
                height = (width / aspect).round();
            }
            width = width.max(MIN_DIM);
            height = height.max(MIN_DIM);
        }
    }

    Size::new(width, height)
}

/// Target size for a preset fraction of the asset's natural width.
///
/// `basis` is the intrinsic width when the asset has reported one, else the
/// current rendered width. The height follows the aspect when known and
/// otherwise keeps the current rendered height.
#[must_use]
pub fn preset_size(
    natural_width: Option<f64>,
    current: Size,
    aspect: Option<f64>,
    fraction: f64,
) -> Size {
    let basis = natural_width.unwrap_or(current.width);
    let width = (basis * fraction).round().max(MIN_DIM);
    let height = match usable_aspect(aspect) {
        Some(aspect) => (width / aspect).round().max(MIN_DIM),
        None => current.height.round().max(MIN_DIM),
    };
    Size::new(width, height)
}
