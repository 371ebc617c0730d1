//! Direction-mirroring helpers.
//!
//! Every layout value expressed as "leading/trailing" in the design resolves
//! through these functions instead of a hardcoded physical side, so RTL and
//! LTR renders are mirror-correct rather than text-swapped. Centered and
//! non-directional elements are exempt and never call into this module.

use crate::lang::Direction;

/// Physical side of the viewport a logical edge resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The side content starts from: right under RTL, left under LTR.
#[must_use]
pub const fn leading(dir: Direction) -> Side {
    match dir {
        Direction::Ltr => Side::Left,
        Direction::Rtl => Side::Right,
    }
}

/// The side content ends at.
#[must_use]
pub const fn trailing(dir: Direction) -> Side {
    leading(dir).opposite()
}

/// Entry vector for slide-in motion. The sign inverts with direction so a
/// panel always enters from the trailing edge.
#[must_use]
pub const fn enter_offset(dir: Direction, magnitude: f32) -> f32 {
    match dir {
        Direction::Ltr => magnitude,
        Direction::Rtl => -magnitude,
    }
}

/// Directional hover nudge; same sign convention as [`enter_offset`].
#[must_use]
pub const fn hover_shift(dir: Direction, magnitude: f32) -> f32 {
    enter_offset(dir, magnitude)
}

/// Which side the experience timeline rail anchors to.
#[must_use]
pub const fn timeline_side(dir: Direction) -> Side {
    leading(dir)
}

/// Inline style fragment pushing content away from the leading edge.
#[must_use]
pub fn leading_margin(dir: Direction, px: u32) -> String {
    format!("margin-{}:{px}px", leading(dir).css())
}
