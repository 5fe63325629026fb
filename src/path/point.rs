use std::fmt;

use super::error::PathError;

//─────────────────────────────────────────────────────────────────────────────

/// An integer grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Number of right and up moves separating two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StepVector {
    pub right: usize,
    pub up: usize,
}

impl StepVector {
    pub const fn new(right: usize, up: usize) -> Self {
        Self { right, up }
    }

    /// Derives the step vector from `origin` to `destination`.
    ///
    /// # Errors
    /// `PathError::InvalidRegion` if either delta is negative, and
    /// `PathError::StepOverflow` if the total move count cannot be addressed.
    pub fn between(origin: Point, destination: Point) -> Result<Self, PathError> {
        // i128 keeps the subtraction exact across the whole i64 range.
        let dx = i128::from(destination.x) - i128::from(origin.x);
        let dy = i128::from(destination.y) - i128::from(origin.y);

        if dx < 0 || dy < 0 {
            return Err(PathError::InvalidRegion { dx, dy });
        }

        let overflow = || PathError::StepOverflow { dx, dy };
        let right = usize::try_from(dx).map_err(|_| overflow())?;
        let up = usize::try_from(dy).map_err(|_| overflow())?;
        right.checked_add(up).ok_or_else(overflow)?;

        Ok(Self { right, up })
    }

    /// Total moves in any path with this step vector.
    ///
    /// Vectors built through `between` never overflow; hand-built ones saturate.
    pub fn len(&self) -> usize {
        self.right.saturating_add(self.up)
    }

    pub fn is_empty(&self) -> bool {
        self.right == 0 && self.up == 0
    }
}
