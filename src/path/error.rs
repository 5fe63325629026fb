use thiserror::Error;

// Error type for lattice path counting and enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The destination lies strictly left of or below the origin, so no
    /// sequence of right/up moves can reach it.
    #[error(
        "destination must be to the right of and/or above the origin (dx = {dx}, dy = {dy})"
    )]
    InvalidRegion { dx: i128, dy: i128 },

    /// The number of moves in a path does not fit the platform's address range.
    #[error("path of {dx} + {dy} moves is too long to enumerate on this platform")]
    StepOverflow { dx: i128, dy: i128 },
}
