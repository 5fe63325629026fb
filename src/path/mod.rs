// error module
mod error;
// enumerator module
mod enumerator;

mod moves;
mod point;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports for the application layer.
//─────────────────────────────────────────────────────────────────────────────
pub use enumerator::{
    binomial, count_and_list, count_paths, enumerate_prefix, generate_all, EnumerationLimits,
    PathListing, DEFAULT_PARTIAL_LIMIT, DEFAULT_SHOW_ALL_THRESHOLD,
};
pub use error::PathError;
pub use moves::{LatticePath, Move};
pub use point::{Point, StepVector};
