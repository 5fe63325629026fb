//! Counting and enumeration of monotonic lattice paths.
//!
//! `path` holds the pure enumerator; `app` is the interactive shell around it.

pub mod app;
pub mod path;
