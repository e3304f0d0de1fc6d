//! Conversions from and into types of other crates.

#[cfg(feature = "nalgebra")]
mod nalgebra;
