//! Exact value tier
//!
//! All ground-truth computation happens on exact types; rounding is a
//! presentation concern applied once at the formatting boundary.

pub mod value;

pub use value::{ExactValue, Rat};
