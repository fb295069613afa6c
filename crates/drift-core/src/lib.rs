//! Drift Core - Foundational types for the drift snow simulation
//!
//! This crate provides the types the other drift crates depend on:
//! - `Xoroshiro128` - Deterministic seedable RNG
//! - `PackedColor`, `DoubleColor` - Packed pixel and normalized color math
//! - Error types and Result alias

mod color;
mod error;
mod rng;

pub use color::{composite, lerp_f64, lerp_u8, DoubleColor, PackedColor};
pub use error::{DriftError, Result};
pub use rng::{Xoroshiro128, DEFAULT_SEED};
