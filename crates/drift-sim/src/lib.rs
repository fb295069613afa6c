//! Drift Sim - falling-snow particle simulation
//!
//! Provides pooled particle simulation with:
//! - Fixed-capacity pool with free-slot recycling (no allocation per tick)
//! - Deterministic spawn/physics driven by an injected xoroshiro128+ seed
//! - Per-tick velocity retargeting, parallax integration, and fade-out
//! - A single per-frame entry point that clears, spawns, animates, draws

pub mod particle;
pub mod pool;
pub mod simulation;
pub mod snow;

pub use particle::Particle;
pub use pool::ParticlePool;
pub use simulation::{Simulation, DEFAULT_CAPACITY};
