//! Per-frame tick orchestrator
//!
//! One `update` call is one atomic simulation step: clear the frame,
//! maybe spawn, then walk the whole pool animating, drawing, and
//! releasing expired slots. Construction is explicit — the simulation
//! owns its pool and RNG, so there is no host memory block, no lazy
//! first-call init, and no size assertion to get wrong.

use crate::pool::ParticlePool;
use crate::snow;
use drift_core::{DoubleColor, Xoroshiro128};
use drift_raster::{fill_rect, FrameBuffer};

/// Default pool capacity; covers worst-case concurrent lifetimes at the
/// one-spawn-per-two-ticks rate with headroom.
pub const DEFAULT_CAPACITY: usize = 300;

/// Opaque near-black night-sky clear color.
const BACKGROUND: DoubleColor = DoubleColor {
    a: 1.0,
    r: 0.01,
    g: 0.02,
    b: 0.05,
};

/// The snow simulation: tick counter, particle pool, RNG.
pub struct Simulation {
    ticks: u64,
    pool: ParticlePool,
    rng: Xoroshiro128,
}

impl Simulation {
    /// Build a simulation with the default capacity and the given seed.
    pub fn new(seed: (u64, u64)) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, seed)
    }

    /// Build a simulation with an explicit pool capacity.
    pub fn with_capacity(capacity: usize, seed: (u64, u64)) -> Self {
        Self {
            ticks: 0,
            pool: ParticlePool::new(capacity),
            rng: Xoroshiro128::new(seed.0, seed.1),
        }
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.pool.live_count()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Advance one tick and render it. `seconds_elapsed` is the caller's
    /// measured frame delta and is not clamped; pathological values move
    /// particles by a correspondingly large step.
    pub fn update(&mut self, fb: &mut FrameBuffer, seconds_elapsed: f64) {
        fill_rect(
            fb,
            0.0,
            0.0,
            fb.width() as f64,
            fb.height() as f64,
            BACKGROUND.to_packed(),
        );

        // Spawn every other tick; a saturated pool just skips the spawn
        if self.ticks % 2 == 0 {
            if let Some(idx) = self.pool.acquire() {
                snow::init(self.pool.get_mut(idx), fb.width(), &mut self.rng);
            }
        }

        for i in 0..self.pool.capacity() {
            let lifetime = self.pool.get(i).lifetime;
            if lifetime == 0 {
                continue;
            }
            if lifetime <= 1 {
                // End of life: back onto the free stack, nothing drawn
                self.pool.release(i);
                continue;
            }

            let p = self.pool.get_mut(i);
            snow::animate(p, &mut self.rng, seconds_elapsed);

            let (x, y, radius) = (p.x, p.y, p.radius);
            let color = p.color.to_packed();
            fill_rect(fb, x - radius, y - radius, x + radius, y + radius, color);
        }

        self.ticks = self.ticks.wrapping_add(1);
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(drift_core::DEFAULT_SEED)
    }
}
