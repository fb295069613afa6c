//! Snow particle behavior: spawn-time init and per-tick animation
//!
//! All behavior constants live here; they are compile-time by design.

use crate::particle::Particle;
use drift_core::{lerp_f64, DoubleColor, Xoroshiro128};

/// Particle lifetime budget in ticks.
pub const LIFETIME_TICKS: u32 = 200;
/// Base flake half-size in pixels, scaled by depth.
pub const BASE_RADIUS: f64 = 2.5;
/// Nearest-to-furthest depth range; depth scales size and speed.
pub const MIN_DEPTH: f64 = 0.35;
/// Initial sideways drift, pixels per second.
pub const DRIFT_VEL_X: f64 = 50.0;
/// Initial fall speed, pixels per second.
pub const FALL_VEL_Y: f64 = 160.0;
/// Retarget draw range for sideways drift.
pub const DRIFT_VEL_MAX: f64 = 80.0;
/// Retarget draw range for fall speed.
pub const FALL_VEL_MIN: f64 = 120.0;
pub const FALL_VEL_MAX: f64 = 200.0;
/// Per-tick chance of picking a new target velocity.
pub const RETARGET_CHANCE: f64 = 0.05;
/// Retargeting waits until the current ease is at least this complete.
pub const RETARGET_READY: f64 = 0.9;
/// Per-tick ease progress increment.
pub const LERP_SPEED: f64 = 0.05;
/// Alpha starts decaying once lifetime drops to this many ticks.
pub const FADE_TICKS: u32 = 30;
/// Multiplicative alpha decay per fading tick.
pub const FADE_RATE: f64 = 0.9;

/// Endpoint hues for the spawn-time color draw: ice blue through white.
const HUE_ICE: DoubleColor = DoubleColor {
    a: 1.0,
    r: 0.55,
    g: 0.9,
    b: 1.0,
};
const HUE_WHITE: DoubleColor = DoubleColor {
    a: 1.0,
    r: 1.0,
    g: 1.0,
    b: 1.0,
};

/// Initialize a freshly acquired slot. This is the only RNG consumption
/// at spawn, so spawn visuals are fully determined by the stream position.
pub fn init(p: &mut Particle, frame_width: u32, rng: &mut Xoroshiro128) {
    // Depth drawn first: lerp here is reversed, so percent 0 lands at the
    // near plane and percent 1 approaches MIN_DEPTH
    p.z = lerp_f64(MIN_DEPTH, 1.0, rng.percent());
    p.radius = BASE_RADIUS * p.z;

    p.x = rng.percent() * frame_width as f64;
    p.y = -2.0 * p.radius;

    p.vel_x = DRIFT_VEL_X;
    p.vel_y = FALL_VEL_Y;
    p.start_vel_x = p.vel_x;
    p.start_vel_y = p.vel_y;
    p.target_vel_x = p.vel_x;
    p.target_vel_y = p.vel_y;
    p.lerp = 1.0;
    p.lerp_speed = LERP_SPEED;

    let hue = rng.percent();
    p.color = DoubleColor {
        a: 0.25 + 0.75 * rng.percent(),
        r: lerp_f64(HUE_ICE.r, HUE_WHITE.r, hue),
        g: lerp_f64(HUE_ICE.g, HUE_WHITE.g, hue),
        b: lerp_f64(HUE_ICE.b, HUE_WHITE.b, hue),
    };

    p.lifetime = LIFETIME_TICKS;
}

/// Advance one live particle by one tick.
///
/// Occasionally (RNG-gated, and only once the previous ease is mostly
/// done) the particle picks a new random target velocity; every tick the
/// velocity is re-eased from `start` toward `target` and the position
/// integrates with a depth parallax factor. Lifetime drops by exactly 1
/// per call, with a multiplicative alpha fade near expiry so the flake
/// never vanishes abruptly.
pub fn animate(p: &mut Particle, rng: &mut Xoroshiro128, dt: f64) {
    debug_assert!(p.is_live(), "animate called on a free slot");

    if p.lerp >= RETARGET_READY && rng.percent() < RETARGET_CHANCE {
        p.start_vel_x = p.vel_x;
        p.start_vel_y = p.vel_y;
        p.target_vel_x = -DRIFT_VEL_MAX + 2.0 * DRIFT_VEL_MAX * rng.percent();
        p.target_vel_y = FALL_VEL_MIN + (FALL_VEL_MAX - FALL_VEL_MIN) * rng.percent();
        p.lerp = 0.0;
    }

    // Reversed lerp: progress 0 is the captured start, 1 the new target
    p.vel_x = lerp_f64(p.target_vel_x, p.start_vel_x, p.lerp);
    p.vel_y = lerp_f64(p.target_vel_y, p.start_vel_y, p.lerp);
    p.lerp = (p.lerp + p.lerp_speed).min(1.0);

    p.x += p.vel_x * dt * p.z;
    p.y += p.vel_y * dt * p.z;

    p.lifetime -= 1;
    if p.lifetime <= FADE_TICKS {
        p.color.a *= FADE_RATE;
    }
}
