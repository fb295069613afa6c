//! Particle slot state

use drift_core::DoubleColor;

/// One pool slot. `lifetime == 0` means the slot is free and its payload
/// is meaningless (the pool's free stack holds the slot index); a live
/// slot counts `lifetime` down to 0 tick by tick. The payload is never
/// interpreted while the slot is free.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Remaining lifetime in ticks; 0 = free slot
    pub lifetime: u32,
    pub x: f64,
    pub y: f64,
    /// Depth in (0, 1]; smaller is further away (smaller, slower)
    pub z: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    /// Velocity at the moment the current retarget began
    pub start_vel_x: f64,
    pub start_vel_y: f64,
    /// Velocity the current retarget is easing toward
    pub target_vel_x: f64,
    pub target_vel_y: f64,
    /// Retarget progress in [0, 1]; 1 = no perturbation pending
    pub lerp: f64,
    /// Per-tick progress increment
    pub lerp_speed: f64,
    pub radius: f64,
    pub color: DoubleColor,
}

impl Particle {
    pub fn dead() -> Self {
        Self {
            lifetime: 0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            vel_x: 0.0,
            vel_y: 0.0,
            start_vel_x: 0.0,
            start_vel_y: 0.0,
            target_vel_x: 0.0,
            target_vel_y: 0.0,
            lerp: 0.0,
            lerp_speed: 0.0,
            radius: 0.0,
            color: DoubleColor::default(),
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.lifetime > 0
    }
}
