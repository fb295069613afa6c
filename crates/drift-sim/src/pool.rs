//! Fixed-capacity particle pool with a free-index stack
//!
//! The original intrusive free list (next pointers aliased over the
//! payload) is replaced by a separate stack of free slot indices, which
//! keeps the same O(1) acquire/release and LIFO reuse order without any
//! payload aliasing.

use crate::particle::Particle;

/// Fixed-size slot array plus the free stack. Never allocates after
/// construction; slot identity is the array index, stable for the pool's
/// lifetime.
pub struct ParticlePool {
    slots: Box<[Particle]>,
    free: Vec<usize>,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        let slots = vec![Particle::dead(); capacity].into_boxed_slice();
        // Reverse order so the first acquire hands out slot 0, matching
        // the original free-list chain head
        let free: Vec<usize> = (0..capacity).rev().collect();
        Self { slots, free }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Pop a free slot, or `None` when the pool is saturated. Saturation
    /// is normal backpressure, not an error; the caller skips the spawn
    /// and the pool self-heals as lifetimes expire.
    pub fn acquire(&mut self) -> Option<usize> {
        self.free.pop()
    }

    /// Return a slot to the free stack. Most recently freed is reused
    /// first, so reuse artifacts are deterministic.
    pub fn release(&mut self, index: usize) {
        debug_assert!(self.slots[index].is_live(), "double release of slot {index}");
        self.slots[index].lifetime = 0;
        self.free.push(index);
    }

    #[inline]
    pub fn get(&self, index: usize) -> &Particle {
        &self.slots[index]
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut Particle {
        &mut self.slots[index]
    }

    pub fn slots(&self) -> &[Particle] {
        &self.slots
    }
}
