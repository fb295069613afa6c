//! End-to-end determinism and capacity scenarios

use drift_core::PackedColor;
use drift_raster::FrameBuffer;
use drift_sim::{Simulation, DEFAULT_CAPACITY};

const W: u32 = 64;
const H: u32 = 64;
const DT: f64 = 1.0 / 60.0;

fn run_ticks(sim: &mut Simulation, buf: &mut [u8], ticks: usize) {
    for _ in 0..ticks {
        let mut fb = FrameBuffer::new_packed(buf, W, H).unwrap();
        sim.update(&mut fb, DT);
    }
}

#[test]
fn identical_seeds_produce_identical_frames() {
    let seed = (0x0bdb_1dd3_52d7_ddd4, 0x009b_18cd_16d1_df52);
    let mut a = Simulation::new(seed);
    let mut b = Simulation::new(seed);
    let mut buf_a = vec![0u8; (W * H * 4) as usize];
    let mut buf_b = vec![0u8; (W * H * 4) as usize];

    // Compare at several checkpoints, not just the end
    for _ in 0..6 {
        run_ticks(&mut a, &mut buf_a, 100);
        run_ticks(&mut b, &mut buf_b, 100);
        assert_eq!(buf_a, buf_b);
        assert_eq!(a.live_count(), b.live_count());
    }
}

#[test]
fn golden_pixel_sample_matches_pinned_values() {
    // Absolute expected pixels for the default seed after 150 ticks at
    // 64x64, computed independently from the published xoroshiro128+
    // stream and the documented color/coverage math. Unlike the two-run
    // comparison below, these catch drift that affects every run equally
    // (constants, draw order, blend formula).
    let mut sim = Simulation::default();
    let mut buf = vec![0u8; (W * H * 4) as usize];
    run_ticks(&mut sim, &mut buf, 150);
    assert_eq!(sim.live_count(), 75);

    let fb = FrameBuffer::new_packed(&mut buf, W, H).unwrap();
    // Flake interiors (blended against the clear color)
    assert_eq!(fb.pixel(9, 8), PackedColor(0xa567_98a9));
    assert_eq!(fb.pixel(14, 13), PackedColor(0x7972_797f));
    assert_eq!(fb.pixel(17, 17), PackedColor(0xdd4f_626c));
    // A flake clipped by the top edge
    assert_eq!(fb.pixel(60, 0), PackedColor(0x4340_454c));
    // Untouched background keeps the clear color
    assert_eq!(fb.pixel(32, 32), PackedColor(0xff03_050d));
}

#[test]
fn different_seeds_diverge() {
    let mut a = Simulation::new((1, 2));
    let mut b = Simulation::new((3, 4));
    let mut buf_a = vec![0u8; (W * H * 4) as usize];
    let mut buf_b = vec![0u8; (W * H * 4) as usize];

    run_ticks(&mut a, &mut buf_a, 120);
    run_ticks(&mut b, &mut buf_b, 120);
    assert_ne!(buf_a, buf_b);
}

#[test]
fn live_count_never_exceeds_capacity() {
    let mut sim = Simulation::default();
    let mut buf = vec![0u8; (W * H * 4) as usize];

    for _ in 0..(2 * DEFAULT_CAPACITY) {
        let mut fb = FrameBuffer::new_packed(&mut buf, W, H).unwrap();
        sim.update(&mut fb, DT);
        assert!(sim.live_count() <= sim.capacity());
    }

    // Lifetime 200 at one spawn per two ticks settles at 100 concurrent
    assert_eq!(sim.live_count(), 100);
}

#[test]
fn frames_contain_snow_after_warmup() {
    let mut sim = Simulation::default();
    let mut buf = vec![0u8; (W * H * 4) as usize];
    run_ticks(&mut sim, &mut buf, 150);

    let mut background_only = vec![0u8; (W * H * 4) as usize];
    {
        // Capacity 0 yields the pure clear color for comparison
        let mut empty = Simulation::with_capacity(0, (0, 0));
        let mut fb = FrameBuffer::new_packed(&mut background_only, W, H).unwrap();
        empty.update(&mut fb, DT);
    }
    assert_ne!(buf, background_only, "expected visible flakes by tick 150");
}
