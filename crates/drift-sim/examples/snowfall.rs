//! Headless snowfall demo: runs the simulation and dumps PNG frames.
//!
//! Usage: `cargo run --example snowfall [ticks]`
//! Writes `snowfall_NNNN.png` files into the working directory.

use drift_raster::FrameBuffer;
use drift_sim::Simulation;
use image::{Rgba, RgbaImage};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;
const DT: f64 = 1.0 / 60.0;
const DUMP_EVERY: u64 = 30;

fn main() {
    let ticks: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(300);

    let mut sim = Simulation::default();
    let mut buf = vec![0u8; (WIDTH * HEIGHT * 4) as usize];

    for tick in 0..ticks {
        {
            let mut fb = FrameBuffer::new_packed(&mut buf, WIDTH, HEIGHT)
                .expect("framebuffer descriptor is valid");
            sim.update(&mut fb, DT);
        }

        if tick % DUMP_EVERY == 0 {
            let path = format!("snowfall_{tick:04}.png");
            save_png(&buf, &path);
            println!(
                "[snowfall] tick {tick}: {} live flakes -> {path}",
                sim.live_count()
            );
        }
    }
}

/// Convert the B,G,R,A framebuffer bytes to RGBA and encode as PNG.
fn save_png(buf: &[u8], path: &str) {
    let img = RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| {
        let off = ((y * WIDTH + x) * 4) as usize;
        let px: [u8; 4] = buf[off..off + 4].try_into().unwrap();
        Rgba([px[2], px[1], px[0], px[3]])
    });
    img.save(path).expect("failed to write PNG");
}
