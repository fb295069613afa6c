//! Drift Raster - CPU rasterization into a packed-pixel framebuffer
//!
//! Provides:
//! - `FrameBuffer` - a borrowed, validated view over host pixel storage
//! - `fill_rect` - antialiased rectangle fill with coverage compositing
//! - `render_gradient` - diagnostic gradient for addressing/endianness

mod framebuffer;
mod raster;

pub use framebuffer::FrameBuffer;
pub use raster::{fill_rect, render_gradient};
