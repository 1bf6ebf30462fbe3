//! FFI-safe value shapes passed by value across the boundary

mod buffer;
mod geometry;

pub use buffer::*;
pub use geometry::*;
