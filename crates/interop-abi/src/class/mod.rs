//! Native class vtables
//!
//! The native engine installs one vtable per class at startup. Exported
//! functions resolve `self` to an instance pointer and call through these.

mod model;
mod scene_object;
mod texture;

pub use model::*;
pub use scene_object::*;
pub use texture::*;
