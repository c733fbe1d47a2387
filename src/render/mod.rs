//! Rendering: CPU framebuffer, per-column ray casting, projection into
//! flat-shaded bands, and the minimap overlay.

pub mod caster;
pub mod framebuffer;
pub mod minimap;
pub mod projector;
