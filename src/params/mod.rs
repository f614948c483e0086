//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers of the surface are extracted here with:
//! - Units (world units, radians, milliseconds)
//! - Documented ranges and meanings
//! - A `validate()` pass where a bad value would break construction

mod render;
mod scene;
mod surface;

// Re-export all types
pub use render::RenderConfig;
pub use scene::{BackdropParams, LightParams};
pub use surface::SurfaceParams;
