//! Pointer-reactive low-poly surface: grid, hit proxies and motion engine.

mod fade;
mod mesh;
mod oscillate;
mod propagate;
mod proxy;
mod system;
mod tilt;

// Re-export public types
pub use fade::Fade;
pub use mesh::{Grid, Vertex};
pub use oscillate::{Drift, Oscillator};
pub use propagate::DisplacementPropagator;
pub use proxy::{build_proxies, ProxyVolume};
pub use system::LowPolySurface;
pub use tilt::{Pose, TiltMachine};
