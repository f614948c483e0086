//! Low-poly plane library - pointer-reactive animated surface

pub mod backdrop;
pub mod camera;
pub mod cli;
pub mod easing;
pub mod error;
pub mod params;
pub mod pointer;
pub mod raycast;
pub mod rendering;
pub mod surface;
