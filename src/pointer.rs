//! Pointer tracking in normalized device coordinates.
//!
//! The tracker is a one-slot mailbox: every move overwrites the stored
//! position and the surface reads the latest value once per tick. Handles are
//! cheap clones sharing the same slot, so the writer may sit on another thread.

use std::sync::{Arc, Mutex};

use glam::Vec2;
use tracing::debug;

/// Shared pointer position in normalized device coordinates ([-1, 1] per axis)
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    ndc: Arc<Mutex<Vec2>>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move given in screen pixels (origin top-left)
    ///
    /// # Arguments
    /// * `screen_x`, `screen_y` - Pointer position in pixels
    /// * `viewport` - Viewport size in pixels (width, height)
    pub fn on_pointer_move(&self, screen_x: f32, screen_y: f32, viewport: (u32, u32)) {
        let (width, height) = viewport;
        if width == 0 || height == 0 {
            debug!(width, height, "ignoring pointer move on empty viewport");
            return;
        }

        let ndc = Vec2::new(
            (screen_x / width as f32) * 2.0 - 1.0,
            -(screen_y / height as f32) * 2.0 + 1.0,
        );
        *self.ndc.lock().unwrap_or_else(|e| e.into_inner()) = ndc;
    }

    /// Overwrite the slot with an already normalized position
    pub fn set_ndc(&self, ndc: Vec2) {
        *self.ndc.lock().unwrap_or_else(|e| e.into_inner()) = ndc;
    }

    /// Latest pointer position
    pub fn latest(&self) -> Vec2 {
        *self.ndc.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_center() {
        let pointer = PointerTracker::new();
        assert_eq!(pointer.latest(), Vec2::ZERO);
    }

    #[test]
    fn test_corners_and_center() {
        let pointer = PointerTracker::new();

        pointer.on_pointer_move(0.0, 0.0, (800, 600));
        assert_eq!(pointer.latest(), Vec2::new(-1.0, 1.0));

        pointer.on_pointer_move(800.0, 600.0, (800, 600));
        assert_eq!(pointer.latest(), Vec2::new(1.0, -1.0));

        pointer.on_pointer_move(400.0, 300.0, (800, 600));
        assert_eq!(pointer.latest(), Vec2::ZERO);
    }

    #[test]
    fn test_latest_write_wins() {
        let pointer = PointerTracker::new();
        pointer.on_pointer_move(100.0, 100.0, (800, 600));
        pointer.on_pointer_move(200.0, 150.0, (800, 600));
        pointer.on_pointer_move(600.0, 450.0, (800, 600));

        assert_eq!(pointer.latest(), Vec2::new(0.5, -0.5));
    }

    #[test]
    fn test_empty_viewport_keeps_state() {
        let pointer = PointerTracker::new();
        pointer.on_pointer_move(600.0, 450.0, (800, 600));
        pointer.on_pointer_move(10.0, 10.0, (0, 600));

        assert_eq!(pointer.latest(), Vec2::new(0.5, -0.5));
    }

    #[test]
    fn test_clones_share_slot_across_threads() {
        let pointer = PointerTracker::new();
        let writer = pointer.clone();

        std::thread::spawn(move || writer.on_pointer_move(0.0, 600.0, (800, 600)))
            .join()
            .unwrap();

        assert_eq!(pointer.latest(), Vec2::new(-1.0, -1.0));
    }
}
