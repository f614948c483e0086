//! Easing curves for pose transitions.
//!
//! Unlike normalized easings these are evaluated on the raw progress value,
//! so a negative progress gives a negative result (the tilt runs from 0 down).

/// Cubic ease-in: t³
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}
