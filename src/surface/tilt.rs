//! Pose state machine easing the surface between flat and tilted.

use tracing::debug;

use super::oscillate::Drift;
use crate::easing::ease_in_cubic;

/// Discrete pose of the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pose {
    /// Upright and interactive
    Flat,
    /// Easing toward the rest angle; `t` is the (negative) easing progress
    Transitioning { t: f32 },
    /// At rest, no pointer interaction
    Tilted,
}

/// Tilt angle about X and the pose that drives it
#[derive(Debug, Clone)]
pub struct TiltMachine {
    pose: Pose,
    angle: f32,
    step: f32,
    rest_angle: f32,
}

impl TiltMachine {
    /// Flat machine at angle 0
    ///
    /// # Arguments
    /// * `step` - Progress removed per eased tick
    /// * `rest_angle` - Angle (radians, negative) at which the transition ends
    pub fn new(step: f32, rest_angle: f32) -> Self {
        Self {
            pose: Pose::Flat,
            angle: 0.0,
            step,
            rest_angle,
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Current rotation about the tilt axis (radians)
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_flat(&self) -> bool {
        self.pose == Pose::Flat
    }

    /// Which axes the oscillation should drive in this pose
    pub fn drift(&self) -> Drift {
        match self.pose {
            Pose::Flat => Drift::InPlane,
            Pose::Transitioning { .. } | Pose::Tilted => Drift::Normal,
        }
    }

    /// Request the eased transition; only leaves `Flat`
    pub fn tilt(&mut self) {
        if self.pose == Pose::Flat {
            debug!("tilt requested");
            self.pose = Pose::Transitioning { t: 0.0 };
        }
    }

    /// Advance the transition by one tick
    pub fn step(&mut self) {
        let Pose::Transitioning { t } = self.pose else {
            return;
        };

        if self.angle > self.rest_angle {
            let t = t - self.step;
            self.angle = ease_in_cubic(t);
            self.pose = Pose::Transitioning { t };
        }

        if self.angle <= self.rest_angle {
            debug!(angle = self.angle, "tilt settled");
            self.pose = Pose::Tilted;
        }
    }

    /// Jump back to flat at angle 0
    pub fn reset(&mut self) {
        self.pose = Pose::Flat;
        self.angle = 0.0;
    }

    /// Jump to the resting pose without easing
    pub fn settle(&mut self) {
        self.pose = Pose::Tilted;
        self.angle = self.rest_angle;
    }
}
