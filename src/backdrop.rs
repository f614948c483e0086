//! Rotating linear-gradient backdrop drawn behind the surface.

use crate::params::BackdropParams;

/// Gradient angle that steps at a fixed rate, independent of frame rate
#[derive(Debug, Clone)]
pub struct GradientCycler {
    params: BackdropParams,
    degrees: f64,
    /// Timestamp of the last whole step taken (ms)
    last_step_ms: Option<f64>,
}

impl GradientCycler {
    pub fn new(params: BackdropParams) -> Self {
        Self {
            params,
            degrees: 0.0,
            last_step_ms: None,
        }
    }

    pub fn params(&self) -> &BackdropParams {
        &self.params
    }

    /// Take every whole step that elapsed up to `now_ms`
    pub fn advance(&mut self, now_ms: f64) {
        let Some(last) = self.last_step_ms else {
            self.last_step_ms = Some(now_ms);
            return;
        };

        let interval_ms = 1000.0 / self.params.steps_per_second;
        let steps = ((now_ms - last) / interval_ms).floor();
        if steps >= 1.0 {
            self.degrees = (self.degrees + steps * self.params.degrees_per_step) % 360.0;
            self.last_step_ms = Some(last + steps * interval_ms);
        }
    }

    /// Gradient angle in degrees, CSS convention (0 = toward the top, clockwise)
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn radians(&self) -> f32 {
        self.degrees.to_radians() as f32
    }
}
