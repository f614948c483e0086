//! Surface geometry, motion and pose-transition parameters.

use crate::error::ParamsError;

/// Low-poly surface parameters
#[derive(Debug, Clone)]
pub struct SurfaceParams {
    /// Plane width in world units
    pub width: f32,

    /// Plane height in world units
    pub height: f32,

    /// Grid segments along X (vertices per row = cols + 1)
    pub cols: usize,

    /// Grid segments along Y (vertices per column = rows + 1)
    pub rows: usize,

    /// Mesh offset along Z inside the surface group (world units)
    pub mesh_offset_z: f32,

    /// Upper bound (exclusive) of the random out-of-plane vertex offset
    pub max_offset: f32,

    /// Radius of each proxy hit sphere (world units)
    pub proxy_radius: f32,

    /// Opacity ceiling of the surface material
    pub max_opacity: f32,

    /// Opacity added per tick while fading in
    pub fade_step: f32,

    /// Spin added per tick about the surface normal (radians)
    pub spin_step: f32,

    /// Easing progress removed per tick while tilting
    pub tilt_step: f32,

    /// Tilt angle of the resting pose (radians, about X)
    pub rest_angle: f32,

    /// Oscillation displacement scale (world units)
    pub oscillation_amplitude: f32,

    /// Upper bound (exclusive) of the per-tick oscillation frequency (per ms)
    pub max_oscillation_freq: f64,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            width: 60.0,
            height: 60.0,
            cols: 20,
            rows: 20,
            mesh_offset_z: -10.0,
            max_offset: 5.0,
            proxy_radius: 1.0,
            max_opacity: 0.1,
            fade_step: 0.0005,
            spin_step: 0.0002,
            tilt_step: 0.02,
            rest_angle: -1.9,
            oscillation_amplitude: 0.05,
            max_oscillation_freq: 0.00003,
        }
    }
}

impl SurfaceParams {
    /// Number of grid vertices: (cols + 1) * (rows + 1)
    pub fn vertex_count(&self) -> usize {
        (self.cols + 1) * (self.rows + 1)
    }

    /// Validate parameters before building a surface
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ParamsError::EmptyGrid {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ParamsError::PlaneSize {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.proxy_radius > 0.0) {
            return Err(ParamsError::ProxyRadius(self.proxy_radius));
        }
        if !(self.max_opacity > 0.0 && self.max_opacity <= 1.0) {
            return Err(ParamsError::MaxOpacity(self.max_opacity));
        }
        if !(self.max_offset.is_finite() && self.max_offset >= 0.0) {
            return Err(ParamsError::MaxOffset(self.max_offset));
        }
        if !(self.max_oscillation_freq.is_finite() && self.max_oscillation_freq >= 0.0) {
            return Err(ParamsError::OscillationFrequency(self.max_oscillation_freq));
        }
        if !(self.fade_step.is_finite() && self.fade_step >= 0.0) {
            return Err(ParamsError::FadeStep(self.fade_step));
        }
        // A non-positive step never reaches the rest angle
        if !(self.tilt_step.is_finite() && self.tilt_step > 0.0) {
            return Err(ParamsError::TiltStep(self.tilt_step));
        }
        if !(self.rest_angle.is_finite() && self.rest_angle < 0.0) {
            return Err(ParamsError::RestAngle(self.rest_angle));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let params = SurfaceParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.vertex_count(), 441);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let params = SurfaceParams {
            cols: 0,
            ..SurfaceParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::EmptyGrid { cols: 0, rows: 20 })
        ));
    }

    #[test]
    fn test_bad_opacity_rejected() {
        let params = SurfaceParams {
            max_opacity: 0.0,
            ..SurfaceParams::default()
        };
        assert!(matches!(params.validate(), Err(ParamsError::MaxOpacity(_))));
    }

    #[test]
    fn test_nan_radius_rejected() {
        let params = SurfaceParams {
            proxy_radius: f32::NAN,
            ..SurfaceParams::default()
        };
        assert!(matches!(params.validate(), Err(ParamsError::ProxyRadius(_))));
    }

    #[test]
    fn test_infinite_offset_rejected() {
        let params = SurfaceParams {
            max_offset: f32::INFINITY,
            ..SurfaceParams::default()
        };
        assert!(matches!(params.validate(), Err(ParamsError::MaxOffset(_))));
    }

    #[test]
    fn test_bad_oscillation_frequency_rejected() {
        for freq in [f64::INFINITY, f64::NAN, -0.00003] {
            let params = SurfaceParams {
                max_oscillation_freq: freq,
                ..SurfaceParams::default()
            };
            assert!(matches!(
                params.validate(),
                Err(ParamsError::OscillationFrequency(_))
            ));
        }
    }

    #[test]
    fn test_negative_fade_step_rejected() {
        let params = SurfaceParams {
            fade_step: -0.0005,
            ..SurfaceParams::default()
        };
        assert!(matches!(params.validate(), Err(ParamsError::FadeStep(_))));

        let zero = SurfaceParams {
            fade_step: 0.0,
            ..SurfaceParams::default()
        };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_non_positive_tilt_step_rejected() {
        for step in [0.0, -0.02, f32::NAN] {
            let params = SurfaceParams {
                tilt_step: step,
                ..SurfaceParams::default()
            };
            assert!(matches!(params.validate(), Err(ParamsError::TiltStep(_))));
        }
    }

    #[test]
    fn test_non_negative_rest_angle_rejected() {
        for angle in [0.0, 1.9, f32::NEG_INFINITY] {
            let params = SurfaceParams {
                rest_angle: angle,
                ..SurfaceParams::default()
            };
            assert!(matches!(params.validate(), Err(ParamsError::RestAngle(_))));
        }
    }
}
