//! Lighting and backdrop parameters used by the frame driver.

/// Orbiting point light and the surface material it shades
#[derive(Debug, Clone)]
pub struct LightParams {
    /// Light height above the plane along Z (world units)
    pub z: f32,

    /// Orbit radius on X and Y (world units)
    pub orbit_radius: f32,

    /// X angular rate (radians per ms)
    pub x_rate_per_ms: f64,

    /// Y angular rate (radians per ms)
    pub y_rate_per_ms: f64,

    /// Distance at which the light contribution reaches zero (world units)
    pub range: f32,

    /// Light intensity (dimensionless)
    pub intensity: f32,

    /// Material emissive colour (sRGB, 0..1)
    pub emissive: [f32; 3],
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            z: 10.0,
            orbit_radius: 10.0,
            x_rate_per_ms: 0.0006,
            y_rate_per_ms: 0.001,
            range: 100.0,
            intensity: 1.0,
            emissive: hex_to_rgb(0x072534),
        }
    }
}

impl LightParams {
    /// Light position at wall-clock time `now_ms`
    pub fn position(&self, now_ms: f64) -> [f32; 3] {
        [
            self.orbit_radius * (now_ms * self.x_rate_per_ms).sin() as f32,
            self.orbit_radius * (now_ms * self.y_rate_per_ms).sin() as f32,
            self.z,
        ]
    }
}

/// Rotating two-colour gradient behind the surface
#[derive(Debug, Clone)]
pub struct BackdropParams {
    /// Gradient start colour (sRGB, 0..1)
    pub from: [f32; 3],

    /// Gradient end colour (sRGB, 0..1)
    pub to: [f32; 3],

    /// Angle steps per second
    pub steps_per_second: f64,

    /// Degrees added per step
    pub degrees_per_step: f64,
}

impl Default for BackdropParams {
    fn default() -> Self {
        Self {
            from: hex_to_rgb(0x00c7e4),
            to: hex_to_rgb(0xffbbff),
            steps_per_second: 30.0,
            degrees_per_step: 1.0,
        }
    }
}

/// Convert a 0xRRGGBB colour to normalized sRGB
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
