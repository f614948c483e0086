//! Error types for surface construction and the rendering frontend.

#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("grid needs at least one segment per axis, got {cols}x{rows}")]
    EmptyGrid { cols: usize, rows: usize },

    #[error("plane size must be positive, got {width}x{height}")]
    PlaneSize { width: f32, height: f32 },

    #[error("proxy radius must be positive, got {0}")]
    ProxyRadius(f32),

    #[error("max opacity must be in (0, 1], got {0}")]
    MaxOpacity(f32),

    #[error("max vertex offset must be finite and non-negative, got {0}")]
    MaxOffset(f32),

    #[error("max oscillation frequency must be finite and non-negative, got {0}")]
    OscillationFrequency(f64),

    #[error("fade step must be finite and non-negative, got {0}")]
    FadeStep(f32),

    #[error("tilt step must be finite and positive, got {0}")]
    TiltStep(f32),

    #[error("rest angle must be finite and negative, got {0}")]
    RestAngle(f32),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
}
