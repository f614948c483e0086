//! Low-poly plane - an ambient, pointer-reactive animated surface
//!
//! Vertices drift on their own, a displacement token hops between the
//! vertices under the pointer, and the whole plane can tilt into a resting
//! pose. Keys: T tilt, P back to flat, O jump to tilted, Esc quit.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use lowpoly_plane::backdrop::GradientCycler;
use lowpoly_plane::camera::Camera;
use lowpoly_plane::cli::{Args, StartPose};
use lowpoly_plane::params::{BackdropParams, LightParams, RenderConfig, SurfaceParams};
use lowpoly_plane::pointer::PointerTracker;
use lowpoly_plane::rendering::{BackdropUniforms, RenderSystem, SurfaceUniforms};
use lowpoly_plane::surface::LowPolySurface;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    surface: LowPolySurface,
    pointer: PointerTracker,
    camera: Camera,
    backdrop: GradientCycler,

    // Configuration
    render_config: RenderConfig,
    light: LightParams,
}

impl App {
    fn new(args: &Args) -> anyhow::Result<Self> {
        let render_config = args.render_config();
        let camera = Camera::from_config(&render_config);

        let mut surface = LowPolySurface::from_seed(SurfaceParams::default(), args.seed)
            .context("invalid surface parameters")?;
        if args.parse_start_pose() == StartPose::Tilted {
            surface.post_tilt();
        }
        let pointer = surface.pointer().clone();

        Ok(Self {
            window: None,
            render_system: None,
            surface,
            pointer,
            camera,
            backdrop: GradientCycler::new(BackdropParams::default()),
            render_config,
            light: LightParams::default(),
        })
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        // Create window
        let window_attributes = Window::default_attributes()
            .with_title("Low-poly plane")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        // Initialize rendering system
        let render_system =
            match pollster::block_on(RenderSystem::new(Arc::clone(&window), self.surface.grid())) {
                Ok(render_system) => render_system,
                Err(e) => {
                    error!("failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

        let (width, height) = render_system.size();
        self.camera.set_viewport(width, height);

        info!(width, height, "low-poly plane is running (Esc to quit)");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
                self.camera.set_viewport(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let Some(window) = &self.window else {
                    return;
                };
                let size = window.inner_size();
                self.pointer.on_pointer_move(
                    position.x as f32,
                    position.y as f32,
                    (size.width, size.height),
                );
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::KeyT => self.surface.tilt(),
                KeyCode::KeyP => self.surface.pre_tilt(),
                KeyCode::KeyO => self.surface.post_tilt(),
                _ => {}
            },
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}

impl App {
    /// Advance the surface one tick and render a single frame
    fn render_frame(&mut self) {
        let Some(ref mut render_system) = self.render_system else {
            return;
        };

        let now_ms = wall_clock_ms();

        // Update simulation
        self.surface.update(&self.camera, now_ms);
        self.backdrop.advance(now_ms);

        // Update surface vertices
        render_system.update_vertices(self.surface.grid().vertices());

        // Update surface uniforms
        let uniforms = SurfaceUniforms {
            view_proj: self.camera.view_proj().to_cols_array_2d(),
            model: self.surface.model_matrix().to_cols_array_2d(),
            light_position: self.light.position(now_ms),
            light_range: self.light.range,
            emissive: self.light.emissive,
            opacity: self.surface.opacity(),
            light_intensity: self.light.intensity,
            _padding: [0.0; 3],
        };
        render_system.update_uniforms(&uniforms);

        // Update backdrop uniforms
        let backdrop = self.backdrop.params();
        let backdrop_uniforms = BackdropUniforms {
            from_color: backdrop.from,
            angle: self.backdrop.radians(),
            to_color: backdrop.to,
            aspect: self.camera.aspect,
        };
        render_system.update_backdrop_uniforms(&backdrop_uniforms);

        // Render
        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = render_system.size();
                render_system.resize(width, height);
            }
            Err(e) => warn!("render error: {:?}", e),
        }
    }
}

/// Milliseconds since the Unix epoch
fn wall_clock_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("lowpoly_plane=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .context("invalid --log-level directive")?,
            ),
        )
        .init();

    info!("initializing low-poly plane");

    let mut app = App::new(&args)?;
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
