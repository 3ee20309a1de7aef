mod app;
mod asset;
mod backdrop;
mod camera;
mod components;
mod constants;
mod entity;
mod frame_clock;
mod input;
mod manifest;
mod net;
mod palette;
mod player;
mod render;
mod scene;
mod sprite;
mod surface;
mod systems;
mod world;

use constants::*;
use frame_clock::FrameClock;
use manifest::SpriteManifest;
use render::{EguiSurface, TextureCache};
use scene::{DemoKind, PlatformerScene, Scene, TopDownScene};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use glam::Vec2;
use glutin::prelude::*;
use glutin::surface::WindowSurface;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

#[derive(Parser, Debug)]
#[command(name = "sprite-walkers")]
#[command(about = "Top-down sprite walker and side-scrolling platformer demos")]
struct Cli {
    /// Demo to run
    #[arg(long, value_enum, default_value_t = DemoKind::Topdown)]
    demo: DemoKind,
    /// Label drawn above the platformer character
    #[arg(long, default_value = DEFAULT_NICKNAME)]
    nickname: String,
    /// Sprite manifest JSON. Without it the default path is tried and the
    /// built-in manifest is used if that fails.
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Serve puffin profiling data on the default puffin_http port
    #[arg(long)]
    profile: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let _profiler = if cli.profile {
        puffin::set_scopes_on(true);
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        let server = puffin_http::Server::new(&addr)?;
        log::info!("puffin profiler listening on {addr}");
        Some(server)
    } else {
        None
    };

    let manifest = match &cli.manifest {
        Some(path) => SpriteManifest::load(path)?,
        None => SpriteManifest::load_or_builtin(std::path::Path::new(DEFAULT_MANIFEST_PATH)),
    };

    net::connect();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, manifest);
    event_loop.run_app(&mut app)?;

    match app.startup_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct App {
    cli: Cli,
    manifest: SpriteManifest,
    state: Option<AppState>,
    /// Set when window creation failed inside the event loop
    startup_error: Option<anyhow::Error>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: Arc<glow::Context>,
    egui_glow: EguiGlow,
    textures: TextureCache,

    scene: Box<dyn Scene>,
    input: input::InputState,

    // Timing
    started: Instant,
    clock: FrameClock,
}

impl App {
    fn new(cli: Cli, manifest: SpriteManifest) -> Self {
        Self {
            cli,
            manifest,
            state: None,
            startup_error: None,
        }
    }

    fn build_scene(&self, viewport: Vec2) -> Box<dyn Scene> {
        match self.cli.demo {
            DemoKind::Topdown => Box::new(TopDownScene::new(viewport, &self.manifest)),
            DemoKind::Platformer => Box::new(PlatformerScene::new(viewport, &self.cli.nickname)),
        }
    }
}

/// Window size in egui points, the unit scenes draw in
fn logical_size(window: &Window) -> Vec2 {
    let size = window.inner_size().to_logical::<f32>(window.scale_factor());
    Vec2::new(size.width, size.height)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = match app::create_window(event_loop, "sprite-walkers") {
            Ok(ctx) => ctx,
            Err(err) => {
                log::error!("{err:#}");
                self.startup_error = Some(err);
                event_loop.exit();
                return;
            }
        };

        let scene = self.build_scene(logical_size(&window));
        window.set_title(scene.title());
        log::info!("starting {:?} demo", self.cli.demo);

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            textures: TextureCache::new(),
            scene,
            input: input::InputState::new(),
            started: Instant::now(),
            clock: FrameClock::new(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                let viewport = logical_size(&state.window);
                state.scene.resize(viewport.x, viewport.y);
            }
            WindowEvent::Focused(false) => {
                // Key-up events are lost while unfocused
                state.input.clear();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        match event.state {
                            ElementState::Pressed => {
                                if key == KeyCode::Escape {
                                    event_loop.exit();
                                }
                                state.input.press(key);
                            }
                            ElementState::Released => {
                                state.input.release(key);
                            }
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                state.tick();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            state.egui_glow.destroy();
        }
    }
}

impl AppState {
    /// One display frame: advance the scene, paint it, present.
    fn tick(&mut self) {
        puffin::profile_function!();

        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let dt = self.clock.tick(now_ms).min(MAX_FRAME_DT);

        {
            puffin::profile_scope!("update");
            self.scene.update(dt, &self.input);
        }

        let scene = &mut self.scene;
        let textures = &mut self.textures;
        self.egui_glow.run(&self.window, |ctx| {
            puffin::profile_scope!("render");
            let mut surface = EguiSurface::new(ctx, &mut *textures);
            scene.render(&mut surface);
        });

        unsafe {
            use glow::HasContext;
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.egui_glow.paint(&self.window);

        if let Err(err) = self.gl_surface.swap_buffers(&self.gl_context) {
            log::error!("swap_buffers failed: {err}");
        }

        puffin::GlobalProfiler::lock().new_frame();
    }
}
