//! Window, GL context and egui bootstrap for the demo shell.

use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::{Display, GetGlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use egui_glow::EguiGlow;

use crate::constants::*;

/// Everything the shell needs to present a frame.
pub struct WindowContext {
    pub window: Window,
    pub gl_surface: Surface<WindowSurface>,
    pub gl_context: PossiblyCurrentContext,
    pub gl: Arc<glow::Context>,
    pub egui_glow: EguiGlow,
}

/// Open a resizable window titled `title` with a current GL 3.3 context and
/// an egui painter bound to it.
pub fn create_window(event_loop: &ActiveEventLoop, title: &str) -> Result<WindowContext> {
    let (window, gl_config) = open_window(event_loop, title)?;
    let gl_display = gl_config.display();
    let (gl_surface, gl_context) = make_current_context(&window, &gl_display, &gl_config)?;

    let gl = Arc::new(unsafe {
        glow::Context::from_loader_function_cstr(|name| {
            gl_display.get_proc_address(name) as *const _
        })
    });
    let egui_glow = EguiGlow::new(event_loop, gl.clone(), None, None, false);

    let size = window.inner_size();
    log::info!(
        "opened {}x{} window (scale {})",
        size.width,
        size.height,
        window.scale_factor()
    );

    Ok(WindowContext {
        window,
        gl_surface,
        gl_context,
        gl,
        egui_glow,
    })
}

fn open_window(event_loop: &ActiveEventLoop, title: &str) -> Result<(Window, Config)> {
    let attrs = WindowAttributes::default()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .with_resizable(true);

    let (window, config) = DisplayBuilder::new()
        .with_window_attributes(Some(attrs))
        .build(
            event_loop,
            ConfigTemplateBuilder::new().with_alpha_size(8),
            |configs| {
                configs
                    .max_by_key(|config| config.num_samples())
                    .expect("glutin offers at least one config")
            },
        )
        .map_err(|err| anyhow!("failed to create window: {err}"))?;

    let window = window.context("display builder returned no window")?;
    Ok((window, config))
}

fn make_current_context(
    window: &Window,
    display: &Display,
    config: &Config,
) -> Result<(Surface<WindowSurface>, PossiblyCurrentContext)> {
    let raw_handle = window
        .window_handle()
        .context("window has no native handle")?
        .as_raw();

    let context_attrs = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .build(Some(raw_handle));
    let context = unsafe { display.create_context(config, &context_attrs) }
        .context("failed to create OpenGL context")?;

    let size = window.inner_size();
    let (width, height) = NonZeroU32::new(size.width)
        .zip(NonZeroU32::new(size.height))
        .context("window has zero size")?;
    let surface_attrs =
        SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_handle, width, height);
    let surface = unsafe { display.create_window_surface(config, &surface_attrs) }
        .context("failed to create GL surface")?;

    let context = context
        .make_current(&surface)
        .context("failed to make GL context current")?;
    Ok((surface, context))
}

/// Match the GL surface to a new window size. Zero sizes (minimised) are skipped.
pub fn resize_surface(
    gl_surface: &Surface<WindowSurface>,
    gl_context: &PossiblyCurrentContext,
    width: u32,
    height: u32,
) {
    if let Some((width, height)) = NonZeroU32::new(width).zip(NonZeroU32::new(height)) {
        gl_surface.resize(gl_context, width, height);
    }
}
