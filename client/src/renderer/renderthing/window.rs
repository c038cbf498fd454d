use std::sync::Arc;

use log::error;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu::TextureFormat};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId},
};

use super::{frame::RenderFrame, sleeper::Sleeper};

pub(super) struct RendererWindow {
    config: RendererWindowConfig,
    resumed_window: Option<ResumedWindow>,
    sleeper: Sleeper,
}

impl RendererWindow {
    pub fn new(config: RendererWindowConfig) -> Self {
        let sleeper = Sleeper::from_fps(config.target_fps);

        Self {
            config,
            resumed_window: None,
            sleeper,
        }
    }
}

pub struct RendererWindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u64,

    /// Draws one frame, returning a new window title when it changed.
    pub draw_callback: Box<dyn FnMut(RenderFrame) -> Option<String>>,
    pub event_callback: Option<Box<dyn FnMut(&WindowEvent)>>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl ResumedWindow {
    fn create(event_loop: &ActiveEventLoop, config: &RendererWindowConfig) -> anyhow::Result<Self> {
        let window = Arc::new({
            let window_size = LogicalSize::new(config.width, config.height);

            event_loop.create_window(
                WindowAttributes::default()
                    .with_title(config.title.clone())
                    .with_inner_size(window_size),
            )?
        });

        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            PixelsBuilder::new(window_size.width, window_size.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()?
        };

        window.request_redraw();

        Ok(Self { window, pixels })
    }
}

impl ApplicationHandler for RendererWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_window.is_some() {
            return;
        }

        match ResumedWindow::create(event_loop, &self.config) {
            Ok(resumed_window) => self.resumed_window = Some(resumed_window),
            Err(e) => {
                error!("Couldn't create window: {e:?}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return;
        };

        match event {
            WindowEvent::RedrawRequested => {
                let PhysicalSize { width, height } = window.inner_size();

                let next_frame = RenderFrame {
                    width,
                    height,
                    buffer: pixels.frame_mut(),
                };

                if let Some(title) = (self.config.draw_callback)(next_frame) {
                    window.set_title(&title);
                }

                if let Err(e) = pixels.render() {
                    error!("Rendering failed: {e}");
                    event_loop.exit();
                    return;
                }

                self.sleeper.sleep();
                window.request_redraw();
            }
            // Minimised windows report a zero size, which pixels can't have.
            WindowEvent::Resized(PhysicalSize { width, height }) if width > 0 && height > 0 => {
                if let Err(e) = pixels.resize_surface(width, height) {
                    error!("Couldn't resize surface: {e}");
                }
                if let Err(e) = pixels.resize_buffer(width, height) {
                    error!("Couldn't resize buffer: {e}");
                }
                window.request_redraw();
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            _ => {}
        }

        if let Some(event_callback) = &mut self.config.event_callback {
            event_callback(&event);
        }
    }
}
