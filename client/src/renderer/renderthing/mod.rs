//! A window with a CPU framebuffer: `pixels` draws, `winit` delivers input.

use anyhow::Context;
use window::{RendererWindow, RendererWindowConfig};
use winit::event_loop::EventLoop;

pub mod frame;
pub mod sleeper;
pub mod window;

pub struct Renderer {
    event_loop: EventLoop<()>,
    window: RendererWindow,
}

impl Renderer {
    /// The window itself only opens once the event loop resumes.
    pub fn new(config: RendererWindowConfig) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("Creating event loop")?;

        Ok(Self {
            event_loop,
            window: RendererWindow::new(config),
        })
    }

    /// Blocks until the window is closed or rendering fails.
    pub fn run(self) -> anyhow::Result<()> {
        let Self {
            event_loop,
            mut window,
        } = self;

        event_loop
            .run_app(&mut window)
            .context("Running event loop")
    }
}
