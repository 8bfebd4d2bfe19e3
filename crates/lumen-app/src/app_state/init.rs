//! Window creation, renderer initialization and scene setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use lumen_common::LumenError;
use lumen_renderer::{RenderState, Scene};

use super::core::LumenApp;

impl LumenApp {
    /// Create the window, initialize the GPU renderer and build the scene.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        match self.try_initialize(event_loop) {
            Ok(()) => {
                for line in self.registry.help_lines() {
                    tracing::info!("  {line}");
                }
                true
            }
            Err(e) => {
                tracing::error!("Initialization failed: {e}");
                false
            }
        }
    }

    fn try_initialize(&mut self, event_loop: &ActiveEventLoop) -> lumen_common::Result<()> {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                window_config.width,
                window_config.height,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| LumenError::Other(format!("failed to create window: {e}")))?;

        let render_state =
            pollster::block_on(RenderState::new(window.clone(), window_config.vsync))?;
        let scene = Scene::build(&render_state.gpu, &self.config)?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.scene = Some(scene);
        Ok(())
    }
}
