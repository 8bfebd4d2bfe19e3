//! LumenApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use lumen_config::LumenConfig;
use lumen_platform::{HeldKeys, KeybindRegistry};
use lumen_renderer::{FrameTimer, RenderState, Scene};

use crate::camera::Camera;

/// Top-level application state.
pub struct LumenApp {
    pub(super) config: LumenConfig,
    pub(super) registry: KeybindRegistry,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    pub(super) scene: Option<Scene>,

    // Input
    pub(super) held_keys: HeldKeys,
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) camera: Camera,
    pub(super) timer: FrameTimer,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl LumenApp {
    pub fn new(config: LumenConfig, registry: KeybindRegistry) -> Self {
        let camera = Camera::from_config(&config.camera);
        Self {
            config,
            registry,
            window: None,
            render_state: None,
            scene: None,
            held_keys: HeldKeys::new(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            camera,
            timer: FrameTimer::new(),
            should_exit: false,
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
