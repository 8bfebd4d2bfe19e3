//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use lumen_common::Action;
use lumen_platform::{normalize_winit_key, KeyCombo};

use super::core::LumenApp;

impl ApplicationHandler for LumenApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(ref mut rs) = self.render_state {
                    rs.resize(size.width, size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.held_keys.clear();
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
                self.request_redraw();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
        }
    }
}

impl LumenApp {
    /// Track held movement keys and dispatch bound actions on press.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key,
            state,
            repeat,
            ..
        } = event;

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };
        let normalized = normalize_winit_key(&key_name);

        if state == ElementState::Released {
            self.held_keys.release(&normalized);
            return;
        }
        self.held_keys.press(&normalized);
        if repeat {
            return;
        }

        let combo = KeyCombo::from_winit(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            normalized,
        );
        if let Some(action) = self.registry.lookup(&combo) {
            self.dispatch(action);
        }
    }

    fn dispatch(&mut self, action: Action) {
        tracing::debug!("Action: {}", action.label());
        match action {
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
            toggle => {
                if let Some(ref mut scene) = self.scene {
                    scene.apply(toggle);
                    tracing::info!("{} -> {:?}", toggle.label(), scene.toggles());
                }
            }
        }
    }
}
