//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, renderer, scene, camera and input.

mod core;
mod event_handler;
mod init;
mod render;

pub use core::LumenApp;
