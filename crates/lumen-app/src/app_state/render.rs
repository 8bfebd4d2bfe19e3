//! Per-frame update and render.

use lumen_renderer::FrameOutcome;

use super::core::LumenApp;

/// Log FPS every this many frames at debug level.
const FPS_LOG_INTERVAL: u64 = 600;

impl LumenApp {
    /// Advance the camera and scene by one frame, then draw it.
    pub(super) fn render_frame(&mut self) {
        let (Some(rs), Some(scene)) = (self.render_state.as_mut(), self.scene.as_mut()) else {
            return;
        };

        let dt = self.timer.begin_frame();
        self.camera.apply(self.held_keys.intent(), dt);

        let view = self.camera.frame_view(rs.gpu.size.aspect());
        scene.update(dt, &view);

        match rs.render(scene) {
            Ok(FrameOutcome::Presented) => {}
            Ok(FrameOutcome::Skipped) => tracing::trace!("Frame skipped"),
            Err(e) => {
                tracing::error!("Render error: {e}");
                self.should_exit = true;
            }
        }

        if self.timer.frame_count() % FPS_LOG_INTERVAL == 0 {
            tracing::debug!(
                fps = self.timer.fps(),
                frame_ms = self.timer.frame_time_ms(),
                "Frame timing"
            );
        }
    }
}
