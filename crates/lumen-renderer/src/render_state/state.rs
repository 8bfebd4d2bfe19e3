use std::sync::Arc;
use winit::window::Window;

use crate::gpu::{GpuContext, RendererError};

use super::helpers::create_depth_target;

/// GPU context plus the per-surface attachments every frame needs.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) depth_view: wgpu::TextureView,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, vsync).await?;
        let depth_view = create_depth_target(&gpu.device, gpu.size);
        Ok(Self { gpu, depth_view })
    }

    /// Reconfigure the surface and rebuild the depth target.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            tracing::debug!("Ignoring zero-sized resize (minimised)");
            return;
        }
        self.gpu.resize(width, height);
        self.depth_view = create_depth_target(&self.gpu.device, self.gpu.size);
        tracing::debug!(width, height, "Surface resized");
    }
}
