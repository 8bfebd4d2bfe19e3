use lumen_common::LumenError;

/// Errors that can occur during GPU rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    /// Degenerate geometry parameters, reported before any allocation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Texture decode or shader compile failure.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<RendererError> for LumenError {
    fn from(e: RendererError) -> Self {
        match e {
            RendererError::InvalidArgument(msg) => LumenError::InvalidArgument(msg),
            RendererError::ResourceUnavailable(msg) => LumenError::ResourceUnavailable(msg),
            other => LumenError::Renderer(other.to_string()),
        }
    }
}

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

impl PhysicalSize {
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}
