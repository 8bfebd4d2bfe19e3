pub mod gpu;
pub mod lighting;
pub mod mesh;
pub mod object;
pub mod perf;
pub mod render_state;
pub mod scene;
pub mod shader;
pub mod texture;
pub mod transform;
pub mod uniforms;

pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use lighting::LightingState;
pub use mesh::{generate_sphere, Mesh, Vertex};
pub use object::RenderableObject;
pub use perf::FrameTimer;
pub use render_state::{FrameOutcome, RenderState};
pub use scene::{CameraView, RenderToggles, Scene};
pub use transform::Transform;
