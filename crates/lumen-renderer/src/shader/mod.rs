//! Shader programs: WGSL stages, uniform layouts and pipeline variants.

mod builtin;
mod library;
mod pipeline_key;
mod program;

pub use builtin::BuiltinProgram;
pub use library::{ProgramId, ShaderLibrary};
pub use pipeline_key::{PipelineKey, PolygonFill, StencilMode, STENCIL_REFERENCE};
pub use program::{DepthMode, ProgramDescriptor, ShaderProgram, TextureSlot};
