//! Named uniform slots on top of wgpu uniform buffers.
//!
//! wgpu binds whole buffers, so each program publishes a [`UniformLayout`]
//! mapping names like `"DirLight.Color"` to byte offsets, and each drawable
//! keeps one [`UniformBlock`] per program it is drawn with.

mod block;
mod layout;
mod value;

pub use block::{UniformBlock, UniformStaging};
pub use layout::{StructFields, UniformLayout, UniformLayoutBuilder, UniformLocation};
pub use value::{UniformKind, UniformValue};

/// Destination for named uniform writes.
///
/// Implementations silently ignore names they do not know.
pub trait UniformSink {
    fn set_uniform(&mut self, name: &str, value: UniformValue);
}
