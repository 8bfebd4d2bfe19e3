//! CPU staging bytes plus the GPU buffer they are uploaded to.

use std::sync::Arc;

use super::layout::UniformLayout;
use super::value::UniformValue;
use super::UniformSink;

/// Named writes into a byte image of one uniform block.
///
/// Unknown names and kind mismatches are dropped with a trace log, the
/// same as writing to an invalid uniform location.
#[derive(Debug, Clone)]
pub struct UniformStaging {
    layout: Arc<UniformLayout>,
    bytes: Vec<u8>,
    dirty: bool,
}

impl UniformStaging {
    pub fn new(layout: Arc<UniformLayout>) -> Self {
        let bytes = vec![0; layout.size() as usize];
        Self {
            layout,
            bytes,
            dirty: true,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn layout(&self) -> &UniformLayout {
        &self.layout
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return the bytes if anything changed since the last call.
    pub fn take_dirty(&mut self) -> Option<&[u8]> {
        if self.dirty {
            self.dirty = false;
            Some(&self.bytes)
        } else {
            None
        }
    }
}

impl UniformSink for UniformStaging {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        let Some(location) = self.layout.location(name) else {
            tracing::trace!("uniform {name} not in program layout, skipped");
            return;
        };
        if location.kind != value.kind() {
            tracing::trace!(
                "uniform {name} is {:?}, got {:?}; skipped",
                location.kind,
                value.kind()
            );
            return;
        }

        let start = location.offset as usize;
        let end = start + location.kind.size() as usize;
        let Some(slot) = self.bytes.get_mut(start..end) else {
            tracing::trace!("uniform {name} lies outside the block, skipped");
            return;
        };

        let mut scratch = [0u8; 64];
        let scratch = &mut scratch[..end - start];
        value.write_bytes(scratch);
        if slot != scratch {
            slot.copy_from_slice(scratch);
            self.dirty = true;
        }
    }
}

/// Uniform buffer and bind group for one (object, program) pair.
pub struct UniformBlock {
    staging: UniformStaging,
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl UniformBlock {
    /// `make_bind_group` receives the freshly created buffer and must return
    /// a bind group built against the owning program's layout.
    pub fn new(
        device: &wgpu::Device,
        layout: Arc<UniformLayout>,
        label: &str,
        make_bind_group: impl FnOnce(&wgpu::Buffer) -> wgpu::BindGroup,
    ) -> Self {
        let staging = UniformStaging::new(layout);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} uniforms")),
            size: staging.bytes().len() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = make_bind_group(&buffer);
        Self {
            staging,
            buffer,
            bind_group,
        }
    }

    /// Write the staging bytes to the GPU if they changed.
    pub fn upload(&mut self, queue: &wgpu::Queue) {
        if let Some(bytes) = self.staging.take_dirty() {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

impl UniformSink for UniformBlock {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.staging.set_uniform(name, value);
    }
}
