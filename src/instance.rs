//! Flat per-category instance buffers consumed by the renderer.
//!
//! Each slot is a GPU-ready transform plus color. The buffer carries a single
//! dirty flag that is raised once per category pass and consumed once per
//! frame by the rendering collaborator; slots are never flagged individually.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// One instance slot (80 bytes, 16-byte aligned).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RawInstance {
    /// Column-major world transform.
    pub transform: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Fixed-length instance array with a once-per-pass dirty flag.
pub struct InstanceBuffer {
    instances: Vec<RawInstance>,
    dirty: bool,
}

impl InstanceBuffer {
    /// Allocate a zeroed buffer of the given length. The length never changes
    /// after creation; a count change rebuilds the whole buffer.
    pub fn new(len: usize) -> Self {
        Self {
            instances: vec![RawInstance::zeroed(); len],
            dirty: false,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Write one slot. Does not touch the dirty flag.
    #[inline]
    pub fn write(&mut self, index: usize, transform: Mat4, color: Vec3) {
        let slot = &mut self.instances[index];
        slot.transform = transform.to_cols_array_2d();
        slot.color = color.to_array();
    }

    /// Raise the dirty flag. Called once after a full category pass.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consume the dirty flag; the renderer calls this once per frame to
    /// decide whether to re-upload.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn instances(&self) -> &[RawInstance] {
        &self.instances
    }

    /// Byte view for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}
