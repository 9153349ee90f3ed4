//! Resource Aggregate
//!
//! [`GpuResources`] collects every scalar and memory binding one object
//! contributes to a kernel. It is a transient value: objects build it on
//! demand and hand it out by value.
//!
//! # Binding order
//!
//! [`GpuResources::names`] concatenates the groups in a fixed precedence:
//!
//! ```text
//! ints, floats, buffers, images2d, image2d_arrays, images3d, image_buffers, custom_memories
//! ```
//!
//! Binding slots are numbered in that order, so it must never change.
//! Within a group, declaration order is kept.

use rustc_hash::FxHashMap;

use gpudesc_core::{GpuDescError, Result};

use crate::binding::BindingResource;
use crate::descriptors::{
    GpuBufferDescriptor, GpuCustomMemoryDescriptor, GpuImage2DArrayDescriptor,
    GpuImage2DDescriptor, GpuImage3DDescriptor, GpuImageBufferDescriptor, ResourceKind,
};

/// Flattened list of scalar and memory bindings owned by one object.
#[derive(Debug, Clone, Default)]
pub struct GpuResources {
    /// Scalar `int` arguments.
    pub ints: Vec<String>,
    /// Scalar `float` arguments.
    pub floats: Vec<String>,
    /// Linear buffers.
    pub buffers: Vec<(String, GpuBufferDescriptor)>,
    /// 2D images.
    pub images2d: Vec<(String, GpuImage2DDescriptor)>,
    /// Layered 2D images.
    pub image2d_arrays: Vec<(String, GpuImage2DArrayDescriptor)>,
    /// 3D images.
    pub images3d: Vec<(String, GpuImage3DDescriptor)>,
    /// 1D images backed by a buffer.
    pub image_buffers: Vec<(String, GpuImageBufferDescriptor)>,
    /// Custom memory objects, declared by type name.
    pub custom_memories: Vec<(String, GpuCustomMemoryDescriptor)>,
}

impl GpuResources {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All binding names in binding precedence order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.len());
        names.extend(self.ints.iter().cloned());
        names.extend(self.floats.iter().cloned());
        names.extend(self.buffers.iter().map(|(name, _)| name.clone()));
        names.extend(self.images2d.iter().map(|(name, _)| name.clone()));
        names.extend(self.image2d_arrays.iter().map(|(name, _)| name.clone()));
        names.extend(self.images3d.iter().map(|(name, _)| name.clone()));
        names.extend(self.image_buffers.iter().map(|(name, _)| name.clone()));
        names.extend(self.custom_memories.iter().map(|(name, _)| name.clone()));
        names
    }

    /// Every binding with its descriptor, in the same order as [`Self::names`].
    pub fn entries(&self) -> impl Iterator<Item = (&str, BindingResource)> + '_ {
        let ints = self
            .ints
            .iter()
            .map(|name| (name.as_str(), BindingResource::Int));
        let floats = self
            .floats
            .iter()
            .map(|name| (name.as_str(), BindingResource::Float));
        let buffers = self
            .buffers
            .iter()
            .map(|(name, d)| (name.as_str(), BindingResource::Buffer(d.clone())));
        let images2d = self
            .images2d
            .iter()
            .map(|(name, d)| (name.as_str(), BindingResource::Image2D(*d)));
        let image2d_arrays = self
            .image2d_arrays
            .iter()
            .map(|(name, d)| (name.as_str(), BindingResource::Image2DArray(*d)));
        let images3d = self
            .images3d
            .iter()
            .map(|(name, d)| (name.as_str(), BindingResource::Image3D(*d)));
        let image_buffers = self
            .image_buffers
            .iter()
            .map(|(name, d)| (name.as_str(), BindingResource::ImageBuffer(*d)));
        let custom_memories = self
            .custom_memories
            .iter()
            .map(|(name, d)| (name.as_str(), BindingResource::CustomMemory(d.clone())));

        ints.chain(floats)
            .chain(buffers)
            .chain(images2d)
            .chain(image2d_arrays)
            .chain(images3d)
            .chain(image_buffers)
            .chain(custom_memories)
    }

    /// Total number of bindings across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ints.len()
            + self.floats.len()
            + self.buffers.len()
            + self.images2d.len()
            + self.image2d_arrays.len()
            + self.images3d.len()
            + self.image_buffers.len()
            + self.custom_memories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that no binding name is used twice, across all kinds.
    pub fn validate(&self) -> Result<()> {
        let mut seen: FxHashMap<&str, ResourceKind> = FxHashMap::default();
        for (name, resource) in self.entries() {
            let kind = resource.kind();
            if let Some(first) = seen.insert(name, kind) {
                return Err(GpuDescError::DuplicateBindingName {
                    name: name.to_string(),
                    first: first.to_string(),
                    second: kind.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Appends `other`, renaming each binding to `{prefix}_{name}`.
    pub fn merge_prefixed(&mut self, prefix: &str, other: GpuResources) {
        let rename = |name: String| format!("{prefix}_{name}");

        self.ints.extend(other.ints.into_iter().map(rename));
        self.floats.extend(other.floats.into_iter().map(rename));
        self.buffers
            .extend(other.buffers.into_iter().map(|(n, d)| (rename(n), d)));
        self.images2d
            .extend(other.images2d.into_iter().map(|(n, d)| (rename(n), d)));
        self.image2d_arrays
            .extend(other.image2d_arrays.into_iter().map(|(n, d)| (rename(n), d)));
        self.images3d
            .extend(other.images3d.into_iter().map(|(n, d)| (rename(n), d)));
        self.image_buffers
            .extend(other.image_buffers.into_iter().map(|(n, d)| (rename(n), d)));
        self.custom_memories
            .extend(other.custom_memories.into_iter().map(|(n, d)| (rename(n), d)));
    }
}
