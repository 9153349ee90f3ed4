//! # gpudesc Resources
//!
//! Descriptions of the GPU memory a generated kernel binds to:
//!
//! - [`descriptors`]: one value record per memory kind
//! - [`GpuResources`]: the aggregate an object contributes to a kernel
//! - [`BindingTable`]: slot assignment and kernel parameter emission

pub mod binding;
pub mod descriptors;
pub mod gpu_resources;

pub use binding::{BindingResource, BindingSlot, BindingTable};
pub use descriptors::{
    GpuBufferDescriptor, GpuCustomMemoryDescriptor, GpuImage2DArrayDescriptor,
    GpuImage2DDescriptor, GpuImage3DDescriptor, GpuImageBufferDescriptor, ResourceKind,
};
pub use gpu_resources::GpuResources;
