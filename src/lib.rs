//! # gpudesc
//!
//! Describes the GPU memory objects a generated compute kernel binds to, and
//! answers the symbolic queries kernel source templates make about them
//! before the binding layout is final.
//!
//! # Crates
//!
//! - `gpudesc_core`: data/access/memory tags, errors, annotation storage
//! - `gpudesc_resources`: resource descriptors, aggregates, binding tables
//! - `gpudesc_objects`: object descriptors, selector resolution, serialization
//!
//! # Example
//!
//! ```rust
//! use gpudesc::prelude::*;
//!
//! let mut weights = BufferDescriptor::new(DataType::Float32, 16);
//! weights.set_access(AccessType::Read);
//!
//! let mut args = ObjectArgs::new();
//! args.add_int("count");
//! args.add_object("weights", Box::new(weights)).unwrap();
//!
//! let read = args
//!     .perform_selector("weights", "Read", &["gid".to_string()], &[])
//!     .unwrap();
//! assert_eq!(read, "buffer[gid]");
//!
//! let table = args.binding_table().unwrap();
//! assert_eq!(table.slot("weights_buffer"), Some(1));
//! ```

pub use gpudesc_objects::serialization;

pub use gpudesc_core::{AccessType, DataType, GpuDescError, MemoryType, Result, SelectorError, StateVars};
pub use gpudesc_objects::{
    BufferDescriptor, ConstExprResolver, GpuObject, GpuObjectDescriptor, GpuObjectPtr, ObjectArgs,
    ObjectRecord, ResourceProvider, SelectorResolver, Texture2DDescriptor,
};
pub use gpudesc_resources::{
    BindingResource, BindingSlot, BindingTable, GpuBufferDescriptor, GpuCustomMemoryDescriptor,
    GpuImage2DArrayDescriptor, GpuImage2DDescriptor, GpuImage3DDescriptor,
    GpuImageBufferDescriptor, GpuResources, ResourceKind,
};

/// Everything a code generator usually needs.
pub mod prelude {
    pub use crate::{
        AccessType, BindingTable, BufferDescriptor, ConstExprResolver, DataType, GpuObject,
        GpuObjectDescriptor, GpuResources, MemoryType, ObjectArgs, ResourceProvider,
        SelectorError, SelectorResolver, Texture2DDescriptor,
    };
}
