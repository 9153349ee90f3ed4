//! # gpudesc Objects
//!
//! Object descriptors: the units a kernel code generator queries while
//! expanding kernel source.
//!
//! - [`object`]: capability traits, the [`GpuObject`] contract and the base
//!   [`GpuObjectDescriptor`]
//! - [`BufferDescriptor`], [`Texture2DDescriptor`]: concrete object kinds
//! - [`ObjectArgs`]: per-kernel registry routing queries to named objects
//! - [`serialization`]: cache records for descriptors

pub mod args;
pub mod buffer;
pub mod object;
pub mod serialization;
pub mod texture2d;

pub use args::ObjectArgs;
pub use buffer::BufferDescriptor;
pub use object::{
    ConstExprResolver, GpuObject, GpuObjectDescriptor, GpuObjectPtr, ResourceProvider,
    SelectorResolver,
};
pub use serialization::{ObjectDescriptorRecord, ObjectRecord};
pub use texture2d::Texture2DDescriptor;
