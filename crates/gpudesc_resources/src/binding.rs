//! Binding Slot Assignment
//!
//! Turns a [`GpuResources`] aggregate into an ordered table of binding slots
//! and emits the matching kernel parameter declarations.
//!
//! Slot `i` is the `i`-th name of [`GpuResources::names`]. Names must be
//! unique across all kinds; a collision is rejected instead of silently
//! shadowing a binding.

use rustc_hash::FxHashMap;

use gpudesc_core::{GpuDescError, Result};

use crate::descriptors::{
    GpuBufferDescriptor, GpuCustomMemoryDescriptor, GpuImage2DArrayDescriptor,
    GpuImage2DDescriptor, GpuImage3DDescriptor, GpuImageBufferDescriptor, ResourceKind,
};
use crate::gpu_resources::GpuResources;

/// What a single binding slot holds.
#[derive(Debug, Clone)]
pub enum BindingResource {
    /// Scalar `int` argument.
    Int,
    /// Scalar `float` argument.
    Float,
    Buffer(GpuBufferDescriptor),
    Image2D(GpuImage2DDescriptor),
    Image2DArray(GpuImage2DArrayDescriptor),
    Image3D(GpuImage3DDescriptor),
    ImageBuffer(GpuImageBufferDescriptor),
    CustomMemory(GpuCustomMemoryDescriptor),
}

impl BindingResource {
    /// Kind tag of this binding.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Int => ResourceKind::Int,
            Self::Float => ResourceKind::Float,
            Self::Buffer(_) => ResourceKind::Buffer,
            Self::Image2D(_) => ResourceKind::Image2D,
            Self::Image2DArray(_) => ResourceKind::Image2DArray,
            Self::Image3D(_) => ResourceKind::Image3D,
            Self::ImageBuffer(_) => ResourceKind::ImageBuffer,
            Self::CustomMemory(_) => ResourceKind::CustomMemory,
        }
    }

    /// OpenCL C kernel parameter declaring this binding as `name`.
    #[must_use]
    pub fn declaration(&self, name: &str) -> String {
        match self {
            Self::Int => format!("int {name}"),
            Self::Float => format!("float {name}"),
            Self::Buffer(desc) => {
                let mut decl = format!(
                    "{} {}* {}",
                    desc.memory_type.cl_qualifier(),
                    desc.cl_element_type(),
                    name
                );
                for attr in &desc.attributes {
                    decl.push_str(" __attribute__((");
                    decl.push_str(attr);
                    decl.push_str("))");
                }
                decl
            }
            Self::Image2D(desc) => {
                format!("{} image2d_t {name}", desc.access_type.cl_image_qualifier())
            }
            Self::Image2DArray(desc) => {
                format!("{} image2d_array_t {name}", desc.access_type.cl_image_qualifier())
            }
            Self::Image3D(desc) => {
                format!("{} image3d_t {name}", desc.access_type.cl_image_qualifier())
            }
            Self::ImageBuffer(desc) => {
                format!("{} image1d_buffer_t {name}", desc.access_type.cl_image_qualifier())
            }
            Self::CustomMemory(desc) => format!("{} {name}", desc.type_name),
        }
    }
}

/// One assigned slot.
#[derive(Debug, Clone)]
pub struct BindingSlot {
    /// Slot number, starting at 0.
    pub index: u32,
    /// Binding name as declared in the kernel.
    pub name: String,
    /// What is bound at this slot.
    pub resource: BindingResource,
}

/// Ordered binding slots of one kernel.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    slots: Vec<BindingSlot>,
    lookup: FxHashMap<String, u32>,
}

impl BindingTable {
    /// Assigns slots `0..N` in binding precedence order.
    pub fn new(resources: &GpuResources) -> Result<Self> {
        resources.validate()?;

        let mut slots = Vec::with_capacity(resources.len());
        let mut lookup = FxHashMap::default();

        for (index, (name, resource)) in resources.entries().enumerate() {
            if let BindingResource::CustomMemory(desc) = &resource
                && desc.type_name.is_empty()
            {
                log::warn!("Rejecting custom memory binding '{name}' without a type name");
                return Err(GpuDescError::EmptyCustomTypeName(name.to_string()));
            }

            let index = index as u32;
            lookup.insert(name.to_string(), index);
            slots.push(BindingSlot {
                index,
                name: name.to_string(),
                resource,
            });
        }

        log::debug!("Binding table built with {} slots", slots.len());

        Ok(Self { slots, lookup })
    }

    /// Slot number of the binding called `name`.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<u32> {
        self.lookup.get(name).copied()
    }

    #[must_use]
    pub fn get(&self, index: u32) -> Option<&BindingSlot> {
        self.slots.get(index as usize)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BindingSlot> {
        self.slots.iter()
    }

    /// Kernel parameter list, one declaration per slot.
    #[must_use]
    pub fn kernel_signature(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.resource.declaration(&slot.name))
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

#[cfg(test)]
mod tests {
    use gpudesc_core::{AccessType, DataType, MemoryType};

    use super::*;

    #[test]
    fn test_buffer_declaration() {
        let desc = GpuBufferDescriptor {
            data_type: DataType::Float16,
            access_type: AccessType::Read,
            element_size: 8,
            memory_type: MemoryType::Constant,
            attributes: vec!["aligned(16)".into(), "restrict".into()],
        };

        assert_eq!(
            BindingResource::Buffer(desc).declaration("weights"),
            "__constant half4* weights __attribute__((aligned(16))) __attribute__((restrict))"
        );
    }

    #[test]
    fn test_image_declarations() {
        let read = GpuImage2DDescriptor {
            data_type: DataType::Float32,
            access_type: AccessType::Read,
        };
        let write = GpuImage3DDescriptor {
            data_type: DataType::Float32,
            access_type: AccessType::Write,
        };

        assert_eq!(
            BindingResource::Image2D(read).declaration("tex"),
            "__read_only image2d_t tex"
        );
        assert_eq!(
            BindingResource::Image3D(write).declaration("vol"),
            "__write_only image3d_t vol"
        );

        let layers = GpuImage2DArrayDescriptor {
            data_type: DataType::Float16,
            access_type: AccessType::Write,
        };
        let texels = GpuImageBufferDescriptor {
            data_type: DataType::Uint8,
            access_type: AccessType::ReadWrite,
        };
        assert_eq!(
            BindingResource::Image2DArray(layers).declaration("a"),
            "__write_only image2d_array_t a"
        );
        assert_eq!(
            BindingResource::ImageBuffer(texels).declaration("b"),
            "__read_write image1d_buffer_t b"
        );
    }

    #[test]
    fn test_local_buffer_declaration() {
        let desc = GpuBufferDescriptor {
            data_type: DataType::Int32,
            access_type: AccessType::ReadWrite,
            element_size: 8,
            memory_type: MemoryType::Local,
            attributes: Vec::new(),
        };

        assert_eq!(
            BindingResource::Buffer(desc).declaration("scratch"),
            "__local int2* scratch"
        );
    }

    #[test]
    fn test_slots_follow_names() {
        let mut resources = GpuResources::new();
        resources.custom_memories.push((
            "smp".into(),
            GpuCustomMemoryDescriptor {
                type_name: "sampler_t".into(),
            },
        ));
        resources
            .buffers
            .push(("src".into(), GpuBufferDescriptor::default()));
        resources.ints.push("count".into());

        let table = BindingTable::new(&resources).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.slot("count"), Some(0));
        assert_eq!(table.slot("src"), Some(1));
        assert_eq!(table.slot("smp"), Some(2));
        assert_eq!(table.slot("missing"), None);
        assert_eq!(table.get(2).map(|s| s.resource.kind()), Some(ResourceKind::CustomMemory));

        let names: Vec<_> = table.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, resources.names());
    }

    #[test]
    fn test_rejects_empty_custom_type_name() {
        let mut resources = GpuResources::new();
        resources
            .custom_memories
            .push(("smp".into(), GpuCustomMemoryDescriptor::default()));

        assert!(matches!(
            BindingTable::new(&resources),
            Err(GpuDescError::EmptyCustomTypeName(name)) if name == "smp"
        ));
    }

    #[test]
    fn test_kernel_signature() {
        let mut resources = GpuResources::new();
        resources.ints.push("n".into());
        resources.floats.push("scale".into());

        let table = BindingTable::new(&resources).unwrap();
        assert_eq!(table.kernel_signature(), "int n,\nfloat scale");
    }
}
