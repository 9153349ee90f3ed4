//! Resource Descriptor Variants
//!
//! One plain record per kind of GPU memory a kernel can bind. The records
//! carry only what is needed to emit a binding declaration; they never own
//! device memory.

use std::fmt;

use serde::{Deserialize, Serialize};

use gpudesc_core::{AccessType, DataType, MemoryType};

/// 2D image binding (`image2d_t`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GpuImage2DDescriptor {
    /// Texel channel type.
    pub data_type: DataType,
    /// Kernel access qualifier.
    pub access_type: AccessType,
}

/// 3D image binding (`image3d_t`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GpuImage3DDescriptor {
    /// Texel channel type.
    pub data_type: DataType,
    /// Kernel access qualifier.
    pub access_type: AccessType,
}

/// Layered 2D image binding (`image2d_array_t`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GpuImage2DArrayDescriptor {
    /// Texel channel type.
    pub data_type: DataType,
    /// Kernel access qualifier.
    pub access_type: AccessType,
}

/// 1D image view over a buffer (`image1d_buffer_t`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GpuImageBufferDescriptor {
    /// Texel channel type.
    pub data_type: DataType,
    /// Kernel access qualifier.
    pub access_type: AccessType,
}

/// Driver or extension specific memory, known only by its type name.
///
/// The type name must not be empty. Nothing here enforces that; the binding
/// table rejects empty names when a kernel is laid out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpuCustomMemoryDescriptor {
    /// Declared parameter type, emitted verbatim.
    pub type_name: String,
}

/// Linear buffer binding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpuBufferDescriptor {
    /// Scalar type of each element.
    pub data_type: DataType,
    pub access_type: AccessType,
    /// Element stride in bytes.
    pub element_size: u32,
    /// Address space qualifier.
    pub memory_type: MemoryType,
    /// Free-form attribute tags, emitted in order.
    pub attributes: Vec<String>,
}

impl GpuBufferDescriptor {
    /// Number of scalars per element, at least 1.
    #[must_use]
    pub fn vector_width(&self) -> u32 {
        match self.data_type.size_in_bytes() {
            0 => 1,
            scalar => (self.element_size / scalar).max(1),
        }
    }

    /// OpenCL C type of one element, e.g. `float4` for a 16 byte float stride.
    #[must_use]
    pub fn cl_element_type(&self) -> String {
        self.data_type.cl_vector_name(self.vector_width())
    }
}

/// Kind tag of a binding, in binding precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
    Int,
    Float,
    Buffer,
    Image2D,
    Image2DArray,
    Image3D,
    ImageBuffer,
    CustomMemory,
}

impl ResourceKind {
    /// Short lowercase name used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Buffer => "buffer",
            Self::Image2D => "image2d",
            Self::Image2DArray => "image2d_array",
            Self::Image3D => "image3d",
            Self::ImageBuffer => "image_buffer",
            Self::CustomMemory => "custom_memory",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
