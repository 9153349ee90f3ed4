//! Scalar Value Types
//!
//! Element data types, access modes and memory spaces shared by every
//! descriptor. These are plain `Copy` tags; the only behaviour they carry is
//! mapping themselves onto OpenCL C spellings for generated kernel code.

use serde::{Deserialize, Serialize};

/// Element data type of a GPU memory object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataType {
    #[default]
    Unknown,
    Bool,
    Float16,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
}

impl DataType {
    /// Size of one scalar of this type in bytes. `Unknown` reports 0.
    #[must_use]
    pub const fn size_in_bytes(self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::Bool | Self::Int8 | Self::Uint8 => 1,
            Self::Float16 | Self::Int16 | Self::Uint16 => 2,
            Self::Float32 | Self::Int32 | Self::Uint32 => 4,
            Self::Float64 | Self::Int64 | Self::Uint64 => 8,
        }
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float16 | Self::Float32 | Self::Float64)
    }

    #[must_use]
    pub const fn is_signed_integer(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    #[must_use]
    pub const fn is_unsigned_integer(self) -> bool {
        matches!(self, Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64)
    }

    /// OpenCL C scalar type name.
    #[must_use]
    pub const fn cl_scalar_name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Bool => "bool",
            Self::Float16 => "half",
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::Int8 => "char",
            Self::Int16 => "short",
            Self::Int32 => "int",
            Self::Int64 => "long",
            Self::Uint8 => "uchar",
            Self::Uint16 => "ushort",
            Self::Uint32 => "uint",
            Self::Uint64 => "ulong",
        }
    }

    /// OpenCL C vector type name, e.g. `float4`.
    ///
    /// A width of 0 or 1 yields the scalar name.
    #[must_use]
    pub fn cl_vector_name(self, width: u32) -> String {
        if width <= 1 {
            self.cl_scalar_name().to_string()
        } else {
            format!("{}{width}", self.cl_scalar_name())
        }
    }
}

/// How a kernel accesses a memory object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessType {
    #[default]
    Unknown,
    Read,
    Write,
    ReadWrite,
}

impl AccessType {
    /// Image access qualifier used in kernel parameter lists.
    #[must_use]
    pub const fn cl_image_qualifier(self) -> &'static str {
        match self {
            Self::Unknown | Self::Read => "__read_only",
            Self::Write => "__write_only",
            Self::ReadWrite => "__read_write",
        }
    }

    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

/// Address space a buffer lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MemoryType {
    #[default]
    Global,
    Constant,
    Local,
}

impl MemoryType {
    #[must_use]
    pub const fn cl_qualifier(self) -> &'static str {
        match self {
            Self::Global => "__global",
            Self::Constant => "__constant",
            Self::Local => "__local",
        }
    }
}
