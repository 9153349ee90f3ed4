//! Descriptor Serialization
//!
//! Compiled programs are cached together with the descriptors of their
//! arguments. This module is the only place that reads and writes the shared
//! descriptor fields wholesale:
//!
//! - [`encode_descriptor`] / [`decode_descriptor`] move the annotation table
//!   and access mode in and out of an [`ObjectDescriptorRecord`].
//! - Each concrete kind has a record embedding the base record plus its own
//!   fields, including payload bytes.
//! - [`ObjectRecord`] tags the kind so a cache entry can be restored without
//!   knowing it up front.
//!
//! Records are plain serde types; [`to_bytes`] and [`from_bytes`] fix the
//! byte encoding used by the program cache.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gpudesc_core::{AccessType, DataType, MemoryType, Result};

use crate::buffer::BufferDescriptor;
use crate::object::{GpuObjectDescriptor, GpuObjectPtr};
use crate::texture2d::Texture2DDescriptor;

/// Persisted form of the fields every descriptor shares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDescriptorRecord {
    pub state_vars: BTreeMap<String, String>,
    pub access_type: AccessType,
}

#[must_use]
pub fn encode_descriptor(desc: &GpuObjectDescriptor) -> ObjectDescriptorRecord {
    ObjectDescriptorRecord {
        state_vars: desc.state_vars.snapshot(),
        access_type: desc.access_type,
    }
}

pub fn decode_descriptor(record: &ObjectDescriptorRecord, desc: &mut GpuObjectDescriptor) {
    desc.state_vars.replace(record.state_vars.clone());
    desc.access_type = record.access_type;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferDescriptorRecord {
    pub base: ObjectDescriptorRecord,
    pub element_type: DataType,
    pub element_size: u32,
    pub memory_type: MemoryType,
    pub attributes: Vec<String>,
    pub size: u64,
    pub data: Vec<u8>,
}

impl From<&BufferDescriptor> for BufferDescriptorRecord {
    fn from(desc: &BufferDescriptor) -> Self {
        Self {
            base: encode_descriptor(&desc.base),
            element_type: desc.element_type,
            element_size: desc.element_size,
            memory_type: desc.memory_type,
            attributes: desc.attributes.clone(),
            size: desc.size,
            data: desc.data.clone(),
        }
    }
}

impl From<BufferDescriptorRecord> for BufferDescriptor {
    fn from(record: BufferDescriptorRecord) -> Self {
        let mut desc = BufferDescriptor {
            element_type: record.element_type,
            element_size: record.element_size,
            memory_type: record.memory_type,
            attributes: record.attributes,
            size: record.size,
            data: record.data,
            ..Default::default()
        };
        decode_descriptor(&record.base, &mut desc.base);
        desc
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture2DDescriptorRecord {
    pub base: ObjectDescriptorRecord,
    pub element_type: DataType,
    pub normalized: bool,
    pub normalized_type: DataType,
    pub size: [u32; 2],
    pub data: Vec<u8>,
}

impl From<&Texture2DDescriptor> for Texture2DDescriptorRecord {
    fn from(desc: &Texture2DDescriptor) -> Self {
        Self {
            base: encode_descriptor(&desc.base),
            element_type: desc.element_type,
            normalized: desc.normalized,
            normalized_type: desc.normalized_type,
            size: desc.size,
            data: desc.data.clone(),
        }
    }
}

impl From<Texture2DDescriptorRecord> for Texture2DDescriptor {
    fn from(record: Texture2DDescriptorRecord) -> Self {
        let mut desc = Texture2DDescriptor {
            element_type: record.element_type,
            normalized: record.normalized,
            normalized_type: record.normalized_type,
            size: record.size,
            data: record.data,
            ..Default::default()
        };
        decode_descriptor(&record.base, &mut desc.base);
        desc
    }
}

/// Kind-tagged cache record of one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ObjectRecord {
    Base(ObjectDescriptorRecord),
    Buffer(BufferDescriptorRecord),
    Texture2D(Texture2DDescriptorRecord),
}

impl ObjectRecord {
    /// Rebuilds the described object.
    #[must_use]
    pub fn into_object(self) -> GpuObjectPtr {
        match self {
            Self::Base(record) => {
                let mut desc = GpuObjectDescriptor::new();
                decode_descriptor(&record, &mut desc);
                Box::new(desc)
            }
            Self::Buffer(record) => Box::new(BufferDescriptor::from(record)),
            Self::Texture2D(record) => Box::new(Texture2DDescriptor::from(record)),
        }
    }
}

impl From<&GpuObjectDescriptor> for ObjectRecord {
    fn from(desc: &GpuObjectDescriptor) -> Self {
        Self::Base(encode_descriptor(desc))
    }
}

impl From<&BufferDescriptor> for ObjectRecord {
    fn from(desc: &BufferDescriptor) -> Self {
        Self::Buffer(desc.into())
    }
}

impl From<&Texture2DDescriptor> for ObjectRecord {
    fn from(desc: &Texture2DDescriptor) -> Self {
        Self::Texture2D(desc.into())
    }
}

pub fn to_bytes(record: &ObjectRecord) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(record)?)
}

pub fn from_bytes(bytes: &[u8]) -> Result<ObjectRecord> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use gpudesc_core::GpuDescError;

    use super::*;
    use crate::object::GpuObject;

    #[test]
    fn test_base_round_trip() {
        let desc = GpuObjectDescriptor::with_access(AccessType::ReadWrite);
        desc.set_state_var("batch", "1");
        desc.set_state_var("layout", "HWC");

        let bytes = to_bytes(&ObjectRecord::from(&desc)).unwrap();
        let restored = from_bytes(&bytes).unwrap().into_object();

        assert_eq!(restored.access(), AccessType::ReadWrite);
        assert_eq!(restored.state_var("batch"), Some("1".to_string()));
        assert_eq!(restored.state_var("layout"), Some("HWC".to_string()));
    }

    #[test]
    fn test_decode_overwrites_existing_fields() {
        let record = ObjectDescriptorRecord {
            state_vars: BTreeMap::from([("a".to_string(), "1".to_string())]),
            access_type: AccessType::Write,
        };

        let mut desc = GpuObjectDescriptor::with_access(AccessType::Read);
        desc.set_state_var("stale", "x");
        decode_descriptor(&record, &mut desc);

        assert_eq!(desc.access(), AccessType::Write);
        assert!(desc.state_var("stale").is_none());
        assert_eq!(encode_descriptor(&desc), record);
    }

    #[test]
    fn test_buffer_record_keeps_kind_fields() {
        let mut buf = BufferDescriptor::new(DataType::Float32, 16)
            .with_memory_type(MemoryType::Constant)
            .with_attribute("aligned(16)");
        buf.set_f32_data(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        buf.set_access(AccessType::Read);

        let record = ObjectRecord::from(&buf);
        let restored = from_bytes(&to_bytes(&record).unwrap()).unwrap();
        assert_eq!(restored, record);

        let ObjectRecord::Buffer(inner) = restored else {
            panic!("expected a buffer record");
        };
        let back = BufferDescriptor::from(inner);
        assert_eq!(back.data, buf.data);
        assert_eq!(back.attributes, ["aligned(16)"]);
        assert_eq!(back.access(), AccessType::Read);
    }

    #[test]
    fn test_texture_record_into_object() {
        let mut tex =
            Texture2DDescriptor::new(DataType::Uint8, [3, 5]).normalized_as(DataType::Float16);
        tex.set_access(AccessType::Read);

        let object = ObjectRecord::from(&tex).into_object();
        assert_eq!(object.perform_const_expr("Height"), "5");
        assert_eq!(object.gpu_resources().names(), ["tex2d"]);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            from_bytes(b"not a record"),
            Err(GpuDescError::Serialization(_))
        ));
    }
}
