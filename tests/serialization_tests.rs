//! Descriptor Serialization Tests
//!
//! Tests for:
//! - Base descriptor round trip (annotations + access mode)
//! - Concrete kinds restored as trait objects from cache bytes
//! - Payload release before encoding

use half::f16;

use gpudesc::prelude::*;
use gpudesc::serialization::{self, ObjectRecord};

#[test]
fn base_fields_round_trip() -> anyhow::Result<()> {
    let mut desc = GpuObjectDescriptor::new();
    desc.set_access(AccessType::Write);
    desc.set_state_var("batch_id", "B");
    desc.set_state_var("slices", "4");

    let bytes = serialization::to_bytes(&ObjectRecord::from(&desc))?;
    let restored = serialization::from_bytes(&bytes)?.into_object();

    assert_eq!(restored.access(), AccessType::Write);
    assert_eq!(restored.state_var("batch_id"), Some("B".to_string()));
    assert_eq!(restored.state_var("slices"), Some("4".to_string()));
    Ok(())
}

#[test]
fn encoding_is_stable() -> anyhow::Result<()> {
    let a = GpuObjectDescriptor::with_access(AccessType::Read);
    a.set_state_var("z", "1");
    a.set_state_var("a", "2");

    let b = GpuObjectDescriptor::with_access(AccessType::Read);
    b.set_state_var("a", "2");
    b.set_state_var("z", "1");

    assert_eq!(
        serialization::to_bytes(&ObjectRecord::from(&a))?,
        serialization::to_bytes(&ObjectRecord::from(&b))?
    );
    Ok(())
}

#[test]
fn half_buffer_restores_payload_and_selectors() -> anyhow::Result<()> {
    let mut weights = BufferDescriptor::new(DataType::Float16, 8).with_attribute("restrict");
    weights.set_access(AccessType::Read);
    weights.set_f32_data(&[0.25, 0.5, 0.75, 1.0])?;

    let bytes = serialization::to_bytes(&ObjectRecord::from(&weights))?;
    let ObjectRecord::Buffer(record) = serialization::from_bytes(&bytes)? else {
        panic!("expected a buffer record");
    };
    let restored = BufferDescriptor::from(record);

    assert_eq!(restored.size, 8);
    let third = f16::from_ne_bytes([restored.data[4], restored.data[5]]);
    assert_eq!(third.to_f32(), 0.75);

    assert_eq!(restored.perform_const_expr("Length"), "1");
    assert_eq!(
        restored.perform_selector("GetPtr", &[], &["half".to_string()])?,
        "(half*)&buffer"
    );
    assert_eq!(restored.gpu_resources().buffers[0].1.attributes, ["restrict"]);
    Ok(())
}

#[test]
fn released_payload_is_not_persisted() {
    let mut tex = Texture2DDescriptor::new(DataType::Uint8, [2, 2]);
    tex.data = vec![1, 2, 3, 4];
    tex.set_state_var("uploaded", "true");
    tex.release();

    let ObjectRecord::Texture2D(record) = ObjectRecord::from(&tex) else {
        panic!("expected a texture record");
    };
    assert!(record.data.is_empty());
    assert_eq!(record.size, [2, 2]);
    assert_eq!(record.base.state_vars.get("uploaded"), Some(&"true".to_string()));
}

#[test]
fn truncated_bytes_fail() {
    let desc = GpuObjectDescriptor::new();
    let bytes = serialization::to_bytes(&ObjectRecord::from(&desc)).expect("encode");

    assert!(serialization::from_bytes(&bytes[..bytes.len() / 2]).is_err());
}
