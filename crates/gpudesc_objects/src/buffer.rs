//! Linear Buffer Object
//!
//! A flat array of elements bound as a single `buffer` argument. Optionally
//! carries host payload bytes (e.g. precomputed weights) until the program
//! is uploaded and [`GpuObject::release`] drops them.
//!
//! # Selectors
//!
//! | selector | args | result |
//! |---|---|---|
//! | `Read` | `index` | `buffer[index]` |
//! | `Write` | `value, index` | `buffer[index] = value` |
//! | `GetPtr` | `[offset]`, template `[type]` | pointer expression |

use gpudesc_core::{DataType, GpuDescError, MemoryType, Result, SelectorError};
use gpudesc_resources::{GpuBufferDescriptor, GpuResources};
use half::f16;

use crate::object::{
    ConstExprResolver, GpuObject, GpuObjectDescriptor, ResourceProvider, SelectorResolver,
    expect_args,
};

/// Name of the single binding a buffer object contributes.
pub const BUFFER_BINDING: &str = "buffer";

/// Linear buffer object bound as a single `buffer` argument.
#[derive(Debug, Clone, Default)]
pub struct BufferDescriptor {
    pub(crate) base: GpuObjectDescriptor,
    /// Scalar type of each element.
    pub element_type: DataType,
    /// Element stride in bytes.
    pub element_size: u32,
    pub memory_type: MemoryType,
    /// Attribute tags appended to the declaration.
    pub attributes: Vec<String>,
    /// Payload size in bytes.
    pub size: u64,
    /// Host payload bytes, dropped by `release`.
    pub data: Vec<u8>,
}

impl BufferDescriptor {
    #[must_use]
    pub fn new(element_type: DataType, element_size: u32) -> Self {
        Self {
            element_type,
            element_size,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_memory_type(mut self, memory_type: MemoryType) -> Self {
        self.memory_type = memory_type;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Stores `values` as payload, converted to the element type.
    ///
    /// Only FLOAT32 and FLOAT16 buffers accept float payloads, and the encoded
    /// bytes must fill whole elements. On error the previous payload is kept.
    pub fn set_f32_data(&mut self, values: &[f32]) -> Result<()> {
        let data: Vec<u8> = match self.element_type {
            DataType::Float32 => bytemuck::cast_slice(values).to_vec(),
            DataType::Float16 => {
                let halves: Vec<f16> = values.iter().copied().map(f16::from_f32).collect();
                bytemuck::cast_slice(&halves).to_vec()
            }
            data_type => return Err(GpuDescError::UnsupportedPayload { data_type }),
        };

        let size = data.len() as u64;
        if self.element_size != 0 && !size.is_multiple_of(u64::from(self.element_size)) {
            log::warn!(
                "Rejecting {size} byte payload for a buffer with {} byte elements",
                self.element_size
            );
            return Err(GpuDescError::PayloadSizeMismatch {
                size,
                element_size: self.element_size,
            });
        }

        self.data = data;
        self.size = size;
        Ok(())
    }

    /// Number of elements the buffer holds.
    #[must_use]
    pub fn length(&self) -> u64 {
        if self.element_size == 0 {
            0
        } else {
            self.size / u64::from(self.element_size)
        }
    }

    #[must_use]
    pub fn binding_descriptor(&self) -> GpuBufferDescriptor {
        GpuBufferDescriptor {
            data_type: self.element_type,
            access_type: self.base.access(),
            element_size: self.element_size,
            memory_type: self.memory_type,
            attributes: self.attributes.clone(),
        }
    }

    fn perform_get_ptr_selector(
        &self,
        args: &[String],
        template_args: &[String],
    ) -> std::result::Result<String, SelectorError> {
        if args.len() > 1 {
            return Err(SelectorError::invalid_arguments(
                "GetPtr",
                format!("expected at most 1 argument, got {}", args.len()),
            ));
        }
        if template_args.len() > 1 {
            return Err(SelectorError::invalid_arguments(
                "GetPtr",
                format!(
                    "expected at most 1 template argument, got {}",
                    template_args.len()
                ),
            ));
        }

        let element_type = self.binding_descriptor().cl_element_type();
        let conversion = match template_args.first() {
            Some(target) if *target != element_type => format!("({target}*)&"),
            _ => String::new(),
        };

        Ok(match (args.first(), conversion.is_empty()) {
            (None, _) => format!("{conversion}{BUFFER_BINDING}"),
            (Some(offset), true) => format!("({BUFFER_BINDING} + {offset})"),
            (Some(offset), false) => format!("{conversion}{BUFFER_BINDING}[{offset}]"),
        })
    }
}

impl ConstExprResolver for BufferDescriptor {
    fn perform_const_expr(&self, const_expr: &str) -> String {
        match const_expr {
            "Length" => self.length().to_string(),
            "ElementType" => self.binding_descriptor().cl_element_type(),
            _ => String::new(),
        }
    }
}

impl SelectorResolver for BufferDescriptor {
    fn perform_selector(
        &self,
        selector: &str,
        args: &[String],
        template_args: &[String],
    ) -> std::result::Result<String, SelectorError> {
        match selector {
            "Read" => {
                expect_args(selector, args, 1)?;
                Ok(format!("{BUFFER_BINDING}[{}]", args[0]))
            }
            "Write" => {
                expect_args(selector, args, 2)?;
                Ok(format!("{BUFFER_BINDING}[{}] = {}", args[1], args[0]))
            }
            "GetPtr" => self.perform_get_ptr_selector(args, template_args),
            _ => Err(SelectorError::unsupported("BufferDescriptor", selector)),
        }
    }
}

impl ResourceProvider for BufferDescriptor {
    fn gpu_resources(&self) -> GpuResources {
        let mut resources = GpuResources::new();
        resources
            .buffers
            .push((BUFFER_BINDING.to_string(), self.binding_descriptor()));
        resources
    }
}

impl GpuObject for BufferDescriptor {
    fn descriptor(&self) -> &GpuObjectDescriptor {
        &self.base
    }

    fn descriptor_mut(&mut self) -> &mut GpuObjectDescriptor {
        &mut self.base
    }

    fn release(&mut self) {
        self.data = Vec::new();
    }
}
