//! 2D Texture Object
//!
//! Bound as one `image2d_t` named `tex2d`. Integer textures flagged as
//! normalized are read through the float (or half) sampling path.

use gpudesc_core::{DataType, SelectorError};
use gpudesc_resources::{GpuImage2DDescriptor, GpuResources};

use crate::object::{
    ConstExprResolver, GpuObject, GpuObjectDescriptor, ResourceProvider, SelectorResolver,
    expect_args,
};

pub const TEXTURE2D_BINDING: &str = "tex2d";

/// 2D texture object bound as a single `tex2d` image.
#[derive(Debug, Clone, Default)]
pub struct Texture2DDescriptor {
    pub(crate) base: GpuObjectDescriptor,
    /// Storage type of one texel channel.
    pub element_type: DataType,
    /// Integer texels are read as normalized floats.
    pub normalized: bool,
    /// Float type used for normalized reads (FLOAT16 or FLOAT32).
    pub normalized_type: DataType,
    /// Width and height in texels.
    pub size: [u32; 2],
    /// Host texel bytes, dropped by `release`.
    pub data: Vec<u8>,
}

impl Texture2DDescriptor {
    #[must_use]
    pub fn new(element_type: DataType, size: [u32; 2]) -> Self {
        Self {
            element_type,
            size,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn normalized_as(mut self, normalized_type: DataType) -> Self {
        self.normalized = true;
        self.normalized_type = normalized_type;
        self
    }

    /// `f`, `h`, `i` or `ui`: suffix of the image built-ins for this texture.
    fn image_function_suffix(&self) -> &'static str {
        match self.element_type {
            DataType::Float16 => "h",
            t if t.is_float() => "f",
            t if self.normalized && (t.is_signed_integer() || t.is_unsigned_integer()) => {
                if self.normalized_type == DataType::Float16 {
                    "h"
                } else {
                    "f"
                }
            }
            t if t.is_signed_integer() => "i",
            t if t.is_unsigned_integer() => "ui",
            _ => "f",
        }
    }
}

impl ConstExprResolver for Texture2DDescriptor {
    fn perform_const_expr(&self, const_expr: &str) -> String {
        match const_expr {
            "Width" => self.size[0].to_string(),
            "Height" => self.size[1].to_string(),
            _ => String::new(),
        }
    }
}

impl SelectorResolver for Texture2DDescriptor {
    fn perform_selector(
        &self,
        selector: &str,
        args: &[String],
        _template_args: &[String],
    ) -> Result<String, SelectorError> {
        let suffix = self.image_function_suffix();
        match selector {
            "Read" => {
                expect_args(selector, args, 2)?;
                Ok(format!(
                    "read_image{suffix}({TEXTURE2D_BINDING}, smp_none, (int2)({}, {}))",
                    args[0], args[1]
                ))
            }
            "Write" => {
                expect_args(selector, args, 3)?;
                Ok(format!(
                    "write_image{suffix}({TEXTURE2D_BINDING}, (int2)({}, {}), {})",
                    args[1], args[2], args[0]
                ))
            }
            _ => Err(SelectorError::unsupported("Texture2DDescriptor", selector)),
        }
    }
}

impl ResourceProvider for Texture2DDescriptor {
    fn gpu_resources(&self) -> GpuResources {
        let mut resources = GpuResources::new();
        resources.images2d.push((
            TEXTURE2D_BINDING.to_string(),
            GpuImage2DDescriptor {
                data_type: self.element_type,
                access_type: self.base.access(),
            },
        ));
        resources
    }
}

impl GpuObject for Texture2DDescriptor {
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

#[cfg(test)]
mod tests {
    use gpudesc_core::AccessType;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    fn read(desc: &Texture2DDescriptor) -> String {
        desc.perform_selector("Read", &strings(&["x", "y"]), &[])
            .unwrap()
    }

    #[test]
    fn test_read_function_by_element_type() {
        let tex = Texture2DDescriptor::new(DataType::Float32, [4, 4]);
        assert_eq!(read(&tex), "read_imagef(tex2d, smp_none, (int2)(x, y))");

        let tex = Texture2DDescriptor::new(DataType::Float16, [4, 4]);
        assert_eq!(read(&tex), "read_imageh(tex2d, smp_none, (int2)(x, y))");

        let tex = Texture2DDescriptor::new(DataType::Int8, [4, 4]);
        assert!(read(&tex).starts_with("read_imagei("));

        let tex = Texture2DDescriptor::new(DataType::Uint8, [4, 4]);
        assert!(read(&tex).starts_with("read_imageui("));

        let tex = Texture2DDescriptor::new(DataType::Uint8, [4, 4]).normalized_as(DataType::Float16);
        assert!(read(&tex).starts_with("read_imageh("));

        let tex = Texture2DDescriptor::new(DataType::Int16, [4, 4]).normalized_as(DataType::Float32);
        assert!(read(&tex).starts_with("read_imagef("));
    }

    #[test]
    fn test_write() {
        let tex = Texture2DDescriptor::new(DataType::Float32, [8, 2]);
        assert_eq!(
            tex.perform_selector("Write", &strings(&["color", "x", "y"]), &[]),
            Ok("write_imagef(tex2d, (int2)(x, y), color)".to_string())
        );
    }

    #[test]
    fn test_errors() {
        let tex = Texture2DDescriptor::new(DataType::Float32, [8, 2]);

        let err = tex
            .perform_selector("Read", &strings(&["x"]), &[])
            .unwrap_err();
        assert!(matches!(err, SelectorError::InvalidArguments { .. }));

        let err = tex.perform_selector("GetPtr", &[], &[]).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_size_const_exprs() {
        let tex = Texture2DDescriptor::new(DataType::Float32, [640, 480]);
        assert_eq!(tex.perform_const_expr("Width"), "640");
        assert_eq!(tex.perform_const_expr("Height"), "480");
        assert_eq!(tex.perform_const_expr("Depth"), "");
    }

    #[test]
    fn test_resources_follow_access() {
        let mut tex = Texture2DDescriptor::new(DataType::Float16, [1, 1]);
        tex.set_access(AccessType::Write);

        let resources = tex.gpu_resources();
        assert_eq!(resources.names(), ["tex2d"]);
        assert_eq!(resources.images2d[0].1.access_type, AccessType::Write);
        assert_eq!(resources.images2d[0].1.data_type, DataType::Float16);
    }

    #[test]
    fn test_release() {
        let mut tex = Texture2DDescriptor::new(DataType::Uint8, [2, 2]);
        tex.data = vec![0xff; 16];
        tex.set_access(AccessType::Read);

        tex.release();
        assert!(tex.data.is_empty());
        assert_eq!(tex.size, [2, 2]);
        assert_eq!(tex.access(), AccessType::Read);
    }
}
