//! Object Descriptor Contract
//!
//! An object descriptor is the unit a kernel code generator manipulates: a
//! tensor, a weights buffer, a lookup texture. The generator never knows the
//! concrete kind; it only asks point questions through three capabilities:
//!
//! - [`ConstExprResolver`]: replace a symbolic compile-time constant
//! - [`SelectorResolver`]: expand a method-like access into code
//! - [`ResourceProvider`]: list the bindings the object needs
//!
//! Every capability has a total default, so a kind that has nothing to say
//! simply does not override it. [`GpuObject`] ties the capabilities to the
//! shared [`GpuObjectDescriptor`] fields (annotations and access mode).
//!
//! All answers depend only on the object's own fields and annotations.

use std::fmt::Debug;

use gpudesc_core::{AccessType, SelectorError, StateVars};
use gpudesc_resources::GpuResources;

/// Resolves symbolic constant expressions.
pub trait ConstExprResolver {
    /// Generated replacement for `const_expr`, or an empty string if this
    /// object does not recognise it.
    fn perform_const_expr(&self, _const_expr: &str) -> String {
        String::new()
    }
}

/// Resolves selectors (method-like accesses in kernel source).
pub trait SelectorResolver {
    /// Generated code implementing `selector`.
    ///
    /// The default succeeds with empty code: no selector available is not an
    /// error.
    fn perform_selector(
        &self,
        _selector: &str,
        _args: &[String],
        _template_args: &[String],
    ) -> Result<String, SelectorError> {
        Ok(String::new())
    }
}

/// Enumerates the bindings an object needs.
pub trait ResourceProvider {
    fn gpu_resources(&self) -> GpuResources {
        GpuResources::default()
    }
}

/// A descriptor the code generator can query.
pub trait GpuObject:
    ConstExprResolver + SelectorResolver + ResourceProvider + Debug + Send + Sync
{
    fn descriptor(&self) -> &GpuObjectDescriptor;
    fn descriptor_mut(&mut self) -> &mut GpuObjectDescriptor;

    /// Drops bulk payload early. Idempotent; never touches access mode or
    /// annotations.
    fn release(&mut self) {}

    /// Annotates the object. Allowed through a shared reference.
    fn set_state_var(&self, key: &str, value: &str) {
        self.descriptor().set_state_var(key, value);
    }

    fn state_var(&self, key: &str) -> Option<String> {
        self.descriptor().state_var(key)
    }

    fn access(&self) -> AccessType {
        self.descriptor().access()
    }

    fn set_access(&mut self, access_type: AccessType) {
        self.descriptor_mut().set_access(access_type);
    }
}

pub type GpuObjectPtr = Box<dyn GpuObject>;

/// Fields shared by every object kind.
///
/// On its own it is also the base object: it carries no expressions, no
/// selectors and no bindings.
#[derive(Debug, Clone, Default)]
pub struct GpuObjectDescriptor {
    pub(crate) state_vars: StateVars,
    pub(crate) access_type: AccessType,
}

impl GpuObjectDescriptor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_access(access_type: AccessType) -> Self {
        Self {
            state_vars: StateVars::new(),
            access_type,
        }
    }

    #[inline]
    pub fn set_state_var(&self, key: &str, value: &str) {
        self.state_vars.set(key, value);
    }

    #[inline]
    #[must_use]
    pub fn state_var(&self, key: &str) -> Option<String> {
        self.state_vars.get(key)
    }

    #[inline]
    #[must_use]
    pub fn access(&self) -> AccessType {
        self.access_type
    }

    #[inline]
    pub fn set_access(&mut self, access_type: AccessType) {
        self.access_type = access_type;
    }
}

impl ConstExprResolver for GpuObjectDescriptor {}
impl SelectorResolver for GpuObjectDescriptor {}
impl ResourceProvider for GpuObjectDescriptor {}

impl GpuObject for GpuObjectDescriptor {
    fn descriptor(&self) -> &GpuObjectDescriptor {
        self
    }

    fn descriptor_mut(&mut self) -> &mut GpuObjectDescriptor {
        self
    }
}

/// Checks the positional argument count of a selector.
pub(crate) fn expect_args(
    selector: &str,
    args: &[String],
    expected: usize,
) -> Result<(), SelectorError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(SelectorError::invalid_arguments(
            selector,
            format!("expected {expected} argument(s), got {}", args.len()),
        ))
    }
}
