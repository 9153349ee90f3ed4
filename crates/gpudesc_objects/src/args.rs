//! Kernel Object Arguments
//!
//! [`ObjectArgs`] is the registry a template engine talks to while it walks
//! kernel source: it owns the named objects of one kernel, routes point
//! queries to them and flattens their bindings into one table.
//!
//! Binding names of an object are prefixed with the object name
//! (`src` + `buffer` → `src_buffer`), so objects never need to coordinate
//! their own names.

use rustc_hash::FxHashMap;

use gpudesc_core::{GpuDescError, Result, SelectorError};
use gpudesc_resources::{BindingTable, GpuResources};

use crate::object::GpuObjectPtr;

/// Named scalars and objects of one kernel.
#[derive(Debug, Default)]
pub struct ObjectArgs {
    ints: Vec<String>,
    floats: Vec<String>,
    objects: Vec<(String, GpuObjectPtr)>,
    index: FxHashMap<String, usize>,
}

impl ObjectArgs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_int(&mut self, name: impl Into<String>) {
        self.ints.push(name.into());
    }

    pub fn add_float(&mut self, name: impl Into<String>) {
        self.floats.push(name.into());
    }

    pub fn add_object(&mut self, name: impl Into<String>, object: GpuObjectPtr) -> Result<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GpuDescError::DuplicateObject(name));
        }
        self.index.insert(name.clone(), self.objects.len());
        self.objects.push((name, object));
        Ok(())
    }

    #[must_use]
    pub fn object(&self, name: &str) -> Option<&GpuObjectPtr> {
        self.index.get(name).map(|&i| &self.objects[i].1)
    }

    pub fn object_mut(&mut self, name: &str) -> Option<&mut GpuObjectPtr> {
        let i = *self.index.get(name)?;
        Some(&mut self.objects[i].1)
    }

    /// Object names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|(name, _)| name.as_str())
    }

    /// Resolves `selector` on the named object.
    pub fn perform_selector(
        &self,
        object: &str,
        selector: &str,
        args: &[String],
        template_args: &[String],
    ) -> Result<String> {
        let target = self
            .object(object)
            .ok_or_else(|| GpuDescError::UnknownObject(object.to_string()))?;
        log::trace!("Resolving {object}.{selector}({})", args.join(", "));
        Ok(target.perform_selector(selector, args, template_args)?)
    }

    /// Resolves `selector` on the first object that generates code for it.
    ///
    /// Objects are tried in registration order. An unsupported selector or an
    /// empty answer moves on to the next object; invalid arguments stop the
    /// search. If only empty answers were given, the result is empty code.
    pub fn resolve_selector(
        &self,
        selector: &str,
        args: &[String],
        template_args: &[String],
    ) -> Result<String> {
        let mut last_miss = SelectorError::unsupported("ObjectArgs", selector);
        let mut answered_empty = false;
        for (name, object) in &self.objects {
            match object.perform_selector(selector, args, template_args) {
                Ok(code) if !code.is_empty() => return Ok(code),
                Ok(_) => {
                    log::trace!("{name} has no code for '{selector}', trying next object");
                    answered_empty = true;
                }
                Err(err) if err.is_unsupported() => {
                    log::trace!("{name} does not handle '{selector}', trying next object");
                    last_miss = err;
                }
                Err(err) => {
                    log::warn!("Selector '{selector}' on {name} failed: {err}");
                    return Err(err.into());
                }
            }
        }
        if answered_empty {
            Ok(String::new())
        } else {
            Err(last_miss.into())
        }
    }

    /// First non-empty answer for `const_expr` among all objects.
    #[must_use]
    pub fn perform_const_expr(&self, const_expr: &str) -> Option<String> {
        self.objects
            .iter()
            .map(|(_, object)| object.perform_const_expr(const_expr))
            .find(|code| !code.is_empty())
    }

    /// Kernel scalars followed by every object's bindings, prefixed with the
    /// object name.
    #[must_use]
    pub fn gpu_resources(&self) -> GpuResources {
        let mut resources = GpuResources::new();
        resources.ints.extend(self.ints.iter().cloned());
        resources.floats.extend(self.floats.iter().cloned());
        for (name, object) in &self.objects {
            resources.merge_prefixed(name, object.gpu_resources());
        }
        resources
    }

    pub fn binding_table(&self) -> Result<BindingTable> {
        BindingTable::new(&self.gpu_resources())
    }

    /// Releases the payload of every object.
    pub fn release_all(&mut self) {
        for (_, object) in &mut self.objects {
            object.release();
        }
    }
}
