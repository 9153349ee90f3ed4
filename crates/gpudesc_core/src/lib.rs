//! # gpudesc Core
//!
//! Foundational types shared by the gpudesc crates:
//!
//! - [`DataType`], [`AccessType`], [`MemoryType`]: value tags describing
//!   memory objects
//! - [`SelectorError`], [`GpuDescError`]: error taxonomy
//! - [`StateVars`]: annotation store attached to object descriptors

pub mod errors;
pub mod state_vars;
pub mod types;

pub use errors::{GpuDescError, Result, SelectorError};
pub use state_vars::StateVars;
pub use types::{AccessType, DataType, MemoryType};
