//! Error Types
//!
//! # Overview
//!
//! Two layers of errors exist:
//!
//! - [`SelectorError`]: the narrow taxonomy returned by selector resolution.
//!   `UnsupportedSelector` is recoverable (the caller may try another
//!   descriptor), `InvalidArguments` is a hard failure of that code
//!   generation step.
//! - [`GpuDescError`]: everything else that can go wrong while assembling a
//!   kernel's bindings or restoring a cached descriptor.
//!
//! Unknown constant expressions are not errors; resolvers answer them with an
//! empty string.

use thiserror::Error;

use crate::types::DataType;

/// Failure of a selector resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The descriptor does not know this selector.
    #[error("{object} does not support selector '{selector}'")]
    UnsupportedSelector {
        /// Kind of the descriptor that was asked
        object: String,
        /// Selector name as written in kernel source
        selector: String,
    },

    /// The selector is known but was invoked with the wrong argument shape.
    #[error("invalid arguments for selector '{selector}': {reason}")]
    InvalidArguments {
        /// Selector name as written in kernel source
        selector: String,
        /// Human readable description of the expected shape
        reason: String,
    },
}

impl SelectorError {
    #[must_use]
    pub fn unsupported(object: impl Into<String>, selector: impl Into<String>) -> Self {
        Self::UnsupportedSelector {
            object: object.into(),
            selector: selector.into(),
        }
    }

    #[must_use]
    pub fn invalid_arguments(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// `true` when another descriptor may still handle the selector.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedSelector { .. })
    }
}

/// The main error type of the gpudesc crates.
#[derive(Error, Debug)]
pub enum GpuDescError {
    // ========================================================================
    // Code generation
    // ========================================================================
    /// Selector resolution failed.
    #[error(transparent)]
    Selector(#[from] SelectorError),

    /// No object with this name is registered.
    #[error("Unknown object: {0}")]
    UnknownObject(String),

    /// An object with this name is already registered.
    #[error("Object already registered: {0}")]
    DuplicateObject(String),

    // ========================================================================
    // Binding layout
    // ========================================================================
    /// The same binding name is used twice across the resource aggregate.
    #[error("Duplicate binding name '{name}' ({first} and {second})")]
    DuplicateBindingName {
        /// The colliding name
        name: String,
        /// Kind of the first binding using the name
        first: String,
        /// Kind of the second binding using the name
        second: String,
    },

    /// A custom memory binding was declared without a type name.
    #[error("Custom memory binding '{0}' has an empty type name")]
    EmptyCustomTypeName(String),

    // ========================================================================
    // Payload & Serialization
    // ========================================================================
    /// Host data cannot be encoded for this element type.
    #[error("Unsupported payload element type: {data_type:?}")]
    UnsupportedPayload {
        /// Element type of the receiving descriptor
        data_type: DataType,
    },

    /// Payload bytes do not fill a whole number of elements.
    #[error("Payload of {size} bytes is not a multiple of the {element_size} byte element stride")]
    PayloadSizeMismatch {
        /// Encoded payload size in bytes
        size: u64,
        /// Element stride of the receiving buffer
        element_size: u32,
    },

    /// Encoding or decoding a cached descriptor failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias for `Result<T, GpuDescError>`.
pub type Result<T> = std::result::Result<T, GpuDescError>;
