//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Arithmetic on the value types never fails. Errors come only from checked precision casts and
/// from the reflection lookups in [`reflect`](crate::reflect).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetronTypesError {
    /// A component cannot be represented in the target precision.
    #[error("invalid numeric conversion: {0}")]
    Conversion(String),

    /// The type has no field with the given name.
    #[error("type {type_name} has no field `{field}`")]
    UnknownField {
        /// Reflected name of the type.
        type_name: &'static str,
        /// Requested field name.
        field: String,
    },

    /// The field exists but holds a value of a different type than requested.
    #[error("field `{field}` of {type_name} has a different type")]
    FieldType {
        /// Reflected name of the type.
        type_name: &'static str,
        /// Field name.
        field: &'static str,
    },

    /// The type has no method with the given name.
    #[error("type {type_name} has no method `{method}`")]
    UnknownMethod {
        /// Reflected name of the type.
        type_name: &'static str,
        /// Requested method name.
        method: String,
    },

    /// A method was invoked with the wrong number of arguments.
    #[error("method `{method}` takes {expected} argument(s), {found} given")]
    ArgumentCount {
        /// Method name.
        method: &'static str,
        /// Human readable expected count, e.g. `1` or `0..=1`.
        expected: String,
        /// Number of arguments given.
        found: usize,
    },

    /// A method argument has an unexpected type.
    #[error("argument {index} of method `{method}` has an unexpected type")]
    ArgumentType {
        /// Method name.
        method: &'static str,
        /// Zero based index of the argument.
        index: usize,
    },
}
