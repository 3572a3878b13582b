//! Error types for loading configuration from environment variables

/// Errors that can occur while loading a record from the environment.
///
/// Every error aborts the current [`Loader::load`](crate::Loader::load) call.
/// Fields assigned before the failing one keep their new values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field marked `required` has neither an environment value nor a default.
    #[error("Field '{field}' is required but environment variable '{key}' is not set")]
    MissingRequiredField {
        /// Name of the field as declared in the record
        field: String,
        /// Environment variable that was looked up (prefix included)
        key: String,
    },

    /// The field's declared type has no coercion rule.
    ///
    /// Only strings, booleans, integers and floats can be loaded.
    #[error("Field '{field}' has unsupported type {type_name}")]
    UnsupportedType {
        /// Name of the field as declared in the record
        field: String,
        /// Fully qualified name of the declared type
        type_name: String,
    },

    /// The textual value could not be converted to the field's type.
    #[error("Failed to parse '{value}' from '{key}' for field '{field}' as {type_name}: {message}")]
    Parse {
        /// Name of the field as declared in the record
        field: String,
        /// Environment variable the field is bound to (prefix included)
        key: String,
        /// Offending text, taken from the environment or the default
        value: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Error message from the parser
        message: String,
    },

    /// A descriptor was handed to a record that has no field of that name.
    ///
    /// Only reachable through hand-written [`EnvConf`](crate::EnvConf) impls.
    #[error("Record has no settable field named '{field}'")]
    UnknownField {
        /// Name carried by the offending descriptor
        field: String,
    },
}

impl Error {
    /// Create a parse error (used by macro-generated code)
    #[doc(hidden)]
    pub fn parse_error<T>(
        field: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Parse {
            field: field.into(),
            key: key.into(),
            value: value.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a missing required field error
    #[doc(hidden)]
    pub fn missing_required(field: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
            key: key.into(),
        }
    }

    /// Create an unsupported type error (used by macro-generated code)
    #[doc(hidden)]
    pub fn unsupported_type<T: ?Sized>(field: impl Into<String>) -> Self {
        Self::UnsupportedType {
            field: field.into(),
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Create an unknown field error (used by macro-generated code)
    #[doc(hidden)]
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }
}
