//! Per-field metadata produced by the field extractor

use crate::naming;

/// Declared kind of a field, which selects its coercion rule.
///
/// Integer and float variants carry the bit width of the declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    SignedInt(u32),
    UnsignedInt(u32),
    Float(u32),
    Bool,
    /// No coercion rule exists. Carries the declared type name.
    Unsupported(&'static str),
}

/// Metadata for one settable field of a record.
///
/// Descriptors are built by [`EnvConf::fields`](crate::EnvConf::fields),
/// normally from the attributes seen by `#[derive(EnvConf)]`:
///
/// ```rust
/// use envconf::{FieldDescriptor, FieldKind};
///
/// let field = FieldDescriptor::keyed("debug", Some("DEBUG_MODE"), FieldKind::Bool)
///     .with_default("true");
///
/// assert_eq!(field.env_key(), "DEBUG_MODE");
/// assert_eq!(field.default_value(), Some("true"));
/// assert!(!field.is_required());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    env_key: String,
    default: Option<String>,
    required: bool,
    kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a descriptor whose environment key is derived from `name`.
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self::keyed(name, None, kind)
    }

    /// Create a descriptor with an explicit environment key.
    ///
    /// A missing or empty key falls back to the one derived from `name`.
    pub fn keyed(name: &'static str, env_key: Option<&str>, kind: FieldKind) -> Self {
        let env_key = match env_key {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => naming::env_key(name),
        };

        Self {
            name,
            env_key,
            default: None,
            required: false,
            kind,
        }
    }

    /// Set the textual default. An empty default is still a default.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mark the field required from a textual annotation.
    ///
    /// Only `"true"`, compared case-insensitively, marks the field required.
    /// Empty, `"false"` and unparseable values all leave it optional.
    pub fn with_required_annotation(self, value: &str) -> Self {
        self.required(value.eq_ignore_ascii_case("true"))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Environment key before any loader prefix is applied.
    pub fn env_key(&self) -> &str {
        &self.env_key
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }
}
