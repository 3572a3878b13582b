//! Resolution of environment values into record fields

use std::borrow::Cow;

use crate::coerce::RawValue;
use crate::descriptor::FieldDescriptor;
use crate::env::{Environment, ProcessEnv};
use crate::error::Error;
use crate::EnvConf;

/// Loads [`EnvConf`] records from an [`Environment`].
///
/// The loader holds an optional prefix, stored upper-cased. When it is set,
/// every lookup key becomes `{PREFIX}_{KEY}`.
///
/// ```rust
/// use envconf::{EnvConf, Loader};
///
/// #[derive(Debug, Default, EnvConf)]
/// struct Config {
///     #[env(name = "HOST")]
///     pub host: String,
/// }
///
/// # fn main() -> anyhow::Result<()> {
/// # std::env::set_var("MYAPP_HOST", "192.168.0.1");
/// let mut loader = Loader::new();
/// loader.set_prefix("myapp");
/// assert_eq!(loader.prefix(), "MYAPP");
///
/// let mut config = Config::default();
/// loader.load(&mut config)?;
/// assert_eq!(config.host, "192.168.0.1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Loader<E = ProcessEnv> {
    prefix: String,
    env: E,
}

impl Loader<ProcessEnv> {
    /// Create a loader reading the process environment, without prefix.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Environment> Loader<E> {
    /// Create a loader reading from a custom environment source.
    pub fn with_environment(env: E) -> Self {
        Self {
            prefix: String::new(),
            env,
        }
    }

    /// Builder form of [`set_prefix`](Self::set_prefix).
    pub fn with_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.set_prefix(prefix);
        self
    }

    /// Set the prefix applied to every key. It is stored upper-cased.
    ///
    /// An empty prefix disables prefixing.
    pub fn set_prefix(&mut self, prefix: impl AsRef<str>) {
        self.prefix = prefix.as_ref().to_uppercase();
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Populate every settable field of `record` from the environment.
    ///
    /// Fields are processed in declaration order. The first failure aborts
    /// the call. Fields assigned before it keep their new values, and the
    /// loader can be reused afterwards.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingRequiredField`] if a required field has no value and no default
    /// - [`Error::UnsupportedType`] if a field's type has no coercion rule
    /// - [`Error::Parse`] if a value cannot be converted to the field's type
    pub fn load<T: EnvConf>(&self, record: &mut T) -> Result<(), Error> {
        let fields = T::fields();
        tracing::debug!(
            record = std::any::type_name::<T>(),
            prefix = %self.prefix,
            fields = fields.len(),
            "Loading record from environment"
        );

        for field in &fields {
            let key = self.lookup_key(field);
            let text = self.resolve(field, &key)?;
            let value = match text.as_deref() {
                Some(text) => RawValue::new(&key, text),
                None => RawValue::unset(&key),
            };
            record.assign(field, value)?;
        }

        Ok(())
    }

    /// Environment key for `field`, with the prefix applied.
    pub fn lookup_key(&self, field: &FieldDescriptor) -> String {
        if self.prefix.is_empty() {
            field.env_key().to_string()
        } else {
            format!("{}_{}", self.prefix, field.env_key())
        }
    }

    /// Find the text for `field`: the environment first, then the default.
    ///
    /// Returns `None` when neither exists and the field is optional.
    fn resolve<'f>(
        &self,
        field: &'f FieldDescriptor,
        key: &str,
    ) -> Result<Option<Cow<'f, str>>, Error> {
        if let Some(value) = self.env.lookup(key) {
            tracing::trace!(field = field.name(), key, source = "environment", "Resolved field");
            return Ok(Some(Cow::Owned(value)));
        }

        match field.default_value() {
            Some(default) => {
                tracing::trace!(field = field.name(), key, source = "default", "Resolved field");
                Ok(Some(Cow::Borrowed(default)))
            }
            None if field.is_required() => Err(Error::missing_required(field.name(), key)),
            None => {
                tracing::trace!(field = field.name(), key, source = "unset", "Resolved field");
                Ok(None)
            }
        }
    }
}
