//! Bind environment variables to the fields of a configuration struct
//!
//! `envconf` fills an existing record from the process environment. Each
//! public field is bound to one environment variable, named explicitly or
//! derived from the field identifier, with optional defaults and required
//! checks. Values are converted to the field's declared type.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(EnvConf)]` generates the field table
//! - **Naming convention**: `secret_key` and `SecretKey` both read `SECRET_KEY`
//! - **Prefixes**: `loader.set_prefix("app")` reads `APP_SECRET_KEY` instead
//! - **Defaults and required fields**: `#[env(default = "...", required)]`
//! - **Pluggable sources**: load from maps or closures in tests
//!
//! # Value Parsing
//!
//! - Strings: `HOST=localhost`. A process value that is not valid UTF-8 is
//!   converted lossily, with `U+FFFD` for invalid sequences.
//! - Integers: `PORT=8080`, `MASK=0xff`, `MODE=0o644`. Empty text is `0`.
//! - Floats: `RATIO=0.75`. Empty text is `0.0`.
//! - Booleans: `DEBUG=true`, `DEBUG=0`, `DEBUG=T`
//!
//! Any other field type fails with [`Error::UnsupportedType`] when loaded.
//!
//! # Example
//!
//! ```rust
//! use envconf::{EnvConf, Loader};
//!
//! #[derive(Debug, Default, EnvConf)]
//! struct Config {
//!     #[env(name = "HOST")]
//!     pub host: String,
//!
//!     pub port: u16,
//!
//!     #[env(name = "DEBUG", default = "true")]
//!     pub debug: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("HOST", "localhost");
//! #     std::env::remove_var("PORT");
//! #     std::env::remove_var("DEBUG");
//! let mut config = Config::default();
//! Loader::new().load(&mut config)?;
//!
//! assert_eq!(config.host, "localhost");
//! assert_eq!(config.port, 0);
//! assert!(config.debug);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(name = "KEY")]`
//!
//! Read the field from `KEY` instead of the derived name. The loader prefix
//! still applies.
//!
//! ## `#[env(default = "value")]`
//!
//! Text used when the variable is not set. It goes through the same
//! conversion as environment values. Bare `#[env(default)]` is an empty default.
//!
//! ## `#[env(required)]`
//!
//! Fail with [`Error::MissingRequiredField`] when the variable is not set and
//! there is no default. `required = "true"` (any case) is equivalent, and any
//! other string leaves the field optional.
//!
//! Fields without `pub` are not settable from the environment and are skipped.
//!
//! # Records only
//!
//! Only structs with named fields can be loaded, and only through a mutable
//! reference. Anything else is rejected at compile time:
//!
//! ```compile_fail
//! # use envconf::{EnvConf, Loader};
//! #[derive(Default, EnvConf)]
//! struct Config {
//!     pub host: String,
//! }
//!
//! let config = Config::default();
//! Loader::new().load(&config).unwrap();
//! ```
//!
//! ```compile_fail
//! # use envconf::Loader;
//! let mut port = 8080u16;
//! Loader::new().load(&mut port).unwrap();
//! ```
//!
//! ```compile_fail
//! # use envconf::EnvConf;
//! #[derive(EnvConf)]
//! enum Mode {
//!     Development,
//!     Production,
//! }
//! ```

mod coerce;
mod descriptor;
mod dispatch;
pub mod env;
mod error;
mod loader;
pub mod naming;

pub use coerce::{EnvValue, RawValue};
pub use descriptor::{FieldDescriptor, FieldKind};
pub use env::{Environment, ProcessEnv};
pub use error::Error;
pub use loader::Loader;

pub use envconf_derive::EnvConf;

#[doc(hidden)]
pub mod __private {
    pub use crate::dispatch::{FieldType, ViaEnvValue, ViaUnsupported};
}

/// A record whose settable fields can be loaded from the environment.
///
/// Usually derived. A hand-written impl lists the fields in
/// [`fields`](Self::fields) and routes each descriptor to its field in
/// [`assign`](Self::assign):
///
/// ```rust
/// use envconf::{EnvConf, EnvValue, Error, FieldDescriptor, RawValue};
///
/// #[derive(Default)]
/// struct Config {
///     port: u16,
/// }
///
/// impl EnvConf for Config {
///     fn fields() -> Vec<FieldDescriptor> {
///         vec![FieldDescriptor::new("port", u16::KIND).with_default("8080")]
///     }
///
///     fn assign(&mut self, field: &FieldDescriptor, value: RawValue<'_>) -> Result<(), Error> {
///         match field.name() {
///             "port" => self.port = value.parse(field.name())?,
///             _ => return Err(Error::unknown_field(field.name())),
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait EnvConf {
    /// Descriptors for every settable field, in declaration order.
    fn fields() -> Vec<FieldDescriptor>;

    /// Coerce `value` and write it into the field described by `field`.
    ///
    /// On error the field keeps its previous value.
    fn assign(&mut self, field: &FieldDescriptor, value: RawValue<'_>) -> Result<(), Error>;

    /// Load a fresh `Self::default()` from the process environment, without prefix.
    fn from_env() -> Result<Self, Error>
    where
        Self: Default + Sized,
    {
        let mut record = Self::default();
        Loader::new().load(&mut record)?;
        Ok(record)
    }
}
