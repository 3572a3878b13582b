//! Per-type selection of the coercion rule used by `#[derive(EnvConf)]`
//!
//! The derive cannot see through type aliases, so it leaves the choice to
//! method resolution. For a field of type `T` it calls
//! `(&&FieldType::<T>::new()).kind()`: when `T: EnvValue` the
//! [`ViaEnvValue`] impl on `&FieldType<T>` matches without auto-deref,
//! otherwise resolution derefs once and finds the [`ViaUnsupported`]
//! fallback on `FieldType<T>`.
//!
//! Inside a generic impl the field type is a type parameter without an
//! `EnvValue` bound, so the fallback is always chosen there.

use std::any::type_name;
use std::marker::PhantomData;

use crate::coerce::{EnvValue, RawValue};
use crate::descriptor::FieldKind;
use crate::error::Error;

/// Zero-sized marker for a field's declared type.
pub struct FieldType<T>(PhantomData<fn() -> T>);

impl<T> FieldType<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for FieldType<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selected for types with a coercion rule.
pub trait ViaEnvValue<T> {
    fn kind(&self) -> FieldKind;

    fn assign_to(&self, slot: &mut T, field: &str, value: RawValue<'_>) -> Result<(), Error>;
}

impl<T: EnvValue> ViaEnvValue<T> for &FieldType<T> {
    fn kind(&self) -> FieldKind {
        T::KIND
    }

    fn assign_to(&self, slot: &mut T, field: &str, value: RawValue<'_>) -> Result<(), Error> {
        *slot = value.parse::<T>(field)?;
        Ok(())
    }
}

/// Selected for every other type.
pub trait ViaUnsupported<T> {
    fn kind(&self) -> FieldKind;

    fn assign_to(&self, slot: &mut T, field: &str, value: RawValue<'_>) -> Result<(), Error>;
}

impl<T> ViaUnsupported<T> for FieldType<T> {
    fn kind(&self) -> FieldKind {
        FieldKind::Unsupported(type_name::<T>())
    }

    fn assign_to(&self, _slot: &mut T, field: &str, _value: RawValue<'_>) -> Result<(), Error> {
        Err(Error::unsupported_type::<T>(field))
    }
}
