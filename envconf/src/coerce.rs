//! Conversion of textual environment values into typed field values
//!
//! Each supported field type implements [`EnvValue`], which picks one of the
//! coercion rules below based on the type's [`FieldKind`]:
//!
//! - **Text**: the string is taken unchanged
//! - **Integers**: empty text is zero, otherwise decimal or `0x`/`0o`/`0b`
//!   prefixed, sized to the type's bit width
//! - **Floats**: empty text is zero, otherwise a decimal literal
//! - **Bool**: `true`/`1`/`t` or `false`/`0`/`f`, case-insensitive
//!
//! The trait is sealed. Other types are reported as
//! [`FieldKind::Unsupported`] by the derive macro.

use std::num::ParseIntError;

use crate::descriptor::FieldKind;
use crate::error::Error;

mod sealed {
    pub trait Sealed {}
}

/// A field type that can be loaded from a textual environment value.
pub trait EnvValue: Sized + sealed::Sealed {
    /// Coercion rule used for this type.
    const KIND: FieldKind;

    /// Value assigned when the variable is unset and has no default.
    fn zero() -> Self;

    /// Convert `text`, returning a parser message on failure.
    fn coerce(text: &str) -> Result<Self, String>;
}

/// Resolved value handed to [`EnvConf::assign`](crate::EnvConf::assign).
///
/// Carries the environment key that was consulted (prefix included) and the
/// text found there or taken from the default. `text` is `None` when the
/// variable was unset and the field has no default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawValue<'a> {
    key: &'a str,
    text: Option<&'a str>,
}

impl<'a> RawValue<'a> {
    pub fn new(key: &'a str, text: &'a str) -> Self {
        Self {
            key,
            text: Some(text),
        }
    }

    pub fn unset(key: &'a str) -> Self {
        Self { key, text: None }
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn text(&self) -> Option<&'a str> {
        self.text
    }

    /// Coerce the value for the field named `field`.
    ///
    /// An unset value yields [`EnvValue::zero`].
    pub fn parse<T: EnvValue>(self, field: &str) -> Result<T, Error> {
        match self.text {
            Some(text) => T::coerce(text)
                .map_err(|message| Error::parse_error::<T>(field, self.key, text, message)),
            None => Ok(T::zero()),
        }
    }
}

impl sealed::Sealed for String {}

impl EnvValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn zero() -> Self {
        String::new()
    }

    fn coerce(text: &str) -> Result<Self, String> {
        Ok(text.to_string())
    }
}

impl sealed::Sealed for bool {}

impl EnvValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn zero() -> Self {
        false
    }

    fn coerce(text: &str) -> Result<Self, String> {
        parse_bool(text)
    }
}

macro_rules! impl_integer {
    ($variant:ident => $($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl EnvValue for $ty {
                const KIND: FieldKind = FieldKind::$variant(<$ty>::BITS);

                fn zero() -> Self {
                    0
                }

                fn coerce(text: &str) -> Result<Self, String> {
                    parse_integer(text, <$ty>::from_str_radix)
                }
            }
        )*
    };
}

impl_integer!(SignedInt => i8, i16, i32, i64, i128, isize);
impl_integer!(UnsignedInt => u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($ty:ty => $bits:literal),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl EnvValue for $ty {
                const KIND: FieldKind = FieldKind::Float($bits);

                fn zero() -> Self {
                    0.0
                }

                fn coerce(text: &str) -> Result<Self, String> {
                    if text.is_empty() {
                        return Ok(0.0);
                    }
                    let value: $ty = text.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
                    // Finite literals that overflow the width are rejected
                    if value.is_infinite() && !text.to_ascii_lowercase().contains("inf") {
                        return Err(format!("value out of range for f{}", $bits));
                    }
                    Ok(value)
                }
            }
        )*
    };
}

impl_float!(f32 => 32, f64 => 64);

/// Parse an integer with an optional sign and `0x`/`0o`/`0b` radix prefix.
fn parse_integer<T>(
    text: &str,
    from_str_radix: fn(&str, u32) -> Result<T, ParseIntError>,
) -> Result<T, String> {
    if text.is_empty() {
        return from_str_radix("0", 10).map_err(|e| e.to_string());
    }

    let (sign, rest) = if text.starts_with(['+', '-']) {
        text.split_at(1)
    } else {
        ("", text)
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        Some("0o" | "0O") => (8, &rest[2..]),
        Some("0b" | "0B") => (2, &rest[2..]),
        _ => (10, rest),
    };
    if digits.starts_with(['+', '-']) {
        return Err("invalid digit found in string".to_string());
    }

    from_str_radix(&format!("{sign}{digits}"), radix).map_err(|e| e.to_string())
}

fn parse_bool(text: &str) -> Result<bool, String> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "1" | "t" => Ok(true),
        "false" | "0" | "f" => Ok(false),
        _ => Err(format!(
            "invalid boolean '{text}', expected true/false, t/f or 1/0"
        )),
    }
}
