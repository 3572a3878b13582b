//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates the annotations of struct fields
//! during macro expansion.

use syn::{Field, Lit};

/// How a field was marked as required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Required {
    /// Bare `required` or `required = true/false`
    Flag(bool),
    /// `required = "..."`, interpreted at runtime by the descriptor
    Annotation(String),
}

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Environment variable name override.
    ///
    /// If `None`, the name is derived from the field identifier.
    pub name: Option<String>,

    /// Textual default. `Some("")` for a bare `default`.
    pub default: Option<String>,

    pub required: Option<Required>,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Several `#[env]` attributes on one field are merged, later keys win.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let name: syn::LitStr = meta.value()?.parse()?;
                    attrs.name = Some(name.value());
                    return Ok(());
                }

                // default or default = literal
                if meta.path.is_ident("default") {
                    if meta.input.peek(syn::Token![=]) {
                        let lit: Lit = meta.value()?.parse()?;
                        attrs.default = Some(literal_text(&lit)?);
                    } else {
                        attrs.default = Some(String::new());
                    }
                    return Ok(());
                }

                // required or required = "..." / bool
                if meta.path.is_ident("required") {
                    if meta.input.peek(syn::Token![=]) {
                        let lit: Lit = meta.value()?.parse()?;
                        attrs.required = Some(match lit {
                            Lit::Bool(b) => Required::Flag(b.value),
                            Lit::Str(s) => Required::Annotation(s.value()),
                            other => {
                                return Err(syn::Error::new_spanned(
                                    other,
                                    "expected a string or boolean literal",
                                ))
                            }
                        });
                    } else {
                        attrs.required = Some(Required::Flag(true));
                    }
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute, expected `name`, `default` or `required`"))
            })?;
        }

        Ok(attrs)
    }
}

/// Textual form of a literal default value.
fn literal_text(lit: &Lit) -> syn::Result<String> {
    match lit {
        Lit::Str(s) => Ok(s.value()),
        Lit::Int(i) => Ok(i.base10_digits().to_string()),
        Lit::Float(f) => Ok(f.base10_digits().to_string()),
        Lit::Bool(b) => Ok(b.value.to_string()),
        other => Err(syn::Error::new_spanned(
            other,
            "default must be a string, integer, float or boolean literal",
        )),
    }
}
