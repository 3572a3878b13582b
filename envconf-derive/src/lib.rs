//! Derive macro implementation for envconf

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Visibility};

mod attrs;

use attrs::{FieldAttrs, Required};

/// Whether a field is visible outside its own module.
///
/// `pub(self)` is the same as no visibility at all.
fn is_settable(vis: &Visibility) -> bool {
    match vis {
        Visibility::Inherited => false,
        Visibility::Restricted(restricted) => !restricted.path.is_ident("self"),
        Visibility::Public(_) => true,
    }
}

/// `EnvConf` derive macro
///
/// Implements `envconf::EnvConf` for a struct with named fields. Only `pub`
/// fields (of any `pub` visibility) are loaded, in declaration order.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env(name = "KEY")]`: Environment variable name, instead of the one derived from the identifier
/// - `#[env(default = "value")]`: Textual default when the variable is not set
/// - `#[env(default)]`: Empty default
/// - `#[env(required)]` / `#[env(required = "true")]`: Fail when the variable is not set and there is no default
///
/// # Example
///
/// See the `envconf` crate documentation for usage examples.
#[proc_macro_derive(EnvConf, attributes(env))]
pub fn derive_envconf(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let invalid_object_type = || {
        syn::Error::new_spanned(
            struct_name,
            format!(
                "invalid object type `{struct_name}`: EnvConf can only be derived for structs with named fields"
            ),
        )
    };

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(invalid_object_type()),
        },
        _ => return Err(invalid_object_type()),
    };

    let mut descriptors = Vec::new();
    let mut arms = Vec::new();

    for field in fields {
        if !is_settable(&field.vis) {
            continue;
        }

        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;
        let field_name = field_ident.unraw().to_string();
        let attrs = FieldAttrs::from_field(field)?;
        let field_type_marker = quote! { ::envconf::__private::FieldType::<#field_type>::new() };

        let env_key = match &attrs.name {
            Some(env_key) => quote! { ::std::option::Option::Some(#env_key) },
            None => quote! { ::std::option::Option::None },
        };
        let mut descriptor = quote! {
            ::envconf::FieldDescriptor::keyed(#field_name, #env_key, (&&#field_type_marker).kind())
        };
        if let Some(default_value) = &attrs.default {
            descriptor = quote! { #descriptor.with_default(#default_value) };
        }
        match &attrs.required {
            Some(Required::Flag(required)) => {
                descriptor = quote! { #descriptor.required(#required) };
            }
            Some(Required::Annotation(annotation)) => {
                descriptor = quote! { #descriptor.with_required_annotation(#annotation) };
            }
            None => {}
        }
        descriptors.push(descriptor);

        arms.push(quote! {
            #field_name => (&&#field_type_marker).assign_to(&mut self.#field_ident, field.name(), value),
        });
    }

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::envconf::EnvConf for #struct_name #ty_generics #where_clause {
            fn fields() -> ::std::vec::Vec<::envconf::FieldDescriptor> {
                #[allow(unused_imports)]
                use ::envconf::__private::{ViaEnvValue as _, ViaUnsupported as _};

                ::std::vec![#(#descriptors),*]
            }

            #[allow(unused_variables)]
            fn assign(
                &mut self,
                field: &::envconf::FieldDescriptor,
                value: ::envconf::RawValue<'_>,
            ) -> ::std::result::Result<(), ::envconf::Error> {
                #[allow(unused_imports)]
                use ::envconf::__private::{ViaEnvValue as _, ViaUnsupported as _};

                match field.name() {
                    #(#arms)*
                    _ => ::std::result::Result::Err(::envconf::Error::unknown_field(field.name())),
                }
            }
        }
    })
}
