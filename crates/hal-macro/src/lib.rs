//! Derive macro backing the explicit half of halbuilder's record adapter.
//!
//! `#[derive(Record)]` implements `halbuilder::Record` for a struct with
//! named fields, producing one `(name, value)` property pair per field in
//! declaration order. Field values go through `halbuilder::Value::from`, so
//! only the supported property types (strings, integers, booleans, and
//! options thereof) compile.
//!
//! Supported attributes:
//!
//! - `#[hal(rename_all = "camelCase")]` (or `"snake_case"`) on the struct
//! - `#[hal(rename = "explicitName")]` on a field
//! - `#[hal(skip)]` on a field

use heck::{ToLowerCamelCase, ToSnakeCase};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

#[derive(Clone, Copy, PartialEq)]
enum RenameRule {
    None,
    CamelCase,
    SnakeCase,
}

impl RenameRule {
    fn apply(self, field_name: &str) -> String {
        match self {
            RenameRule::None => field_name.to_string(),
            RenameRule::CamelCase => field_name.to_lower_camel_case(),
            RenameRule::SnakeCase => field_name.to_snake_case(),
        }
    }
}

#[proc_macro_derive(Record, attributes(hal))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_record(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand_record(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Record can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Record requires a struct with named fields",
        ));
    };

    let rename_rule = container_rename_rule(&input)?;

    let mut entries = Vec::new();
    for field in &fields.named {
        let mut skip = false;
        let mut rename: Option<String> = None;
        for attr in &field.attrs {
            if !attr.path().is_ident("hal") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let literal: LitStr = meta.value()?.parse()?;
                    rename = Some(literal.value());
                    Ok(())
                } else {
                    Err(meta.error("unsupported hal attribute; expected `skip` or `rename`"))
                }
            })?;
        }
        if skip {
            continue;
        }

        // Named fields always carry an ident.
        let ident = field.ident.as_ref().unwrap();
        let property_name = rename.unwrap_or_else(|| rename_rule.apply(&ident.to_string()));
        entries.push(quote! {
            (
                #property_name.to_string(),
                ::halbuilder::Value::from(self.#ident.clone()),
            )
        });
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::halbuilder::Record for #ident #ty_generics #where_clause {
            fn record_properties(&self) -> ::std::vec::Vec<(::std::string::String, ::halbuilder::Value)> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}

fn container_rename_rule(input: &DeriveInput) -> syn::Result<RenameRule> {
    let mut rule = RenameRule::None;
    for attr in &input.attrs {
        if !attr.path().is_ident("hal") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let literal: LitStr = meta.value()?.parse()?;
                rule = match literal.value().as_str() {
                    "camelCase" => RenameRule::CamelCase,
                    "snake_case" => RenameRule::SnakeCase,
                    other => {
                        return Err(meta.error(format!(
                            "unsupported rename_all value `{other}`; expected `camelCase` or `snake_case`"
                        )));
                    }
                };
                Ok(())
            } else {
                Err(meta.error("unsupported hal attribute; expected `rename_all`"))
            }
        })?;
    }
    Ok(rule)
}
