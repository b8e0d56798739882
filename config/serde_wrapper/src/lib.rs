//! `Deserialize` derive for configuration read from environment variables.
//!
//! Environment keys are split on `_`, so a field such as `max_len` can never be
//! addressed by name. This derive renames every named field to its lowercase form
//! with underscores removed (`max_len` becomes `maxlen`) and then derives
//! `serde::Deserialize` as usual.
//!
//! It works by emitting a copy of the item carrying the renames, the serde derive and
//! [`macro@strip`]. Attribute macros run in order: serde generates its impl for the copy,
//! then `strip` removes the copy itself, leaving only the impl behind.

use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{parse_macro_input, parse_quote, Attribute, Data, DeriveInput};

#[proc_macro_derive(Deserialize, attributes(serde))]
pub fn derive_deserialize(input: TokenStream) -> TokenStream {
    let mut item = parse_macro_input!(input as DeriveInput);

    let prelude: Vec<Attribute> = parse_quote! {
        #[derive(::serde::Deserialize)]
        #[::serde_wrapper::strip]
    };
    item.attrs.splice(0..0, prelude);

    if let Data::Struct(data) = &mut item.data {
        for field in data.fields.iter_mut() {
            let Some(ident) = &field.ident else {
                continue;
            };
            if field.attrs.iter().any(|attr| attr.path().is_ident("serde")) {
                continue;
            }

            let key = env_key(&ident.to_string());
            field.attrs.push(parse_quote!(#[serde(rename = #key)]));
        }
    }

    item.into_token_stream().into()
}

/// Not public API, do not use.
#[doc(hidden)]
#[proc_macro_attribute]
pub fn strip(_: TokenStream, _: TokenStream) -> TokenStream {
    TokenStream::new()
}

fn env_key(field: &str) -> String {
    field.trim_start_matches("r#").replace('_', "").to_lowercase()
}
