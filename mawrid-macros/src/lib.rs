//! Procedural macros for Mawrid.
//!
//! Use them through the `mawrid` crate, which re-exports them next to the
//! traits they implement.

use darling::{FromDeriveInput, FromField, ast};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromField)]
#[darling(attributes(inject))]
struct InjectField {
    ident: Option<syn::Ident>,
    ty: syn::Type,
    /// Fill the field with `Default::default()` instead of resolving it.
    #[darling(default)]
    default: bool,
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(injectable), supports(struct_any))]
struct InjectableInput {
    ident: syn::Ident,
    generics: syn::Generics,
    data: ast::Data<(), InjectField>,
    /// Path to the `mawrid` crate, for re-exporting crates.
    #[darling(rename = "crate")]
    krate: Option<syn::Path>,
}

/// Derives `Injectable`, treating the struct's fields as constructor
/// parameters.
///
/// Every field is resolved by its type, in declaration order. Fields marked
/// `#[inject(default)]` are filled with `Default::default()` and are not
/// parameters. Unit structs get a zero-parameter constructor.
///
/// ```rust,ignore
/// #[derive(Injectable)]
/// struct Shopper {
///     card: Box<dyn CreditCard>,
///     #[inject(default)]
///     basket: Vec<String>,
/// }
/// ```
#[proc_macro_derive(Injectable, attributes(inject, injectable))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let parsed = match InjectableInput::from_derive_input(&input) {
        Ok(parsed) => parsed,
        Err(err) => return err.write_errors().into(),
    };

    expand(parsed).unwrap_or_else(|err| err.to_compile_error()).into()
}

fn expand(input: InjectableInput) -> syn::Result<TokenStream2> {
    let krate = input
        .krate
        .unwrap_or_else(|| syn::parse_quote!(::mawrid));
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = input
        .data
        .take_struct()
        .ok_or_else(|| syn::Error::new_spanned(ident, "Injectable can only be derived for structs"))?;

    let parameters: Vec<&syn::Type> = fields
        .fields
        .iter()
        .filter(|f| !f.default)
        .map(|f| &f.ty)
        .collect();

    let values: Vec<TokenStream2> = fields
        .fields
        .iter()
        .map(|f| {
            let ty = &f.ty;
            if f.default {
                quote!(<#ty as ::core::default::Default>::default())
            } else {
                quote!(__args.take::<#ty>()?)
            }
        })
        .collect();

    let body = match fields.style {
        ast::Style::Struct => {
            let names = fields.fields.iter().map(|f| &f.ident);
            quote!(Self { #( #names: #values ),* })
        }
        ast::Style::Tuple => quote!(Self( #( #values ),* )),
        ast::Style::Unit => quote!(Self),
    };

    Ok(quote! {
        impl #impl_generics #krate::Injectable for #ident #ty_generics #where_clause {
            fn dependencies() -> ::std::vec::Vec<#krate::DependencyKey> {
                ::std::vec![ #( #krate::DependencyKey::of::<#parameters>() ),* ]
            }

            #[allow(unused_variables)]
            fn construct(__args: &mut #krate::Arguments) -> #krate::Result<Self> {
                ::core::result::Result::Ok(#body)
            }
        }
    })
}
