use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, DeriveInput, GenericParam};

use crate::common::ShapeAttrs;

/// #[derive(TypeShape)] emits a `TypeShape` impl through the
/// `__leaf_shape!` bridge and an `ArrayAdapter` impl.
///
/// The key expression is left to the declarative side so that
/// `concat!(module_path!(), ..)` expands at the deriving crate.
pub fn expand_derive_type_shape(input: DeriveInput) -> syn::Result<TokenStream2> {
    let attrs = ShapeAttrs::from_attributes(&input.attrs)?;
    let ident = &input.ident;
    let ident_str = ident.to_string();

    let mut generics = input.generics.clone();
    let mut key_parts = Vec::new();
    for param in generics.params.iter_mut() {
        match param {
            GenericParam::Type(type_param) => {
                let id = type_param.ident.clone();
                type_param.bounds.push(parse_quote!(::tola_reflect::TypeShape));
                key_parts.push(quote! { .with(<#id as ::tola_reflect::TypeShape>::KEY) });
            }
            GenericParam::Const(const_param) => {
                // Integer and bool const params only; `as usize` rejects the rest.
                let id = &const_param.ident;
                key_parts.push(quote! { .with_len(#id as usize) });
            }
            GenericParam::Lifetime(_) => {}
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let key = quote! {
        ::tola_reflect::TypeKey::named(concat!(module_path!(), "::", #ident_str)) #(#key_parts)*
    };

    let adapter = match &attrs.element {
        Some(element) => quote! {
            type IsArray = ::tola_reflect::Present;
            type Element = #element;
        },
        None => quote! {
            type IsArray = ::tola_reflect::Absent;
            type Element = Self;
        },
    };

    Ok(quote! {
        impl #impl_generics ::tola_reflect::TypeShape for #ident #ty_generics #where_clause {
            ::tola_reflect::__leaf_shape!(#key);
        }

        impl #impl_generics ::tola_reflect::ArrayAdapter for #ident #ty_generics #where_clause {
            #adapter
        }
    })
}
