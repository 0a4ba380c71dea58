//! Peano alias generation for level indexing.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt};

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max == 0 {
            return Err(syn::Error::new(lit.span(), "peano! needs at least one successor"));
        }
        Ok(PeanoInput { max })
    }
}

fn alias(n: usize) -> Ident {
    Ident::new(&format!("D{}", n), Span::call_site())
}

pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let zero = alias(0);
    let rest = (1..=input.max).map(|n| {
        let curr = alias(n);
        let prev = alias(n - 1);
        let doc = format!("Level index {}.", n);
        quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        }
    });

    quote! {
        /// Level index 0.
        pub type #zero = Z;
        #(#rest)*
    }
}
