//! Common parsing utilities
//!
//! Helper-attribute parsing for `#[derive(TypeShape)]`.

use syn::{Attribute, Type};

/// Options collected from every `#[shape(..)]` attribute on an item.
#[derive(Default)]
pub struct ShapeAttrs {
    /// `#[shape(element = T)]`: the type decomposes one level into `T`.
    pub element: Option<Type>,
}

impl ShapeAttrs {
    pub fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = ShapeAttrs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("shape")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("element") {
                    if out.element.is_some() {
                        return Err(meta.error("duplicate `element` in #[shape(..)]"));
                    }
                    out.element = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported #[shape(..)] key, expected `element = Type`"))
                }
            })?;
        }
        Ok(out)
    }
}
