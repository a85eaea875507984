use proc_macro2::TokenStream;
use quote::{quote, quote_spanned, ToTokens};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Fields, Item, ItemStruct, Visibility};

/// Pass `item` through unchanged, or replace it with a compile error when the
/// marker is misused.
pub fn expand(name: &str, attr: TokenStream, item: TokenStream) -> TokenStream {
    match check(name, attr, item) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn check(name: &str, attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    if !attr.is_empty() {
        return Err(syn::Error::new(
            attr.span(),
            format!("#[{}] takes no arguments", name),
        ));
    }

    match syn::parse2::<Item>(item)? {
        Item::Struct(item) => {
            let assertions = display_assertions(name, &item);
            let mut tokens = item.into_token_stream();
            tokens.extend(assertions);
            Ok(tokens)
        }
        other => Err(syn::Error::new(
            other.span(),
            format!("#[{}] can only be applied to structs", name),
        )),
    }
}

/// Public named fields are written with `Display`. Each one gets a check
/// whose error points at the field type and names the field.
///
/// Generic structs get no impl, so they are not checked.
fn display_assertions(name: &str, item: &ItemStruct) -> TokenStream {
    if !item.generics.params.is_empty() {
        return TokenStream::new();
    }
    let Fields::Named(fields) = &item.fields else {
        return TokenStream::new();
    };

    fields
        .named
        .iter()
        .filter(|field| matches!(field.vis, Visibility::Public(_)))
        .filter_map(|field| {
            let field_name = field.ident.as_ref()?.unraw().to_string();
            let ty = &field.ty;
            let label = format!("public field `{}` is shown by #[{}]", field_name, name);
            let call = quote_spanned! {ty.span()=>
                shown_with_display::<#ty>();
            };

            Some(quote! {
                const _: fn() = || {
                    #[diagnostic::on_unimplemented(
                        message = "`{Self}` does not implement `Display`",
                        label = #label,
                        note = "implement `Display` for it, or make the field `pub(crate)` or private"
                    )]
                    trait ShownWithDisplay {}
                    impl<T: ?Sized + ::core::fmt::Display> ShownWithDisplay for T {}
                    fn shown_with_display<T: ?Sized + ShownWithDisplay>() {}
                    #call
                };
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_struct(item: TokenStream) -> String {
        expand("GenerateToString", TokenStream::new(), item).to_string()
    }

    #[test]
    fn test_struct_is_kept_first() {
        let item = quote! {
            pub struct Coffee {
                pub size: u32,
                pub(crate) cost: u32,
            }
        };

        let out = expand_struct(item.clone());
        assert!(out.starts_with(&item.to_string()));
    }

    #[test]
    fn test_other_attributes_are_kept() {
        let item = quote! {
            #[derive(Debug)]
            struct Unit;
        };

        let out = expand("GenerateToString", TokenStream::new(), item.clone());
        assert_eq!(out.to_string(), item.to_string());
    }

    #[test]
    fn test_public_fields_require_display() {
        let out = expand_struct(quote! {
            pub struct Tags {
                pub tags: Vec<String>,
                pub(crate) count: Vec<u32>,
                note: Option<String>,
            }
        });

        assert_eq!(out.matches("shown_with_display :: <").count(), 1);
        assert!(out.contains("shown_with_display :: < Vec < String > >"));
        assert!(out.contains("public field `tags` is shown by #[GenerateToString]"));
        assert!(!out.contains("Vec < u32 > >"));
    }

    #[test]
    fn test_keyword_field_label_is_unraw() {
        let out = expand_struct(quote! {
            pub struct Pastry { pub r#type: String }
        });

        assert!(out.contains("public field `type` is shown"));
    }

    #[test]
    fn test_generic_and_tuple_structs_are_not_checked() {
        let generic = expand_struct(quote! {
            pub struct Page<T> { pub items: Vec<T> }
        });
        let tuple = expand_struct(quote! {
            pub struct Id(pub Vec<u8>);
        });

        assert!(!generic.contains("shown_with_display"));
        assert!(!tuple.contains("shown_with_display"));
    }

    #[test]
    fn test_arguments_are_rejected() {
        let out = expand(
            "GenerateToString",
            quote!(verbose),
            quote!(struct Coffee;),
        );

        let rendered = out.to_string();
        assert!(rendered.contains("compile_error"));
        assert!(rendered.contains("takes no arguments"));
    }

    #[test]
    fn test_non_struct_items_are_rejected() {
        let out = expand(
            "GenerateToStringAttribute",
            TokenStream::new(),
            quote!(enum Size { Small, Large }),
        );

        let rendered = out.to_string();
        assert!(rendered.contains("compile_error"));
        assert!(rendered.contains("#[GenerateToStringAttribute] can only be applied to structs"));
    }
}
