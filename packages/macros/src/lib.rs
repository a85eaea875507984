//! Marker attributes for reprgen.
//!
//! The attributes do not change the item they are placed on. They exist so
//! that `#[GenerateToString]` compiles; the generator picks the marker up from
//! source and writes the `Display` impl separately.
//!
//! The generated impl formats every `pub` named field with `Display`, so each
//! such field type must implement it. The attribute checks this and reports a
//! missing impl on the field itself. Fields that should not be shown can be
//! made `pub(crate)` (listed as internal) or private (left out).
//!
//! Host crates normally do not depend on the names here directly: the marker
//! definition written by the generator re-exports both attributes at the crate
//! root.

use proc_macro::TokenStream;

mod marker;

/// Marks a struct for `Display` generation.
///
/// Every `pub` named field must implement `Display`.
///
/// ```ignore
/// use crate::GenerateToString;
///
/// #[GenerateToString]
/// pub struct Coffee {
///     pub size: u32,
///     pub(crate) cost: u32,
/// }
/// ```
#[allow(non_snake_case)]
#[proc_macro_attribute]
pub fn GenerateToString(attr: TokenStream, item: TokenStream) -> TokenStream {
    marker::expand("GenerateToString", attr.into(), item.into()).into()
}

/// Long spelling of [`macro@GenerateToString`]
#[allow(non_snake_case)]
#[proc_macro_attribute]
pub fn GenerateToStringAttribute(attr: TokenStream, item: TokenStream) -> TokenStream {
    marker::expand("GenerateToStringAttribute", attr.into(), item.into()).into()
}
