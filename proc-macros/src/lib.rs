mod as_message;
mod discriminant;
mod helpers;
mod message_attrs;
mod transitive_child;

use crate::as_message::derive_as_message_impl;
use crate::discriminant::derive_discriminant_impl;
use crate::message_attrs::message_attrs_impl;
use crate::transitive_child::derive_transitive_child_impl;

use proc_macro::TokenStream;

/// Derive the `ToDiscriminant` trait and create a `<Type Name>Discriminant` enum.
///
/// This derive macro is enum-only. The discriminant enum is a copy of the input enum with all fields of every variant removed.
///
/// # Helper attributes
/// - `#[sub_discriminant]`: only usable on variants with a single field; the discriminant of that field is included in the
///   discriminant variant, acting as a sub-discriminant.
/// - `#[discriminant_attr(…)]`: usable on the enum itself or on any variant; applies `#[…]` in its place on the discriminant.
///
/// All other attributes on variants and on the type itself are cleared when constructing the discriminant.
#[proc_macro_derive(ToDiscriminant, attributes(sub_discriminant, discriminant_attr))]
pub fn derive_discriminant(input_item: TokenStream) -> TokenStream {
	TokenStream::from(derive_discriminant_impl(input_item.into()).unwrap_or_else(|err| err.to_compile_error()))
}

/// Derive the `TransitiveChild` trait and generate `From` impls for converting into the parent and the top parent type.
///
/// This macro cannot be invoked on the top parent itself (which has no parent but itself); implement `TransitiveChild`
/// manually there, with `Parent` and `TopParent` both set to `Self`.
///
/// # Helper attributes
/// - `#[parent(<Type>, <Expr>)]` (**required**): the parent type and a single-argument function converting a value of this
///   type into the parent type.
/// - `#[parent_is_top]`: the parent type has no further parent (required to avoid overlapping `From` impls).
#[proc_macro_derive(TransitiveChild, attributes(parent, parent_is_top))]
pub fn derive_transitive_child(input_item: TokenStream) -> TokenStream {
	TokenStream::from(derive_transitive_child_impl(input_item.into()).unwrap_or_else(|err| err.to_compile_error()))
}

/// Derive the `AsMessage` trait, providing the dotted-path name of a message discriminant.
///
/// # Helper attributes
/// - `#[child]`: only on tuple variants with a single field; the message path continues inside the variant.
#[proc_macro_derive(AsMessage, attributes(child))]
pub fn derive_message(input_item: TokenStream) -> TokenStream {
	TokenStream::from(derive_as_message_impl(input_item.into()).unwrap_or_else(|err| err.to_compile_error()))
}

/// Abbreviation for the usual [`ToDiscriminant`], [`TransitiveChild`] and [`AsMessage`] invocations on a message enum.
///
/// This attribute is enum-only. All three derives must be in scope at the usage site.
///
/// # Usage
/// 1. No arguments: for the top-level message enum. Derives `ToDiscriminant` and `AsMessage` on the discriminant, and
///    implements `TransitiveChild` on both (parent and top parent being the types themselves).
/// 2. `#[impl_message(<Type>, <Ident>)]`: for message enums whose direct parent is the top-level message enum, where
///    `<Type>` is the parent message type and `<Ident>` the variant used to construct this child.
/// 3. `#[impl_message(<Type>, <Type>, <Ident>)]`: for deeper message enums, with the top parent type, the parent type,
///    and the parent variant used to construct this child.
///
/// The discriminants additionally derive `Debug, Copy, Clone, PartialEq, Eq, Hash`.
#[proc_macro_attribute]
pub fn impl_message(attr: TokenStream, input_item: TokenStream) -> TokenStream {
	TokenStream::from(message_attrs_impl(attr.into(), input_item.into()).unwrap_or_else(|err| err.to_compile_error()))
}
