use proc_macro2::{Span, TokenStream};
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

pub fn derive_as_message_impl(input_item: TokenStream) -> syn::Result<TokenStream> {
	let input = syn::parse2::<DeriveInput>(input_item)?;

	let data = match input.data {
		Data::Enum(data) => data,
		_ => return Err(syn::Error::new(Span::call_site(), "tried to derive AsMessage for a non-enum")),
	};

	let input_type = &input.ident;
	let mut arms = vec![];

	for var in &data.variants {
		let ident = &var.ident;
		let name = ident.to_string();
		let is_child = var.attrs.iter().any(|a| a.path().is_ident("child"));

		if is_child {
			if !matches!(&var.fields, Fields::Unnamed(fields) if fields.unnamed.len() == 1) {
				return Err(syn::Error::new(var.span(), "#[child] requires a tuple variant with exactly one field"));
			}
			arms.push(quote::quote! {
				#input_type::#ident(x) => format!("{}.{}", #name, x.local_name())
			});
		} else {
			arms.push(quote::quote! {
				#input_type::#ident { .. } => #name.to_string()
			});
		}
	}

	Ok(quote::quote! {
		impl AsMessage for #input_type {
			fn local_name(self) -> String {
				match self {
					#(#arms),*
				}
			}
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn child_variants_delegate_to_inner_name() {
		let res = derive_as_message_impl(quote::quote! {
			pub enum ToolMessageDiscriminant {
				#[child]
				BoxTool(BoxToolMessageDiscriminant),
				UpdateHints,
			}
		});
		assert!(res.is_ok());
		let text = res.unwrap().to_string();
		assert!(text.contains("local_name"));
		assert!(text.contains("BoxTool"));
	}

	#[test]
	fn child_on_struct_variant_is_rejected() {
		let res = derive_as_message_impl(quote::quote! {
			pub enum E {
				#[child]
				A { x: u8 },
			}
		});
		assert!(res.is_err());
	}
}
