use proc_macro2::{Ident, Span};
use syn::Token;
use syn::parse::{Parse, ParseStream};

pub fn call_site_ident(name: impl AsRef<str>) -> Ident {
	Ident::new(name.as_ref(), Span::call_site())
}

/// Parses `(left, right)`
pub struct Pair<F, S> {
	pub first: F,
	pub _sep: Token![,],
	pub second: S,
}

impl<F, S> Parse for Pair<F, S>
where
	F: Parse,
	S: Parse,
{
	fn parse(input: ParseStream) -> syn::Result<Self> {
		Ok(Self {
			first: input.parse()?,
			_sep: input.parse()?,
			second: input.parse()?,
		})
	}
}
