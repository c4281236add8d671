use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, DeriveInput, Ident, LitStr, Token, Type,
};

struct BaseAttribute {
    base: Type,
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `BaseType` or
/// `BaseType, crate_path = "path::to::crate"`.
impl Parse for BaseAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let base: Type = input.parse()?;

        let mut crate_path: syn::Path = syn::parse_quote!(::poly_forward_list);
        if input.peek(Token![,]) {
            let _: Token![,] = input.parse()?;
            let key: Ident = input.parse()?;
            if key != "crate_path" {
                return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
            }

            let _: Token![=] = input.parse()?;
            let value: LitStr = input.parse()?;
            crate_path = value.parse()?;
        }

        Ok(BaseAttribute { base, crate_path })
    }
}

/// Derive macro implementing the `AsBase` projection for list payload types.
///
/// Each `#[as_base(dyn Trait)]` attribute generates one
/// `unsafe impl AsBase<dyn Trait>` whose body is the raw-pointer unsize
/// coercion, so the type can be stored in a `PolyForwardList<dyn Trait>`.
/// The attribute may be repeated for types stored behind several bases.
#[proc_macro_derive(AsBase, attributes(as_base))]
pub fn as_base_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut impls = Vec::new();

    for attr in &input.attrs {
        if attr.path().is_ident("as_base") {
            match attr.parse_args::<BaseAttribute>() {
                Ok(BaseAttribute { base, crate_path }) => {
                    impls.push(quote! {
                        unsafe impl #impl_generics #crate_path::AsBase<#base> for #struct_name #ty_generics #where_clause {
                            #[inline]
                            fn base_ptr(ptr: *mut Self) -> *mut (#base) {
                                ptr
                            }
                        }
                    });
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    if impls.is_empty() {
        return syn::Error::new_spanned(
            struct_name,
            "expected at least one `#[as_base(BaseType)]` attribute",
        )
        .to_compile_error()
        .into();
    }

    let expanded = quote! {
        #(#impls)*
    };

    TokenStream::from(expanded)
}
