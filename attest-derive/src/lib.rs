use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Implements `attest::Flags` for a fieldless enum with explicit
/// discriminants, so its values can be used with the flag checks.
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Flags)]
/// #[repr(u8)]
/// enum Perm {
///     Read = 1,
///     Write = 2,
///     ReadWrite = 3,
/// }
/// ```
#[proc_macro_derive(Flags)]
pub fn derive_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident.clone();

    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "#[derive(Flags)] requires an enum")
            .to_compile_error()
            .into();
    };
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(
                variant,
                "#[derive(Flags)] requires fieldless variants",
            )
            .to_compile_error()
            .into();
        }
        if variant.discriminant.is_none() {
            return syn::Error::new_spanned(
                variant,
                "#[derive(Flags)] requires an explicit discriminant for every variant",
            )
            .to_compile_error()
            .into();
        }
    }

    let expanded = quote! {
        impl attest::Flags for #name {
            fn bits(self) -> u64 {
                self as u64
            }
        }
    };
    TokenStream::from(expanded)
}
