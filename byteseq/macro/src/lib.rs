use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::*;
use syn::spanned::Spanned;

/// Derives `byteseq::Scalar` for a struct with exactly one field of a scalar type.
///
/// The struct must also be `Copy`.
#[proc_macro_derive(Scalar)]
pub fn derive_scalar(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_scalar_inner(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_scalar_inner(input: DeriveInput) -> Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let fields = match &input.data {
        Data::Struct(s) => &s.fields,
        Data::Enum(_) => return Err(Error::new(input.span(), "Scalar cannot be derived for an enum")),
        Data::Union(_) => return Err(Error::new(input.span(), "This macro should not be used on a union type")),
    };
    if fields.len() != 1 {
        return Err(Error::new(fields.span(), "Scalar can only be derived for a struct with exactly one field"));
    }
    let field = fields.iter().next().ok_or_else(|| Error::new(fields.span(), "expected a field"))?;
    let inner = &field.ty;
    let (get, construct) = match &field.ident {
        Some(ident) => (
            quote! { self.#ident },
            quote! { Self { #ident: <#inner as ::byteseq::Scalar>::from_ne_bytes(bytes) } },
        ),
        None => (
            quote! { self.0 },
            quote! { Self(<#inner as ::byteseq::Scalar>::from_ne_bytes(bytes)) },
        ),
    };

    Ok(quote! {
        impl #impl_generics ::byteseq::Scalar for #name #ty_generics #where_clause {
            type Bytes = <#inner as ::byteseq::Scalar>::Bytes;
            type Word = <#inner as ::byteseq::Scalar>::Word;

            #[inline]
            fn to_ne_bytes(self) -> Self::Bytes {
                <#inner as ::byteseq::Scalar>::to_ne_bytes(#get)
            }
            #[inline]
            fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                #construct
            }
        }
    })
}
