use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

pub fn expand_element(input: DeriveInput) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        #[automatically_derived]
        impl #impl_generics ::vbridge_domain::element::Element for #ident #ty_generics #where_clause {
            #[inline]
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            #[inline]
            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            #[inline]
            fn into_any(
                self: ::std::sync::Arc<Self>,
            ) -> ::std::sync::Arc<dyn ::std::any::Any + ::std::marker::Send + ::std::marker::Sync> {
                self
            }

            #[inline]
            fn type_tag(&self) -> ::vbridge_domain::element::TypeTag {
                ::vbridge_domain::element::TypeTag::of::<Self>()
            }
        }
    }
}
