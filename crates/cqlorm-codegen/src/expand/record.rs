use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let cqlorm = &self.cqlorm;
        let model_ident = &self.model.ident;
        let name = model_ident.unraw().to_string();

        let field_decls = self.expand_field_decls();
        let values = self.expand_values();
        let slots = self.expand_slots();

        quote! {
            impl #cqlorm::Record for #model_ident {
                const NAME: &'static str = #name;

                fn fields() -> Vec<#cqlorm::FieldDecl> {
                    vec![ #( #field_decls, )* ]
                }

                fn values(&self) -> Vec<#cqlorm::Value> {
                    vec![ #( #values, )* ]
                }

                fn slots(&mut self) -> Vec<#cqlorm::FieldSlot<'_>> {
                    vec![ #( #slots, )* ]
                }
            }
        }
    }

    fn expand_field_decls(&self) -> Vec<TokenStream> {
        let cqlorm = &self.cqlorm;
        let model_ident = &self.model.ident;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.ty;
                let name = ident.unraw().to_string();

                let mut decl = quote! {
                    #cqlorm::FieldDecl::new(
                        #name,
                        ::core::any::type_name::<#ty>(),
                        ::core::mem::offset_of!(#model_ident, #ident),
                    )
                };

                if let Some(lit) = &field.name {
                    decl = quote!(#decl.name(#lit));
                }

                if let Some(lit) = &field.cql {
                    decl = quote!(#decl.cql(#lit));
                }

                decl
            })
            .collect()
    }

    fn expand_values(&self) -> Vec<TokenStream> {
        let cqlorm = &self.cqlorm;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;

                if field.is_ignored() {
                    quote!(#cqlorm::Value::Null)
                } else {
                    quote!(#cqlorm::Primitive::to_value(&self.#ident))
                }
            })
            .collect()
    }

    fn expand_slots(&self) -> Vec<TokenStream> {
        let cqlorm = &self.cqlorm;
        let model_ident = &self.model.ident;

        self.model
            .fields
            .iter()
            .filter(|field| !field.is_ignored())
            .map(|field| {
                let ident = &field.ident;

                quote! {
                    #cqlorm::FieldSlot::new(
                        ::core::mem::offset_of!(#model_ident, #ident),
                        &mut self.#ident,
                    )
                }
            })
            .collect()
    }
}
