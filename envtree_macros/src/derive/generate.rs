//! Token generation for `#[derive(Populate)]`.

use proc_macro2::TokenStream;
use quote::quote;

use super::crate_path;
use super::parse::Record;

/// Emits the `walk_hook` override for records that opt into a walker.
fn walk_hook_tokens(record: &Record, krate: &TokenStream) -> TokenStream {
    if !record.walker {
        return TokenStream::new();
    }
    quote! {
        fn walk_hook(&self) -> ::core::option::Option<#krate::WalkHook> {
            ::core::option::Option::Some(
                <Self as #krate::StructWalker>::walk as #krate::WalkHook,
            )
        }
    }
}

/// Emits the `Populate` and `EnvField` impls for `record`.
pub(crate) fn populate_impl(record: &Record, generics: &syn::Generics) -> TokenStream {
    let krate = crate_path::resolve(record.crate_path.as_ref());
    let ident = &record.ident;
    let name = &record.name;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_entries = record.fields.iter().map(|field| {
        let member = &field.ident;
        let key = &field.key;
        quote! {
            #krate::Field::new(#key, #krate::EnvField::field_mut(&mut self.#member))
        }
    });
    let walk_hook = walk_hook_tokens(record, &krate);

    quote! {
        impl #impl_generics #krate::Populate for #ident #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                #name
            }

            fn fields(&mut self) -> ::std::vec::Vec<#krate::Field<'_>> {
                ::std::vec![#(#field_entries),*]
            }

            #walk_hook
        }

        impl #impl_generics #krate::EnvField for #ident #ty_generics #where_clause {
            fn field_mut(&mut self) -> #krate::FieldMut<'_> {
                #krate::FieldMut::Record(self)
            }
        }
    }
}
