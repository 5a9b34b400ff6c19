use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, WhereClause};

pub fn where_clause_with_bounds(
    where_clause: Option<&WhereClause>,
    bounds: &[TokenStream],
) -> TokenStream {
    if bounds.is_empty() {
        return where_clause
            .as_ref()
            .map_or_else(|| quote!(), |wc| quote!(#wc));
    }

    if let Some(wc) = where_clause {
        let preds = wc.predicates.iter();
        quote!(where #(#preds,)* #(#bounds),*)
    } else {
        quote!(where #(#bounds),*)
    }
}

/// `T: Patchable` for every type parameter.
pub fn patchable_bounds(generics: &Generics) -> Vec<TokenStream> {
    generics
        .type_params()
        .map(|param| {
            let ident = &param.ident;
            quote!(#ident: ::fieldpatch::traits::Patchable)
        })
        .collect()
}
