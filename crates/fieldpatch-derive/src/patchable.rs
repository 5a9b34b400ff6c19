use crate::util::{patchable_bounds, where_clause_with_bounds};
use convert_case::{Case, Casing};
use darling::{
    FromDeriveInput, FromField, FromVariant,
    ast::{Data, Fields, Style},
    util::Flag,
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, Generics, Ident, ext::IdentExt};

///
/// PatchableInput
///

#[derive(FromDeriveInput)]
#[darling(
    attributes(patch),
    supports(struct_named, struct_newtype, enum_newtype, enum_unit)
)]
struct PatchableInput {
    ident: Ident,
    generics: Generics,
    data: Data<PatchableVariant, PatchableField>,
}

///
/// PatchableField
///

#[derive(FromField)]
#[darling(attributes(patch))]
struct PatchableField {
    ident: Option<Ident>,
    rename: Option<String>,
    readonly: Flag,
    skip: Flag,
}

impl PatchableField {
    // rename wins; otherwise UpperCamel of the Rust name
    fn patch_ident(&self, ident: &Ident) -> String {
        self.rename
            .clone()
            .unwrap_or_else(|| ident.unraw().to_string().to_case(Case::Pascal))
    }
}

///
/// PatchableVariant
///

#[derive(FromVariant)]
#[darling(attributes(patch))]
struct PatchableVariant {
    ident: Ident,
    rename: Option<String>,
    fields: Fields<PatchableField>,
}

impl PatchableVariant {
    // text a unit-only enum leaf accepts for this variant
    fn patch_name(&self) -> String {
        self.rename
            .clone()
            .unwrap_or_else(|| self.ident.unraw().to_string())
    }
}

// derive_patchable
pub fn derive_patchable(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let input = match PatchableInput::from_derive_input(&input) {
        Ok(input) => input,
        Err(err) => return err.write_errors(),
    };

    let expanded = match &input.data {
        Data::Struct(fields) if fields.style == Style::Tuple => expand_newtype(&input, fields),
        Data::Struct(fields) => expand_record(&input, fields),
        Data::Enum(variants)
            if !variants.is_empty()
                && variants.iter().all(|v| v.fields.style == Style::Unit) =>
        {
            expand_unit_leaf(&input, variants)
        }
        Data::Enum(variants) => expand_wrapper(&input, variants),
    };

    expanded.unwrap_or_else(|err| err.to_compile_error())
}

// Delegating fields carry no address of their own, so field attributes
// have nothing to apply to.
fn reject_field_attrs(field: &PatchableField, owner: &Ident) -> Result<(), Error> {
    if field.rename.is_some() || field.readonly.is_present() || field.skip.is_present() {
        return Err(Error::new_spanned(
            owner,
            "#[patch(..)] is not supported on a delegating field; \
             put it on the field that holds this type",
        ));
    }

    Ok(())
}

fn expand_record(
    input: &PatchableInput,
    fields: &Fields<PatchableField>,
) -> Result<TokenStream, Error> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let where_clause = where_clause_with_bounds(where_clause, &patchable_bounds(&input.generics));

    let mut patch_idents: Vec<String> = Vec::new();
    let mut arms = Vec::new();

    for field in fields.iter().filter(|field| !field.skip.is_present()) {
        let field_ident = field.ident.as_ref().expect("named field");
        let patch_ident = field.patch_ident(field_ident);

        if patch_idents.contains(&patch_ident) {
            return Err(Error::new_spanned(
                field_ident,
                format!("duplicate patch identifier `{patch_ident}`"),
            ));
        }

        let access = if field.readonly.is_present() {
            quote!(::fieldpatch::traits::Access::ReadOnly)
        } else {
            quote!(::fieldpatch::traits::Access::Writable)
        };

        arms.push(quote! {
            #patch_ident => ::core::option::Option::Some(
                ::fieldpatch::traits::FieldSlot::new(#patch_ident, #access, &mut self.#field_ident),
            ),
        });
        patch_idents.push(patch_ident);
    }

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::fieldpatch::traits::Patchable for #ident #ty_generics #where_clause {
            fn node(&mut self) -> ::fieldpatch::traits::Node<'_> {
                ::fieldpatch::traits::Node::Record(self)
            }
        }

        #[automatically_derived]
        impl #impl_generics ::fieldpatch::traits::Record for #ident #ty_generics #where_clause {
            fn field_idents(&self) -> &'static [&'static str] {
                &[#(#patch_idents),*]
            }

            fn field_mut(
                &mut self,
                ident: &str,
            ) -> ::core::option::Option<::fieldpatch::traits::FieldSlot<'_>> {
                match ident {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

// Newtype: the walk passes straight through to the wrapped value.
fn expand_newtype(
    input: &PatchableInput,
    fields: &Fields<PatchableField>,
) -> Result<TokenStream, Error> {
    let ident = &input.ident;

    for field in fields.iter() {
        reject_field_attrs(field, ident)?;
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let where_clause = where_clause_with_bounds(where_clause, &patchable_bounds(&input.generics));

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::fieldpatch::traits::Patchable for #ident #ty_generics #where_clause {
            fn node(&mut self) -> ::fieldpatch::traits::Node<'_> {
                ::fieldpatch::traits::Patchable::node(&mut self.0)
            }
        }
    })
}

// Unit-only enum: a text leaf set by variant name.
fn expand_unit_leaf(
    input: &PatchableInput,
    variants: &[PatchableVariant],
) -> Result<TokenStream, Error> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut names: Vec<String> = Vec::new();
    let mut arms = Vec::new();

    for variant in variants {
        let variant_ident = &variant.ident;
        let name = variant.patch_name();

        if names.contains(&name) {
            return Err(Error::new_spanned(
                variant_ident,
                format!("duplicate patch name `{name}`"),
            ));
        }

        arms.push(quote! {
            #name => ::core::option::Option::Some(Self::#variant_ident),
        });
        names.push(name);
    }

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::fieldpatch::traits::PatchField for #ident #ty_generics #where_clause {
            fn kind(&self) -> ::fieldpatch::value::ValueKind {
                ::fieldpatch::value::ValueKind::Text
            }

            fn assign(
                &mut self,
                value: ::fieldpatch::value::Value,
            ) -> ::core::result::Result<(), ::fieldpatch::traits::Refusal> {
                let name = match value {
                    ::fieldpatch::value::Value::Text(name) => name,
                    other => {
                        return ::core::result::Result::Err(
                            ::fieldpatch::traits::Refusal::Kind(other),
                        );
                    }
                };

                let next = match name.as_str() {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                };

                match next {
                    ::core::option::Option::Some(next) => {
                        *self = next;
                        ::core::result::Result::Ok(())
                    }
                    ::core::option::Option::None => ::core::result::Result::Err(
                        ::fieldpatch::traits::Refusal::Unaccepted(
                            ::fieldpatch::value::Value::Text(name),
                        ),
                    ),
                }
            }
        }

        #[automatically_derived]
        impl #impl_generics ::fieldpatch::traits::Patchable for #ident #ty_generics #where_clause {
            fn node(&mut self) -> ::fieldpatch::traits::Node<'_> {
                ::fieldpatch::traits::Node::Field(self)
            }
        }
    })
}

fn expand_wrapper(
    input: &PatchableInput,
    variants: &[PatchableVariant],
) -> Result<TokenStream, Error> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let where_clause = where_clause_with_bounds(where_clause, &patchable_bounds(&input.generics));

    let mut arms = Vec::new();

    for variant in variants {
        let variant_ident = &variant.ident;

        if variant.rename.is_some() {
            return Err(Error::new_spanned(
                variant_ident,
                "#[patch(rename)] only applies to variants of a unit-only enum",
            ));
        }

        match variant.fields.style {
            Style::Unit => arms.push(quote! {
                Self::#variant_ident => ::fieldpatch::traits::Node::Missing,
            }),
            Style::Tuple | Style::Struct => {
                for field in variant.fields.iter() {
                    reject_field_attrs(field, variant_ident)?;
                }

                arms.push(quote! {
                    Self::#variant_ident(inner) => ::fieldpatch::traits::Patchable::node(inner),
                });
            }
        }
    }

    // an empty enum has no value to match on
    let body = if variants.is_empty() {
        quote!(match *self {})
    } else {
        quote!(match self { #(#arms)* })
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::fieldpatch::traits::Patchable for #ident #ty_generics #where_clause {
            fn node(&mut self) -> ::fieldpatch::traits::Node<'_> {
                #body
            }
        }
    })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: TokenStream) -> String {
        derive_patchable(input).to_string()
    }

    fn is_compile_error(output: &str) -> bool {
        output.contains("compile_error")
    }

    #[test]
    fn variant_field_attributes_are_rejected() {
        for input in [
            quote!(enum Role { Admin(#[patch(readonly)] Profile) }),
            quote!(enum Role { Admin(#[patch(skip)] Profile) }),
            quote!(enum Role { Admin(#[patch(rename = "Boss")] Profile) }),
        ] {
            let output = expand(input);

            assert!(is_compile_error(&output), "{output}");
            assert!(output.contains("not supported on a delegating field"), "{output}");
        }
    }

    #[test]
    fn newtype_field_attributes_are_rejected() {
        let output = expand(quote!(struct UserId(#[patch(readonly)] u64);));

        assert!(is_compile_error(&output), "{output}");
    }

    #[test]
    fn rename_on_wrapper_variant_is_rejected() {
        let output = expand(quote!(enum Role { #[patch(rename = "boss")] Admin(Profile), Guest }));

        assert!(is_compile_error(&output), "{output}");
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let output = expand(quote!(struct Person { name: String, #[patch(rename = "Name")] alias: String }));
        assert!(output.contains("duplicate patch identifier"), "{output}");

        let output = expand(quote!(enum Status { Active, #[patch(rename = "Active")] Live }));
        assert!(output.contains("duplicate patch name"), "{output}");
    }

    #[test]
    fn supported_shapes_expand_cleanly() {
        for input in [
            quote!(struct Person { name: String }),
            quote!(struct UserId(u64);),
            quote!(enum Status { Active, Inactive }),
            quote!(enum Contact { Email(Email), Unknown }),
            quote!(enum Never {}),
        ] {
            let output = expand(input);

            assert!(!is_compile_error(&output), "{output}");
        }
    }

    #[test]
    fn unit_only_enum_becomes_a_leaf() {
        let output = expand(quote!(enum Status { Active, Inactive }));

        assert!(output.contains("PatchField"), "{output}");
        assert!(output.contains("Node :: Field"), "{output}");
    }

    #[test]
    fn other_shapes_are_rejected() {
        for input in [
            quote!(struct Pair(u8, u8);),
            quote!(struct Marker;),
            quote!(enum Shape { Point { x: i32 } }),
        ] {
            assert!(is_compile_error(&expand(input)));
        }
    }
}
