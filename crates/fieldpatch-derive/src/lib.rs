use proc_macro::TokenStream;

mod patchable;
mod util;

/// Derive `Patchable` (and `Record` for structs).
///
/// Structs with named fields become records. Each field is addressed by its
/// name in UpperCamel case (`first_name` → `FirstName`) unless renamed:
///
/// - `#[patch(rename = "X")]` address the field as `X`
/// - `#[patch(readonly)]` resolvable, but never written
/// - `#[patch(skip)]` not addressable at all
///
/// Tuple structs with one field are transparent: the walk passes through to
/// the wrapped value.
///
/// Enums whose variants are all unit variants become text leaves, set by
/// variant name (`#[patch(rename = "x")]` on a variant changes the name).
/// Other enums act as dynamic wrappers: newtype variants delegate to the
/// value they hold, unit variants hold nothing addressable.
///
/// Fields that only delegate (a newtype's field, a wrapper variant's field)
/// take no `#[patch(..)]` attributes.
#[proc_macro_derive(Patchable, attributes(patch))]
pub fn derive_patchable(input: TokenStream) -> TokenStream {
    patchable::derive_patchable(input.into()).into()
}
