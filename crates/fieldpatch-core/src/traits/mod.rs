mod impls;

use crate::value::{Value, ValueKind};

// ============================================================================
// TRAVERSAL
// ============================================================================
//
// These traits describe *how* the locator walks a value, one step at a
// time, without runtime type inspection.
//

///
/// Patchable
///
/// Anything the locator can stand on. `node` classifies the value for one
/// step of the walk; indirections (`Box`, `Option`, wrapper enums) answer
/// with the node of the value they hold.
///

pub trait Patchable {
    fn node(&mut self) -> Node<'_>;
}

///
/// Node
///

pub enum Node<'a> {
    /// Structured record; consumes one path token.
    Record(&'a mut dyn Record),

    /// Terminal leaf; the walk stops here.
    Field(&'a mut dyn PatchField),

    /// Array or list. Element addressing is not supported, so the walk
    /// always fails on one.
    Sequence,

    /// Nothing addressable (an empty `Option`, a unit wrapper variant).
    Missing,
}

///
/// Record
///
/// Field lookup for a structured record. Identifiers are matched exactly
/// and in declaration order.
///

pub trait Record {
    /// Addressable identifiers, in declaration order.
    fn field_idents(&self) -> &'static [&'static str];

    fn field_mut(&mut self, ident: &str) -> Option<FieldSlot<'_>>;
}

///
/// Access
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Access {
    Writable,
    ReadOnly,
}

impl Access {
    /// Access of a field reached through a parent with `self` access.
    #[must_use]
    pub const fn then(self, child: Self) -> Self {
        match (self, child) {
            (Self::Writable, Self::Writable) => Self::Writable,
            _ => Self::ReadOnly,
        }
    }

    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Writable)
    }
}

///
/// FieldSlot
///
/// One matched field of a record: its identifier, its access, and the
/// value it holds.
///

pub struct FieldSlot<'a> {
    ident: &'static str,
    access: Access,
    value: &'a mut dyn Patchable,
}

impl<'a> FieldSlot<'a> {
    pub const fn new(ident: &'static str, access: Access, value: &'a mut dyn Patchable) -> Self {
        Self {
            ident,
            access,
            value,
        }
    }

    #[must_use]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    #[must_use]
    pub const fn access(&self) -> Access {
        self.access
    }

    #[must_use]
    pub fn into_value(self) -> &'a mut dyn Patchable {
        self.value
    }
}

// ============================================================================
// LEAVES
// ============================================================================

///
/// PatchField
///
/// A terminal field that accepts exactly one `ValueKind`.
///
/// `assign` hands a refused value back untouched, so the caller can report
/// what it was given. Native leaves accept every value of their kind;
/// derived enum leaves accept only the text naming one of their variants.
///

pub trait PatchField {
    fn kind(&self) -> ValueKind;

    fn assign(&mut self, value: Value) -> Result<(), Refusal>;
}

///
/// Refusal
///

#[derive(Clone, Debug, PartialEq)]
pub enum Refusal {
    /// The value is of another kind.
    Kind(Value),

    /// Right kind, but not a value this leaf can hold.
    Unaccepted(Value),
}
