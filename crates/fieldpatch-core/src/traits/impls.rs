use crate::{
    traits::{Node, PatchField, Patchable, Refusal},
    value::{Value, ValueKind},
};
use std::collections::VecDeque;

// native leaves
macro_rules! impl_native_leaves {
    ( $( ($variant:ident, $ty:ty, $label:literal, $class:expr) ),* $(,)? ) => {
        $(
            impl PatchField for $ty {
                fn kind(&self) -> ValueKind {
                    ValueKind::$variant
                }

                fn assign(&mut self, value: Value) -> Result<(), Refusal> {
                    match value {
                        Value::$variant(inner) => {
                            *self = inner;
                            Ok(())
                        }
                        other => Err(Refusal::Kind(other)),
                    }
                }
            }

            impl Patchable for $ty {
                fn node(&mut self) -> Node<'_> {
                    Node::Field(self)
                }
            }
        )*
    };
}

value_registry_entries!(impl_native_leaves);

// indirection

impl<T: Patchable + ?Sized> Patchable for Box<T> {
    fn node(&mut self) -> Node<'_> {
        (**self).node()
    }
}

impl<T: Patchable + ?Sized> Patchable for &mut T {
    fn node(&mut self) -> Node<'_> {
        (**self).node()
    }
}

impl<T: Patchable> Patchable for Option<T> {
    fn node(&mut self) -> Node<'_> {
        match self {
            Some(inner) => inner.node(),
            None => Node::Missing,
        }
    }
}

// sequences

impl<T> Patchable for Vec<T> {
    fn node(&mut self) -> Node<'_> {
        Node::Sequence
    }
}

impl<T> Patchable for VecDeque<T> {
    fn node(&mut self) -> Node<'_> {
        Node::Sequence
    }
}

impl<T> Patchable for [T] {
    fn node(&mut self) -> Node<'_> {
        Node::Sequence
    }
}

impl<T, const N: usize> Patchable for [T; N] {
    fn node(&mut self) -> Node<'_> {
        Node::Sequence
    }
}

///
/// TESTS
///
