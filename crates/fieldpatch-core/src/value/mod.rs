mod literal;

#[cfg(test)]
mod tests;

use std::fmt;

// re-exports
pub use literal::{NumericLiteral, PatchValue};

///
/// NumericClass
///
/// Width and signedness of a numeric leaf, used to route deferred
/// numeric literals.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NumericClass {
    Signed { bits: u32 },
    Unsigned { bits: u32 },
    Float { bits: u32 },
}

macro_rules! define_values {
    ( $( ($variant:ident, $ty:ty, $label:literal, $class:expr) ),* $(,)? ) => {
        ///
        /// Value
        ///
        /// A concrete native value, tagged with the exact leaf type it
        /// may be assigned to. No implicit conversion happens between
        /// variants.
        ///

        #[derive(Clone, Debug, PartialEq)]
        pub enum Value {
            $( $variant($ty), )*
        }

        impl Value {
            /// Exact leaf type this value carries.
            #[must_use]
            pub const fn kind(&self) -> ValueKind {
                match self {
                    $( Self::$variant(_) => ValueKind::$variant, )*
                }
            }
        }

        ///
        /// ValueKind
        ///
        /// Variant tag of `Value`, also reported by every patchable leaf.
        ///

        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum ValueKind {
            $( $variant, )*
        }

        impl ValueKind {
            /// Stable human-readable label for diagnostics.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )*
                }
            }

            #[must_use]
            pub const fn numeric_class(self) -> Option<NumericClass> {
                match self {
                    $( Self::$variant => $class, )*
                }
            }
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$ty> for PatchValue {
                fn from(value: $ty) -> Self {
                    Self::Concrete(Value::$variant(value))
                }
            }
        )*
    };
}

value_registry_entries!(define_values);

impl ValueKind {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.numeric_class().is_some()
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
