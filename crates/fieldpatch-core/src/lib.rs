//! Core runtime for fieldpatch: dotted paths, the traversal traits records
//! implement, the field locator, the value coercer, and the patcher that
//! drives them over a patch set.
#![warn(unreachable_pub)]

extern crate self as fieldpatch;

#[macro_use]
pub(crate) mod value_registry;

// public exports are one module level down
pub mod coerce;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod locate;
pub mod obs;
pub mod patch;
pub mod path;
pub mod traits;
pub mod value;

///
/// Prelude
///
/// Vocabulary needed to build and apply a patch set.
/// Errors, sinks, and the locator stay one module level down.
///

pub mod prelude {
    pub use crate::{
        patch::{PatchSet, Patcher},
        path::Path,
        traits::Patchable,
        value::{NumericLiteral, PatchValue, Value},
    };
}
