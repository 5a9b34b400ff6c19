//! ## Crate layout
//! - `core`: paths, traversal traits, locator, coercer, patcher, and
//!   observability.
//! - `error`: the facade error plus the core patch errors.
//! - derive: `#[derive(Patchable)]` for records and wrapper enums.
//!
//! The `prelude` module carries everything needed to declare patchable
//! records and apply a patch set to them.

pub use fieldpatch_core as core;

pub mod error;

// module re-exports, so derive output can name `::fieldpatch::traits::*`
pub use fieldpatch_core::{coerce, locate, obs, patch, path, traits, value};
#[cfg(feature = "json")]
pub use fieldpatch_core::json;

pub use error::Error;
pub use fieldpatch_derive::Patchable;

use crate::patch::PatchSet;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Apply `patch` to `target` with the default `Patcher`.
pub fn patch_it(
    target: &mut dyn traits::Patchable,
    patch: &PatchSet,
) -> Result<(), error::PatchError> {
    patch::Patcher::new().patch_it(target, patch)
}

/// Decode a flat JSON patch document and apply it with the default
/// `Patcher`.
#[cfg(feature = "json")]
pub fn patch_json(
    target: &mut dyn traits::Patchable,
    document: serde_json::Value,
) -> Result<(), Error> {
    let patch = PatchSet::from_json(document)?;
    patch_it(target, &patch)?;

    Ok(())
}

///
/// Prelude
/// `Patchable` is exported twice: the derive macro and the trait live in
/// separate namespaces.
///

pub mod prelude {
    pub use crate::{
        Patchable,
        patch::{PatchSet, Patcher},
        path::Path,
        traits::Patchable,
        value::{NumericLiteral, PatchValue, Value},
    };
}
