use thiserror::Error as ThisError;

// re-exports
pub use fieldpatch_core::error::{CoerceError, NumericFailure, PatchError, PatchErrorKind};
#[cfg(feature = "json")]
pub use fieldpatch_core::json::JsonPatchError;

///
/// Error
/// Facade error covering every way a patch request can fail.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Patch(#[from] PatchError),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] JsonPatchError),
}
