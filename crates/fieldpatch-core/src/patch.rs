use crate::{
    coerce::coerce,
    error::{PatchError, PatchErrorKind},
    locate::{Located, locate},
    obs::sink::{self, PatchEvent},
    path::Path,
    traits::Patchable,
    value::PatchValue,
};
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// PatchSet
///
/// Paths mapped to the values to store at them. Keys are unique; entries
/// are independent of one another and applied in key order.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct PatchSet(BTreeMap<Path, PatchValue>);

impl PatchSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(
        &mut self,
        path: impl Into<Path>,
        value: impl Into<PatchValue>,
    ) -> Option<PatchValue> {
        self.0.insert(path.into(), value.into())
    }

    /// Builder form of `insert`.
    #[must_use]
    pub fn with(mut self, path: impl Into<Path>, value: impl Into<PatchValue>) -> Self {
        self.insert(path, value);
        self
    }

    pub fn remove(&mut self, path: &Path) -> Option<PatchValue> {
        self.0.remove(path)
    }
}

impl<P, V> FromIterator<(P, V)> for PatchSet
where
    P: Into<Path>,
    V: Into<PatchValue>,
{
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(path, value)| (path.into(), value.into()))
                .collect(),
        )
    }
}

impl<P, V> Extend<(P, V)> for PatchSet
where
    P: Into<Path>,
    V: Into<PatchValue>,
{
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (path, value) in iter {
            self.insert(path, value);
        }
    }
}

///
/// ExcessTokens
///
/// What to do with path tokens left over once a leaf field is reached
/// (`age.extra` when `age` is an integer).
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcessTokens {
    /// Stop at the leaf and patch it.
    #[default]
    Ignore,

    /// Treat the path as unresolved.
    Reject,
}

///
/// PatchOptions
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatchOptions {
    pub excess_tokens: ExcessTokens,
}

///
/// Patcher
///
/// Applies patch sets onto records in place.
///
/// Entries are applied one after another; the first failing entry stops
/// the run and is returned. Entries applied before it stay applied, so a
/// caller that needs all-or-nothing should patch a clone and swap it in.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Patcher {
    options: PatchOptions,
}

impl Patcher {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_options(PatchOptions {
            excess_tokens: ExcessTokens::Ignore,
        })
    }

    #[must_use]
    pub const fn with_options(options: PatchOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> PatchOptions {
        self.options
    }

    /// Apply every entry of `patch` to `target`.
    pub fn patch_it(&self, target: &mut dyn Patchable, patch: &PatchSet) -> Result<(), PatchError> {
        for (path, value) in patch {
            match self.apply_entry(&mut *target, path, value) {
                Ok(depth) => sink::record(PatchEvent::EntryApplied { depth }),
                Err(err) => {
                    sink::record(PatchEvent::EntryRejected {
                        reason: err.kind().into(),
                    });

                    return Err(err);
                }
            }
        }

        Ok(())
    }

    /// Resolve `path` to a writable field of `target`.
    pub fn locate<'a>(
        &self,
        target: &'a mut dyn Patchable,
        path: &Path,
    ) -> Result<Located<'a>, PatchError> {
        let tokens = path.tokenize();
        let located =
            locate(target, &tokens).ok_or_else(|| PatchError::path_not_resolved(path.clone()))?;

        if located.unconsumed() > 0 && self.options.excess_tokens == ExcessTokens::Reject {
            return Err(PatchError::path_not_resolved(path.clone()));
        }

        if !located.handle().is_writable() {
            return Err(PatchError::new(
                path.clone(),
                PatchErrorKind::FieldNotWritable {
                    field: located.field().to_string(),
                },
            ));
        }

        Ok(located)
    }

    // Returns the number of record levels walked.
    fn apply_entry(
        &self,
        target: &mut dyn Patchable,
        path: &Path,
        value: &PatchValue,
    ) -> Result<usize, PatchError> {
        let mut located = self.locate(target, path)?;
        let field = located.field();
        let depth = located.depth();

        coerce(located.handle_mut(), value).map_err(|err| {
            PatchError::new(path.clone(), PatchErrorKind::from_coerce(field, err))
        })?;

        Ok(depth)
    }
}

///
/// TESTS
///
