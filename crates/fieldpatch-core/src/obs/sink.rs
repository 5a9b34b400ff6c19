//! Patch event sink boundary.
//!
//! Patcher logic MUST NOT touch the report state directly.
//! All instrumentation flows through PatchEvent and PatchSink.

use crate::{error::PatchErrorKind, obs::report};
use serde::Serialize;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn PatchSink>>> = const { RefCell::new(None) };
}

///
/// RejectReason
///
/// Payload-free tag of a patch failure, safe to count and export.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    PathNotResolved,
    FieldNotWritable,
    TypeMismatch,
    NumericConversion,
    ValueNotAccepted,
}

impl RejectReason {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PathNotResolved => "path_not_resolved",
            Self::FieldNotWritable => "field_not_writable",
            Self::TypeMismatch => "type_mismatch",
            Self::NumericConversion => "numeric_conversion",
            Self::ValueNotAccepted => "value_not_accepted",
        }
    }
}

impl From<&PatchErrorKind> for RejectReason {
    fn from(kind: &PatchErrorKind) -> Self {
        match kind {
            PatchErrorKind::PathNotResolved => Self::PathNotResolved,
            PatchErrorKind::FieldNotWritable { .. } => Self::FieldNotWritable,
            PatchErrorKind::TypeMismatch { .. } => Self::TypeMismatch,
            PatchErrorKind::NumericConversion { .. } => Self::NumericConversion,
            PatchErrorKind::ValueNotAccepted { .. } => Self::ValueNotAccepted,
        }
    }
}

///
/// PatchEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PatchEvent {
    EntryApplied { depth: usize },
    EntryRejected { reason: RejectReason },
}

///
/// PatchSink
///

pub trait PatchSink {
    fn record(&self, event: PatchEvent);
}

/// GlobalPatchSink
/// Default per-thread sink: counts into the report and emits `tracing`
/// events. Used whenever no scoped override is installed.

struct GlobalPatchSink;

impl PatchSink for GlobalPatchSink {
    fn record(&self, event: PatchEvent) {
        match event {
            PatchEvent::EntryApplied { depth } => {
                report::with_state_mut(|r| r.add_applied(depth as u64));
                tracing::trace!(depth, "patch entry applied");
            }
            PatchEvent::EntryRejected { reason } => {
                report::with_state_mut(|r| r.add_rejected(reason));
                tracing::debug!(reason = reason.label(), "patch entry rejected");
            }
        }
    }
}

/// Route one event to the scoped override, or to the default sink.
pub(crate) fn record(event: PatchEvent) {
    // clone out so a sink may itself install an override
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GlobalPatchSink.record(event),
    }
}

/// Snapshot the current thread's patch counters.
#[must_use]
pub fn patch_report() -> report::PatchReport {
    report::snapshot()
}

/// Reset the current thread's patch counters.
pub fn patch_reset_all() {
    report::reset();
}

/// Run a closure with `sink` receiving every patch event on this thread.
pub fn with_patch_sink<T>(sink: Rc<dyn PatchSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn PatchSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
