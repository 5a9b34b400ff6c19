use crate::obs::sink::RejectReason;
use serde::Serialize;
use std::cell::RefCell;

thread_local! {
    static REPORT: RefCell<PatchReport> = RefCell::new(PatchReport::default());
}

///
/// PatchReport
///
/// Counters accumulated by the default sink on the current thread.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PatchReport {
    pub entries_applied: u64,
    pub entries_rejected: u64,
    pub path_not_resolved: u64,
    pub field_not_writable: u64,
    pub type_mismatch: u64,
    pub numeric_conversion: u64,
    pub value_not_accepted: u64,

    /// Deepest record nesting an applied entry walked through.
    pub max_depth: u64,
}

impl PatchReport {
    pub(crate) fn add_applied(&mut self, depth: u64) {
        self.entries_applied = self.entries_applied.saturating_add(1);
        self.max_depth = self.max_depth.max(depth);
    }

    pub(crate) fn add_rejected(&mut self, reason: RejectReason) {
        self.entries_rejected = self.entries_rejected.saturating_add(1);

        let counter = match reason {
            RejectReason::PathNotResolved => &mut self.path_not_resolved,
            RejectReason::FieldNotWritable => &mut self.field_not_writable,
            RejectReason::TypeMismatch => &mut self.type_mismatch,
            RejectReason::NumericConversion => &mut self.numeric_conversion,
            RejectReason::ValueNotAccepted => &mut self.value_not_accepted,
        };
        *counter = counter.saturating_add(1);
    }
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut PatchReport) -> R) -> R {
    REPORT.with(|report| f(&mut report.borrow_mut()))
}

pub(crate) fn snapshot() -> PatchReport {
    REPORT.with(|report| report.borrow().clone())
}

pub(crate) fn reset() {
    with_state_mut(|report| *report = PatchReport::default());
}
