//! Observability: per-thread patch counters and the sink boundary.
//!
//! The patcher never logs failures; it returns them. It only reports
//! events through `sink::record`, and the default sink turns those into
//! counters plus `tracing` events.

pub(crate) mod report;
pub(crate) mod sink;

// re-exports
pub use report::PatchReport;
pub use sink::{PatchEvent, PatchSink, RejectReason, patch_report, patch_reset_all, with_patch_sink};
