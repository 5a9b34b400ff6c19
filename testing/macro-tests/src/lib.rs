//! End-to-end tests for `#[derive(Patchable)]` and the patcher, run against
//! record shapes an application would actually declare.
