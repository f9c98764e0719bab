//! Diagnostic events, compiled in with the `tracing` feature.
//!
//! The crate never fails loudly: degenerate inputs produce empty sequences.
//! These events record where that happened.

#[cfg(feature = "tracing")]
pub(crate) fn step_rejected(reason: &'static str) {
    tracing::trace!(reason, "stepped range yields no values");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn step_rejected(_reason: &'static str) {}

#[cfg(feature = "tracing")]
pub(crate) fn repeat_pass(passes_left: usize) {
    tracing::trace!(passes_left, "starting repeat pass");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn repeat_pass(_passes_left: usize) {}
