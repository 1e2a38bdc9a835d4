//! Complex Context Delegation
//!
//! Scripts classified SA (Thai, Lao, Khmer, Myanmar, ...) have no
//! orthographic spaces; their break points come from dictionary or
//! statistical segmentation, which lives outside this crate. The scanner
//! hands maximal SA runs to an implementation of the trait below and
//! splices the returned offsets into its output.

use crate::error::SegmentationError;

/// External segmenter for complex-context (SA) script runs.
///
/// Implementations must be thread-safe; a scanner holding one stays
/// `Send + Sync`.
pub trait ComplexContextDelegate: Send + Sync {
    /// Segments one maximal SA run.
    ///
    /// `run` is the complete run, combining marks included. The return
    /// value lists run-relative offsets strictly inside the run
    /// (`1..run.len()`) where a break is permitted; order does not matter
    /// and out-of-range offsets are ignored. The run's outer edges are
    /// resolved by the caller, not the delegate.
    fn segment(&self, run: &[char]) -> Result<Vec<usize>, SegmentationError>;
}
