//! Error types for complex-context segmentation.

use thiserror::Error;

/// Failure reported by a [`ComplexContextDelegate`] when it cannot segment
/// a run. The scanner logs these and falls back to treating the run as
/// internally unbreakable; they never reach scan callers.
///
/// [`ComplexContextDelegate`]: crate::delegate::ComplexContextDelegate
#[derive(Debug, Error)]
pub enum SegmentationError {
    /// The delegate's dictionary or model is not available for the run's
    /// script.
    #[error("segmentation dictionary unavailable")]
    DictionaryUnavailable,

    /// The delegate failed while segmenting.
    #[error("segmentation failed: {0}")]
    SegmentationFailed(String),
}
