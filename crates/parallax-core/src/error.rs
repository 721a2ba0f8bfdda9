use thiserror::Error;

/// Failures of the frame loop's host plumbing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// A second loop was started while one is still active.
    #[error("frame loop #{generation} is already running")]
    AlreadyRunning { generation: u64 },
    /// The host did not hand out a frame opportunity.
    #[error("host refused to schedule a frame")]
    RequestRejected,
}

/// Failures reported by a presentation sink while applying a projected layer.
///
/// These are never fatal: the engine skips the layer for the current tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentError {
    #[error("layer {0} has no attached element")]
    MissingLayer(usize),
    #[error("failed to style layer {index}: {reason}")]
    Style { index: usize, reason: String },
}
