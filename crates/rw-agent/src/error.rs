use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AgentError {
    /// A target-dependent query or move was attempted with no target set.
    #[error("agent has no target; cannot compute target azimuth, distance or move")]
    NoTarget,

    /// A mutation would break an agent invariant (non-finite target,
    /// negative velocity, probability outside `[0, 1]`, …).
    #[error("invariant violation: {0}")]
    Invariant(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
