use rw_agent::AgentError;
use rw_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    #[error("policy distribution: {0}")]
    Core(#[from] CoreError),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
