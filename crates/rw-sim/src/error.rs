use rw_agent::AgentError;
use rw_core::CoreError;
use rw_policy::PolicyError;
use thiserror::Error;

use crate::RunState;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("model configuration error: {0}")]
    Config(String),

    #[error("run not completed (run state is {0})")]
    RunNotCompleted(RunState),

    #[error("model has already been run (run state is {0})")]
    AlreadyRun(RunState),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("policy construction failed: {0}")]
    Policy(#[from] PolicyError),
}

pub type SimResult<T> = Result<T, SimError>;
