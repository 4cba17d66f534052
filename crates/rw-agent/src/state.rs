//! The three-state walker state machine.

use std::fmt;

/// Coarse activity state of an agent.
///
/// Every agent starts `Halted`.  A move sets `Moving`; a policy that elects
/// to stand still for a tick sets `Waiting`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentState {
    #[default]
    Halted,
    Moving,
    Waiting,
}

impl AgentState {
    /// Label used in result tables.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Halted  => "HALTED",
            AgentState::Moving  => "MOVING",
            AgentState::Waiting => "WAITING",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
