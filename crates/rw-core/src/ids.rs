//! Stable agent identifiers.

use std::fmt;

/// Identifier of an agent, assigned once at construction and never changed.
///
/// Identifiers are plain integers so result tables stay compact and sortable.
/// The model hands out consecutive ids when it populates itself; agents built
/// by hand may use any value (uniqueness is not enforced).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The id following `self`.
    #[inline]
    pub fn next(self) -> AgentId {
        AgentId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
