//! One agent's report row for one tick.

use std::fmt;

use rw_core::AgentId;

use crate::AgentState;

/// A single cell value in a report row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Field {
    Float(f64),
    Flag(bool),
    Text(&'static str),
    Null,
}

impl Field {
    /// The numeric value, if this is a `Float`.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Field::Float(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(self) -> bool {
        matches!(self, Field::Null)
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Field::Float(v)
    }
}

impl From<Option<f64>> for Field {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Field::Null, Field::Float)
    }
}

impl From<bool> for Field {
    fn from(v: bool) -> Self {
        Field::Flag(v)
    }
}

impl From<AgentState> for Field {
    fn from(st: AgentState) -> Self {
        Field::Text(st.as_str())
    }
}

/// Renders the cell as it appears in CSV output; `Null` is the empty string.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Float(v) => write!(f, "{v}"),
            Field::Flag(b)  => write!(f, "{b}"),
            Field::Text(s)  => f.write_str(s),
            Field::Null     => Ok(()),
        }
    }
}

/// The state an agent reports at the end of its update.
///
/// The core fields are shared by every targeting agent; policies append their
/// own fields to `extras` (in a fixed order per policy, so all agents of one
/// policy produce the same field set).
#[derive(Clone, Debug, PartialEq)]
pub struct AgentReport {
    pub agent_id: AgentId,
    pub x:        f64,
    pub y:        f64,
    /// Target coordinates; `None` when untargeted.
    pub tx:       Option<f64>,
    pub ty:       Option<f64>,
    /// Target azimuth in `[0, 2π)` and distance; `None` when untargeted.
    pub ta:       Option<f64>,
    pub tr:       Option<f64>,
    /// Lifetime distance traveled.
    pub d:        f64,
    pub st:       AgentState,
    pub extras:   Vec<(&'static str, Field)>,
}

impl AgentReport {
    /// Names of the core fields, in column order.
    pub const CORE_FIELDS: [&'static str; 9] =
        ["agent_id", "x", "y", "tx", "ty", "ta", "tr", "d", "st"];

    /// Append a policy-specific field.
    pub fn push(&mut self, name: &'static str, value: impl Into<Field>) {
        self.extras.push((name, value.into()));
    }

    /// Look up a field by name, core fields first.
    pub fn get(&self, name: &str) -> Option<Field> {
        Some(match name {
            "agent_id" => Field::Float(self.agent_id.0 as f64),
            "x"        => Field::Float(self.x),
            "y"        => Field::Float(self.y),
            "tx"       => self.tx.into(),
            "ty"       => self.ty.into(),
            "ta"       => self.ta.into(),
            "tr"       => self.tr.into(),
            "d"        => Field::Float(self.d),
            "st"       => self.st.into(),
            other => {
                return self.extras.iter().find(|(k, _)| *k == other).map(|&(_, v)| v);
            }
        })
    }
}
