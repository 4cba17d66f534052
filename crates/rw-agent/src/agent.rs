//! The `Agent` trait driven by the model's tick loop.

use rw_core::{AgentId, AgentRng};

use crate::{AgentReport, AgentResult};

/// Anything the model can step and observe.
///
/// Once per tick the model calls [`update`][Self::update] followed by
/// [`report`][Self::report].  The RNG is the agent's own deterministic
/// stream, owned by the model.
///
/// Agents never see each other, so implementations must be `Send` (the
/// `parallel` feature of `rw-sim` updates them on a thread pool) but need not
/// be `Sync`.
pub trait Agent: Send {
    fn id(&self) -> AgentId;

    /// Advance the agent by one tick.
    fn update(&mut self, rng: &mut AgentRng) -> AgentResult<()>;

    /// The agent's current state as a report row (without the time column).
    fn report(&self) -> AgentReport;

    /// Short label for logs.
    fn kind(&self) -> &'static str {
        "agent"
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn id(&self) -> AgentId {
        (**self).id()
    }

    fn update(&mut self, rng: &mut AgentRng) -> AgentResult<()> {
        (**self).update(rng)
    }

    fn report(&self) -> AgentReport {
        (**self).report()
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}
