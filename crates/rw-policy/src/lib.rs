//! `rw-policy` — random-walk policies for the `rust_rw` framework.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                           |
//! |--------------|--------------------------------------------------------------------|
//! | [`walker`]   | `WalkPolicy` trait, `Walker<P>` agent, the shared pursue rule      |
//! | [`uniform`]  | `UniformWalk`, `WaitingUniformWalk`                                |
//! | [`levy`]     | `LevyWalk`, `BoundedLevyWalk`, `BoundedWaitingLevyWalk`            |
//! | [`homesick`] | `HomesickLevyWalk`, `RapidHomesickLevyWalk`                        |
//! | [`velocity`] | `VariableVelocityWalk`                                             |
//! | [`energy`]   | `EnergyBudgetWalk`                                                 |
//! | [`spec`]     | `PolicySpec` — serde-configurable policy + parameters              |
//! | [`error`]    | `PolicyError`, `PolicyResult<T>`                                   |
//!
//! # State machine
//!
//! Every walker starts `Halted` with no target.  Its first update retargets
//! without moving.  From then on each tick either retargets, moves one
//! velocity step toward the target (state `Moving`), or waits in place
//! (state `Waiting`), as decided by the policy.
//!
//! Policies are strategy objects: a [`Walker<P>`] owns a
//! [`Mover`][rw_agent::Mover] body and a policy value `P`, and forwards
//! `Agent::update` to `P::update`.

pub mod energy;
pub mod error;
pub mod homesick;
pub mod levy;
pub mod spec;
pub mod uniform;
pub mod velocity;
pub mod walker;


pub use energy::EnergyBudgetWalk;
pub use error::{PolicyError, PolicyResult};
pub use homesick::{HomesickLevyWalk, RapidHomesickLevyWalk};
pub use levy::{BoundedLevyWalk, BoundedWaitingLevyWalk, LevyWalk};
pub use spec::PolicySpec;
pub use uniform::{UniformWalk, WaitingUniformWalk};
pub use velocity::VariableVelocityWalk;
pub use walker::{Leg, WalkPolicy, Walker, leg, pursue};

// ── Named walkers ─────────────────────────────────────────────────────────────

pub type BaseWalker = Walker<UniformWalk>;
pub type WaitingUniformWalker = Walker<WaitingUniformWalk>;
pub type UniformLevyRandomWalker = Walker<LevyWalk>;
pub type BoundedUniformLevyRandomWalker = Walker<BoundedLevyWalk>;
pub type BoundedWaitingLevyWalker = Walker<BoundedWaitingLevyWalk>;
pub type HomesickLevyWalker = Walker<HomesickLevyWalk>;
pub type RapidHomesickLevyWalker = Walker<RapidHomesickLevyWalk>;
pub type VariableVelocityWalker = Walker<VariableVelocityWalk>;
pub type EnergyBudgetedWalker = Walker<EnergyBudgetWalk>;
