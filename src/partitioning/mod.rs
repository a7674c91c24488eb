//! Broad-phase spatial partitioning of collision objects.

pub use self::broad_phase::{BroadPhase, BroadPhaseCallback, ObjectHandle};
pub use self::sweep_and_prune::SweepAndPrune;

mod broad_phase;
mod sweep_and_prune;
