//! Exact contact computation between pairs of collision objects.

pub use self::narrow_phase::{ContactRequest, NarrowPhase};
pub use self::parry_narrow_phase::ParryNarrowPhase;

mod narrow_phase;
mod parry_narrow_phase;
