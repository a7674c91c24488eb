use crate::query::Contact;
use alloc::sync::Arc;
use core::fmt;

/// A predicate deciding, for a single contact, whether it is acceptable.
///
/// Returns `true` if the contact is allowed, and `false` if it must be reported as a collision.
pub type DecideContactFn = Arc<dyn Fn(&Contact) -> bool + Send + Sync>;

/// The allowed-collision policy between a pair of bodies.
#[derive(Clone, Default)]
pub enum AllowedCollision {
    /// Collisions between the two bodies are always allowed: they are never reported and no
    /// contacts are computed.
    Always,
    /// Collisions between the two bodies are never allowed. This is the policy of any pair
    /// without an explicit entry.
    #[default]
    Never,
    /// Each contact between the two bodies is checked by the decider: it counts as a collision
    /// only if the decider rejects it.
    Conditional(DecideContactFn),
}

impl AllowedCollision {
    /// Builds a conditional policy from the given decider.
    pub fn conditional(decider: impl Fn(&Contact) -> bool + Send + Sync + 'static) -> Self {
        AllowedCollision::Conditional(Arc::new(decider))
    }

    /// Returns `true` if this is [`AllowedCollision::Always`].
    #[inline]
    pub fn is_always(&self) -> bool {
        matches!(self, AllowedCollision::Always)
    }

    /// Returns `true` if this is [`AllowedCollision::Never`].
    #[inline]
    pub fn is_never(&self) -> bool {
        matches!(self, AllowedCollision::Never)
    }

    /// The decider of a conditional policy.
    #[inline]
    pub fn decider(&self) -> Option<&DecideContactFn> {
        match self {
            AllowedCollision::Conditional(decider) => Some(decider),
            _ => None,
        }
    }
}

impl From<bool> for AllowedCollision {
    fn from(allowed: bool) -> Self {
        if allowed {
            AllowedCollision::Always
        } else {
            AllowedCollision::Never
        }
    }
}

impl fmt::Debug for AllowedCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedCollision::Always => f.write_str("Always"),
            AllowedCollision::Never => f.write_str("Never"),
            AllowedCollision::Conditional(_) => f.write_str("Conditional(..)"),
        }
    }
}
