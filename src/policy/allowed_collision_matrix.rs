use super::AllowedCollision;
use crate::body::BodyId;
use crate::query::{CanonicalPairKey, Contact};
use hashbrown::HashMap;

static NEVER: AllowedCollision = AllowedCollision::Never;

/// The symmetric table of allowed-collision policies between pairs of bodies.
///
/// Only one direction of each pair is stored (the [`CanonicalPairKey`]), so a lookup with
/// `(a, b)` always returns the same entry as a lookup with `(b, a)`.
///
/// The matrix is only modified between collision queries; during a query it is shared read-only.
///
/// # Example
///
/// ```
/// use pairgate3d::body::BodyId;
/// use pairgate3d::policy::AllowedCollisionMatrix;
///
/// let mut acm = AllowedCollisionMatrix::new();
/// acm.set_entry("upper_arm", "forearm", true);
/// acm.set_conditional("forearm", "table", |contact| contact.depth < 0.01);
///
/// let forearm = BodyId::from("forearm");
/// assert!(acm.lookup(&forearm, &"upper_arm".into()).is_always());
/// assert!(acm.lookup(&"table".into(), &forearm).decider().is_some());
/// assert!(acm.lookup(&forearm, &"base".into()).is_never());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AllowedCollisionMatrix {
    entries: HashMap<CanonicalPairKey, AllowedCollision>,
}

impl AllowedCollisionMatrix {
    /// An empty matrix: every pair of bodies is subject to normal collision checking.
    pub fn new() -> Self {
        Self::default()
    }

    /// The policy between `id1` and `id2`.
    ///
    /// Returns [`AllowedCollision::Never`] if the pair has no entry.
    #[inline]
    pub fn lookup(&self, id1: &BodyId, id2: &BodyId) -> &AllowedCollision {
        self.get_entry(id1, id2).unwrap_or(&NEVER)
    }

    /// The explicit entry between `id1` and `id2`, if there is one.
    #[inline]
    pub fn get_entry(&self, id1: &BodyId, id2: &BodyId) -> Option<&AllowedCollision> {
        if self.entries.is_empty() {
            return None;
        }

        self.entries.get(&CanonicalPairKey::from_refs(id1, id2))
    }

    /// Returns `true` if the pair has an explicit entry.
    pub fn has_entry(&self, id1: &BodyId, id2: &BodyId) -> bool {
        self.get_entry(id1, id2).is_some()
    }

    /// Sets the entry between two bodies to [`AllowedCollision::Always`] if `allowed` is `true`,
    /// and to [`AllowedCollision::Never`] otherwise.
    pub fn set_entry(&mut self, id1: impl Into<BodyId>, id2: impl Into<BodyId>, allowed: bool) {
        self.set_policy(id1, id2, allowed.into());
    }

    /// Sets the entry between two bodies to a conditional policy using `decider`.
    pub fn set_conditional(
        &mut self,
        id1: impl Into<BodyId>,
        id2: impl Into<BodyId>,
        decider: impl Fn(&Contact) -> bool + Send + Sync + 'static,
    ) {
        self.set_policy(id1, id2, AllowedCollision::conditional(decider));
    }

    /// Sets the entry between two bodies.
    pub fn set_policy(
        &mut self,
        id1: impl Into<BodyId>,
        id2: impl Into<BodyId>,
        policy: AllowedCollision,
    ) {
        let key = CanonicalPairKey::new(id1.into(), id2.into());
        let _ = self.entries.insert(key, policy);
    }

    /// Sets the entries between `id` and each of `others` at once.
    pub fn set_entries(
        &mut self,
        id: impl Into<BodyId>,
        others: impl IntoIterator<Item = BodyId>,
        allowed: bool,
    ) {
        let id = id.into();
        for other in others {
            self.set_entry(id.clone(), other, allowed);
        }
    }

    /// Removes the entry between two bodies, reverting it to normal collision checking.
    pub fn remove_entry(&mut self, id1: &BodyId, id2: &BodyId) -> Option<AllowedCollision> {
        self.entries.remove(&CanonicalPairKey::from_refs(id1, id2))
    }

    /// Removes every entry involving `id`.
    pub fn remove_entries_of(&mut self, id: &BodyId) {
        self.entries.retain(|key, _| !key.contains(id));
    }

    /// The number of explicit entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this matrix has no explicit entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear()
    }

    /// Iterates through all the explicit entries.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalPairKey, &AllowedCollision)> {
        self.entries.iter()
    }
}
