use crate::body::BodyId;

/// An unordered pair of bodies, stored sorted in increasing order.
///
/// This is the key under which the contacts of a pair of bodies are accumulated, so that they are
/// always stored together no matter in which order the broad-phase reports the two objects.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CanonicalPairKey([BodyId; 2]);

impl CanonicalPairKey {
    /// Sorts two body ids in increasing order into a new key.
    #[inline]
    pub fn new(id1: BodyId, id2: BodyId) -> Self {
        if id1 > id2 {
            CanonicalPairKey([id2, id1])
        } else {
            CanonicalPairKey([id1, id2])
        }
    }

    /// Builds the key of a pair of bodies given by reference.
    #[inline]
    pub fn from_refs(id1: &BodyId, id2: &BodyId) -> Self {
        Self::new(id1.clone(), id2.clone())
    }

    /// The smallest id of the pair.
    #[inline]
    pub fn first(&self) -> &BodyId {
        &self.0[0]
    }

    /// The largest id of the pair.
    #[inline]
    pub fn second(&self) -> &BodyId {
        &self.0[1]
    }

    /// Returns `true` if `id` is one of the two bodies of this pair.
    pub fn contains(&self, id: &BodyId) -> bool {
        self.0[0] == *id || self.0[1] == *id
    }
}
