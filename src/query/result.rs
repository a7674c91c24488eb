use super::{CanonicalPairKey, Contact};
use crate::utils::hashmap::HashMap;
use alloc::vec::Vec;

/// The outcome of a discrete collision query.
///
/// This also acts as the contact accumulator of the query: contacts are stored per
/// [`CanonicalPairKey`], in the order they were recorded, and a global contact count is maintained.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionResult {
    /// Whether a collision was found.
    pub collision: bool,
    /// The total number of contacts stored in [`Self::contacts`].
    pub contact_count: usize,
    /// The contacts, grouped by pair of bodies.
    pub contacts: HashMap<CanonicalPairKey, Vec<Contact>>,
}

impl CollisionResult {
    /// An empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets this result so it can be filled by another query.
    pub fn clear(&mut self) {
        self.collision = false;
        self.contact_count = 0;
        self.contacts.clear();
    }

    /// The number of contacts already stored for the given pair.
    #[inline]
    pub fn stored_count(&self, key: &CanonicalPairKey) -> usize {
        self.contacts.get(key).map(|c| c.len()).unwrap_or(0)
    }

    /// The number of contacts that may still be stored for the given pair.
    ///
    /// This is zero if the global contact budget `max_contacts` is exhausted. Otherwise, this is
    /// the remainder of the per-pair budget `max_contacts_per_pair`, limited to the remainder of
    /// the global budget.
    #[inline]
    pub fn remaining_budget(
        &self,
        key: &CanonicalPairKey,
        max_contacts_per_pair: usize,
        max_contacts: usize,
    ) -> usize {
        if self.contact_count >= max_contacts {
            return 0;
        }

        max_contacts_per_pair
            .saturating_sub(self.stored_count(key))
            .min(max_contacts - self.contact_count)
    }

    /// Stores a contact for the given pair.
    ///
    /// The caller is responsible for never recording more contacts than the remaining budget.
    #[inline]
    pub fn record(&mut self, key: &CanonicalPairKey, contact: Contact) {
        self.contacts.entry(key.clone()).or_default().push(contact);
        self.contact_count += 1;
    }

    /// The contacts stored for the given pair.
    pub fn pair_contacts(&self, key: &CanonicalPairKey) -> &[Contact] {
        self.contacts.get(key).map(|c| &c[..]).unwrap_or(&[])
    }

    /// Iterates through all the stored contacts.
    pub fn iter_contacts(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values().flatten()
    }
}
