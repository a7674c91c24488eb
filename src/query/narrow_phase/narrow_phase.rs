use crate::object::CollisionObject;
use crate::query::Contact;
use alloc::vec::Vec;

/// What the narrow-phase is asked to compute for a pair of objects.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    /// The maximum number of contacts to return. Ignored if `exhaustive` is `true`.
    pub max_contacts: usize,
    /// Whether all the contacts between the two objects must be returned.
    pub exhaustive: bool,
    /// Whether contact points must be computed. If `false`, only the presence of a contact is
    /// reported.
    pub enable_contact: bool,
}

impl ContactRequest {
    /// Requests every contact between the two objects.
    pub fn exhaustive() -> Self {
        Self {
            max_contacts: usize::MAX,
            exhaustive: true,
            enable_contact: true,
        }
    }

    /// Requests at most `max_contacts` contacts.
    pub fn budgeted(max_contacts: usize) -> Self {
        Self {
            max_contacts,
            exhaustive: false,
            enable_contact: true,
        }
    }

    /// Requests only whether the two objects are in contact.
    pub fn boolean() -> Self {
        Self {
            max_contacts: 1,
            exhaustive: false,
            enable_contact: false,
        }
    }
}

/// Exact contact computation between two collision objects.
///
/// Implementations must be usable from several threads at once if queries run concurrently.
pub trait NarrowPhase {
    /// Computes the contacts between `object1` and `object2`.
    ///
    /// Returns the number of contacts found. If `request.enable_contact` is `true`, these contacts
    /// are appended to `out`, with `object1` as their first body; otherwise nothing is appended
    /// and the returned count is at most one. Unless `request.exhaustive` is `true`, at most
    /// `request.max_contacts` contacts are returned.
    fn collide(
        &self,
        object1: &CollisionObject,
        object2: &CollisionObject,
        request: &ContactRequest,
        out: &mut Vec<Contact>,
    ) -> usize;
}
