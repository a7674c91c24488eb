/// The parameters of a discrete collision query.
///
/// The request is read-only for the whole duration of a query and can be shared by several
/// queries running concurrently.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionRequest {
    /// Whether contact points should be computed and stored.
    ///
    /// If this is `false` the query stops at the first collision found.
    pub contacts: bool,
    /// The maximum number of contacts stored over the whole query.
    pub max_contacts: usize,
    /// The maximum number of contacts stored for any single pair of bodies.
    pub max_contacts_per_pair: usize,
    /// Whether every collision decision should be logged at the `info` level.
    pub verbose: bool,
}

impl Default for CollisionRequest {
    fn default() -> Self {
        Self {
            contacts: false,
            max_contacts: 1,
            max_contacts_per_pair: 1,
            verbose: false,
        }
    }
}

impl CollisionRequest {
    /// A request that only checks whether there is any collision.
    pub fn boolean() -> Self {
        Self::default()
    }

    /// A request storing up to `max_contacts` contacts, and up to `max_contacts_per_pair` for each
    /// pair of bodies.
    pub fn with_contacts(max_contacts: usize, max_contacts_per_pair: usize) -> Self {
        Self {
            contacts: true,
            max_contacts,
            max_contacts_per_pair,
            verbose: false,
        }
    }

    /// Enables or disables verbose logging of collision decisions.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
