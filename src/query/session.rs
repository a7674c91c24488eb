use super::{CollisionRequest, CollisionResult, Contact, NarrowPhase};
use crate::body::BodyRegistry;
use crate::policy::AllowedCollisionMatrix;
use alloc::vec::Vec;

/// The state threaded through every pair decision of one collision query.
///
/// A session is created at the start of a query and dropped at its end; it is never reused across
/// queries. The request, policy matrix, body registry and narrow-phase are only read, so they can
/// be shared by concurrent queries, each with its own session and [`CollisionResult`].
pub struct CollisionSession<'a> {
    pub(crate) request: &'a CollisionRequest,
    pub(crate) result: &'a mut CollisionResult,
    pub(crate) acm: Option<&'a AllowedCollisionMatrix>,
    pub(crate) bodies: Option<&'a BodyRegistry>,
    pub(crate) narrow_phase: &'a dyn NarrowPhase,
    pub(crate) done: bool,
    // Scratch buffer for the narrow-phase contacts of the pair being decided.
    pub(crate) workspace: Vec<Contact>,
}

impl<'a> CollisionSession<'a> {
    /// Starts a query filling `result`, with contacts computed by `narrow_phase`.
    ///
    /// Without an allowed-collision matrix or body registry, every pair is checked.
    pub fn new(
        request: &'a CollisionRequest,
        result: &'a mut CollisionResult,
        narrow_phase: &'a dyn NarrowPhase,
    ) -> Self {
        Self {
            request,
            result,
            acm: None,
            bodies: None,
            narrow_phase,
            done: false,
            workspace: Vec::new(),
        }
    }

    /// Filters the pairs of this query with the given allowed-collision matrix.
    pub fn with_allowed_collisions(mut self, acm: &'a AllowedCollisionMatrix) -> Self {
        self.acm = Some(acm);
        self
    }

    /// Applies the touch-link exceptions of the attached bodies registered in `bodies`.
    pub fn with_bodies(mut self, bodies: &'a BodyRegistry) -> Self {
        self.bodies = Some(bodies);
        self
    }

    /// The parameters of this query.
    #[inline]
    pub fn request(&self) -> &CollisionRequest {
        self.request
    }

    /// The result accumulated so far.
    #[inline]
    pub fn result(&self) -> &CollisionResult {
        self.result
    }

    /// Whether this query is satisfied, i.e., whether the broad-phase must stop enumerating pairs.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }
}
