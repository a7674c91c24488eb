use super::{ContactRequest, NarrowPhase};
use crate::math::{Isometry, Real};
use crate::na;
use crate::object::CollisionObject;
use crate::query::Contact;
use alloc::vec::Vec;
use parry::query::{ContactManifold, DefaultQueryDispatcher, PersistentQueryDispatcher, Unsupported};

/// A narrow-phase computing contacts with a parry query dispatcher.
///
/// Full contact manifolds are computed whenever contact points are requested (falling back to a
/// single deepest contact for shape pairs without manifold support), and a plain intersection test
/// is used otherwise. Shape pairs the dispatcher does not support are reported as non-colliding.
#[derive(Clone, Debug)]
pub struct ParryNarrowPhase<D = DefaultQueryDispatcher> {
    dispatcher: D,
}

impl<D> ParryNarrowPhase<D> {
    /// A narrow-phase relying on the given dispatcher.
    pub fn with_dispatcher(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    /// The query dispatcher used by this narrow-phase.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }
}

impl ParryNarrowPhase {
    /// A narrow-phase relying on parry's default query dispatcher.
    pub fn new() -> Self {
        Self {
            dispatcher: DefaultQueryDispatcher,
        }
    }
}

impl Default for ParryNarrowPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: PersistentQueryDispatcher<(), ()>> ParryNarrowPhase<D> {
    fn push_contacts(
        &self,
        object1: &CollisionObject,
        object2: &CollisionObject,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
        max_contacts: usize,
        out: &mut Vec<Contact>,
    ) -> usize {
        let pos12 = pos1.inv_mul(pos2);
        let mut manifolds: Vec<ContactManifold<(), ()>> = Vec::new();
        let mut workspace = None;

        match self.dispatcher.contact_manifolds(
            &pos12,
            object1.shape(),
            object2.shape(),
            0.0,
            &mut manifolds,
            &mut workspace,
        ) {
            Ok(()) => {
                let mut found = 0;

                for manifold in &manifolds {
                    let frame1 = manifold.subshape_pos1.map(|p| pos1 * p).unwrap_or(*pos1);
                    let frame2 = manifold.subshape_pos2.map(|p| pos2 * p).unwrap_or(*pos2);
                    let normal = frame1 * manifold.local_n1;

                    for pt in manifold.points.iter().filter(|pt| pt.dist <= 0.0) {
                        if found == max_contacts {
                            return found;
                        }

                        let p1 = frame1 * pt.local_p1;
                        let p2 = frame2 * pt.local_p2;
                        out.push(Contact::new(
                            na::center(&p1, &p2),
                            normal,
                            -pt.dist,
                            object1.body(),
                            object2.body(),
                        ));
                        found += 1;
                    }
                }

                found
            }
            Err(Unsupported) => {
                match self
                    .dispatcher
                    .contact(&pos12, object1.shape(), object2.shape(), 0.0)
                {
                    Ok(Some(c)) if c.dist <= 0.0 => {
                        let p1 = pos1 * c.point1;
                        let p2 = pos2 * c.point2;
                        out.push(Contact::new(
                            na::center(&p1, &p2),
                            pos1 * c.normal1.into_inner(),
                            -c.dist,
                            object1.body(),
                            object2.body(),
                        ));
                        1
                    }
                    Ok(_) => 0,
                    Err(Unsupported) => {
                        log_unsupported(object1, object2);
                        0
                    }
                }
            }
        }
    }
}

impl<D: PersistentQueryDispatcher<(), ()>> NarrowPhase for ParryNarrowPhase<D> {
    fn collide(
        &self,
        object1: &CollisionObject,
        object2: &CollisionObject,
        request: &ContactRequest,
        out: &mut Vec<Contact>,
    ) -> usize {
        let pos1 = object1.engine_pose();
        let pos2 = object2.engine_pose();

        if !request.enable_contact {
            let pos12 = pos1.inv_mul(&pos2);
            return match self
                .dispatcher
                .intersection_test(&pos12, object1.shape(), object2.shape())
            {
                Ok(hit) => hit as usize,
                Err(Unsupported) => {
                    log_unsupported(object1, object2);
                    0
                }
            };
        }

        let max_contacts = if request.exhaustive {
            usize::MAX
        } else {
            request.max_contacts
        };

        if max_contacts == 0 {
            return 0;
        }

        self.push_contacts(object1, object2, &pos1, &pos2, max_contacts, out)
    }
}

fn log_unsupported(object1: &CollisionObject, object2: &CollisionObject) {
    log::warn!(
        "Contact computation between '{}' ({:?}) and '{}' ({:?}) is not supported. The pair is considered collision-free.",
        object1.id(),
        object1.geometry().kind(),
        object2.id(),
        object2.geometry().kind()
    );
}
