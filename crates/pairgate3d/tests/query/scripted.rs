use pairgate3d::body::BodyData;
use pairgate3d::geometry::{build_geometry, ShapeDescription};
use pairgate3d::math::{Isometry, Point, Real, Vector};
use pairgate3d::object::CollisionObject;
use pairgate3d::query::{Contact, ContactRequest, NarrowPhase};
use std::cell::{Cell, RefCell};

/// A narrow-phase reporting one contact per scripted depth, whatever the objects are.
pub struct ScriptedNarrowPhase {
    depths: RefCell<Vec<Real>>,
    calls: Cell<usize>,
    last_request: Cell<Option<ContactRequest>>,
}

impl ScriptedNarrowPhase {
    pub fn new(depths: &[Real]) -> Self {
        Self {
            depths: RefCell::new(depths.to_vec()),
            calls: Cell::new(0),
            last_request: Cell::new(None),
        }
    }

    pub fn set_depths(&self, depths: &[Real]) {
        *self.depths.borrow_mut() = depths.to_vec();
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_request(&self) -> Option<ContactRequest> {
        self.last_request.get()
    }
}

impl NarrowPhase for ScriptedNarrowPhase {
    fn collide(
        &self,
        object1: &CollisionObject,
        object2: &CollisionObject,
        request: &ContactRequest,
        out: &mut Vec<Contact>,
    ) -> usize {
        self.calls.set(self.calls.get() + 1);
        self.last_request.set(Some(*request));

        let depths = self.depths.borrow();

        if !request.enable_contact {
            return depths.len().min(1);
        }

        let cap = if request.exhaustive {
            depths.len()
        } else {
            request.max_contacts
        };

        for depth in depths.iter().take(cap) {
            out.push(Contact::new(
                Point::origin(),
                Vector::z(),
                *depth,
                object1.body(),
                object2.body(),
            ));
        }

        depths.len().min(cap)
    }
}

pub fn object(body: BodyData) -> CollisionObject {
    let geometry = build_geometry(&ShapeDescription::Sphere { radius: 0.1 }, 1.0, 0.0).unwrap();
    CollisionObject::new(body, geometry, Isometry::identity())
}
