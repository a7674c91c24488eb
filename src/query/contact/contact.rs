use crate::body::{BodyData, BodyId, BodyKind};
use crate::math::{Point, Real, Vector};
use core::mem;

/// Geometric description of a contact between two bodies.
///
/// All quantities are expressed in world-space.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    /// The contact point.
    pub pos: Point<Real>,

    /// The contact normal, pointing from the first body toward the second body.
    pub normal: Vector<Real>,

    /// The penetration depth. Always positive or zero.
    pub depth: Real,

    /// The id of the first body involved in this contact.
    pub body_name_1: BodyId,

    /// The kind of the first body involved in this contact.
    pub body_type_1: BodyKind,

    /// The id of the second body involved in this contact.
    pub body_name_2: BodyId,

    /// The kind of the second body involved in this contact.
    pub body_type_2: BodyKind,
}

impl Contact {
    /// Creates a new contact between `body1` and `body2`.
    ///
    /// A negative `depth` is clamped to zero.
    #[inline]
    pub fn new(
        pos: Point<Real>,
        normal: Vector<Real>,
        depth: Real,
        body1: &BodyData,
        body2: &BodyData,
    ) -> Self {
        Contact {
            pos,
            normal,
            depth: depth.max(0.0),
            body_name_1: body1.id.clone(),
            body_type_1: body1.kind,
            body_name_2: body2.id.clone(),
            body_type_2: body2.kind,
        }
    }

    /// Swaps the bodies of this contact, and reverses its normal.
    #[inline]
    pub fn flip(&mut self) {
        mem::swap(&mut self.body_name_1, &mut self.body_name_2);
        mem::swap(&mut self.body_type_1, &mut self.body_type_2);
        self.normal = -self.normal;
    }

    /// Returns a new contact with swapped bodies and a reversed normal.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}
