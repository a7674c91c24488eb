use crate::body::{BodyData, BodyId, BodyKind};
use crate::geometry::{to_engine_transform, CollisionGeometry};
use crate::math::{Isometry, Pose, Real};
use parry::bounding_volume::Aabb;
use parry::shape::Shape;

/// A piece of collision geometry placed in the world, owned by a body.
///
/// The world-space AABB is computed once at construction and whenever the pose changes.
#[derive(Clone, Debug)]
pub struct CollisionObject {
    body: BodyData,
    geometry: CollisionGeometry,
    pose: Isometry<Real>,
    aabb: Aabb,
}

impl CollisionObject {
    /// Places `geometry`, owned by `body`, at the world-space `pose`.
    pub fn new(body: BodyData, geometry: CollisionGeometry, pose: Isometry<Real>) -> Self {
        let aabb = geometry.compute_aabb(&pose);
        Self {
            body,
            geometry,
            pose,
            aabb,
        }
    }

    /// Places `geometry`, owned by `body`, at the host-side `pose`.
    pub fn from_pose(body: BodyData, geometry: CollisionGeometry, pose: &Pose<Real>) -> Self {
        Self::new(body, geometry, to_engine_transform(pose))
    }

    /// The identity of the body owning this object.
    #[inline]
    pub fn body(&self) -> &BodyData {
        &self.body
    }

    /// The id of the body owning this object.
    #[inline]
    pub fn id(&self) -> &BodyId {
        &self.body.id
    }

    /// The kind of the body owning this object.
    #[inline]
    pub fn kind(&self) -> BodyKind {
        self.body.kind
    }

    /// The collision geometry of this object.
    #[inline]
    pub fn geometry(&self) -> &CollisionGeometry {
        &self.geometry
    }

    /// The world-space pose of this object.
    #[inline]
    pub fn pose(&self) -> &Isometry<Real> {
        &self.pose
    }

    /// The world-space pose of the engine shape of this object.
    #[inline]
    pub fn engine_pose(&self) -> Isometry<Real> {
        self.geometry.engine_pose(&self.pose)
    }

    /// The engine shape of this object.
    #[inline]
    pub fn shape(&self) -> &dyn Shape {
        self.geometry.shape()
    }

    /// The world-space AABB of this object.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Moves this object to the world-space `pose`.
    pub fn set_pose(&mut self, pose: Isometry<Real>) {
        self.pose = pose;
        self.aabb = self.geometry.compute_aabb(&self.pose);
    }
}
