use alloc::string::String;
use alloc::sync::Arc;
use core::borrow::Borrow;
use core::fmt;

/// The unique name of a rigid body surface.
///
/// A body is anything that can own collision geometry: a robot link, an object attached to the
/// robot, a world object, an octree voxel, etc. Identifiers are totally ordered (lexicographically)
/// and this order is used to canonicalize body pairs.
///
/// Cloning a `BodyId` only increments a reference count, so ids can be copied freely into contacts
/// and pair keys from the hot query loop.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodyId(Arc<str>);

impl BodyId {
    /// Creates a new body identifier.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        BodyId(name.into())
    }

    /// The name of this body.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(name: &str) -> Self {
        BodyId(name.into())
    }
}

impl From<String> for BodyId {
    fn from(name: String) -> Self {
        BodyId(name.into())
    }
}

impl Borrow<str> for BodyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BodyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The kind of body a collision object belongs to.
///
/// Only the [`BodyKind::RobotLink`]/[`BodyKind::RobotAttached`] combination is treated specially:
/// it is subject to the touch-link exception.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BodyKind {
    /// A link of the robot model.
    RobotLink,
    /// An object rigidly attached to one of the robot links.
    RobotAttached,
    /// An object of the environment.
    WorldObject,
    /// Any other kind of body, e.g., octree voxels.
    #[default]
    Other,
}

/// The identity of the body owning a collision object.
///
/// This is the user-data every collision object carries so that contacts can be attributed back
/// to bodies, and so that the allowed-collision policy can be looked up.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodyData {
    /// The unique id of the body.
    pub id: BodyId,
    /// The kind of the body.
    pub kind: BodyKind,
}

impl BodyData {
    /// Creates the identity of a body.
    pub fn new(id: impl Into<BodyId>, kind: BodyKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// The identity of a robot link.
    pub fn robot_link(id: impl Into<BodyId>) -> Self {
        Self::new(id, BodyKind::RobotLink)
    }

    /// The identity of an object attached to the robot.
    pub fn robot_attached(id: impl Into<BodyId>) -> Self {
        Self::new(id, BodyKind::RobotAttached)
    }

    /// The identity of a world object.
    pub fn world_object(id: impl Into<BodyId>) -> Self {
        Self::new(id, BodyKind::WorldObject)
    }
}
