//! Collision objects registered to the broad-phase.

pub use self::collision_object::CollisionObject;
pub use self::object_group::ObjectGroup;

mod collision_object;
mod object_group;
