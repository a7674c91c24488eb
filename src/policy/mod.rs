//! Allowed-collision policies between pairs of bodies.

pub use self::allowed_collision::{AllowedCollision, DecideContactFn};
pub use self::allowed_collision_matrix::AllowedCollisionMatrix;

mod allowed_collision;
mod allowed_collision_matrix;
