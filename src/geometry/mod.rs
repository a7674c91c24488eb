//! Construction of collision geometry from shape descriptions, and pose conversion.

pub use self::collision_geometry::{build_geometry, build_unscaled_geometry, CollisionGeometry};
pub use self::geometry_error::GeometryError;
pub use self::shape_description::{ShapeDescription, ShapeKind};
pub use self::transform::{from_engine_transform, to_engine_transform};

mod collision_geometry;
mod geometry_error;
mod shape_description;
mod transform;
