use super::{GeometryError, ShapeDescription, ShapeKind};
use crate::math::{Isometry, Real, Rotation, Translation, Vector};
use crate::na::Unit;
use core::fmt;
use parry::bounding_volume::Aabb;
use parry::shape::{Shape, SharedShape};

/// The collision geometry of a shape, ready to be handed to the narrow-phase.
///
/// This is a [`SharedShape`] together with the rigid offset mapping the shape frame of the
/// geometry engine to the frame of the [`ShapeDescription`] it was built from (for example
/// cylinders are along `y` for the engine, but along `z` for the description).
///
/// Cloning a `CollisionGeometry` does not duplicate the underlying shape.
#[derive(Clone)]
pub struct CollisionGeometry {
    shape: SharedShape,
    local_pose: Isometry<Real>,
    kind: ShapeKind,
}

impl CollisionGeometry {
    /// Wraps an engine shape whose frame matches the description frame.
    pub fn new(shape: SharedShape, kind: ShapeKind) -> Self {
        Self::with_local_pose(shape, Isometry::identity(), kind)
    }

    /// Wraps an engine shape placed at `local_pose` in the description frame.
    pub fn with_local_pose(shape: SharedShape, local_pose: Isometry<Real>, kind: ShapeKind) -> Self {
        Self {
            shape,
            local_pose,
            kind,
        }
    }

    /// The engine shape.
    #[inline]
    pub fn shape(&self) -> &dyn Shape {
        &*self.shape
    }

    /// The shared engine shape.
    #[inline]
    pub fn shared_shape(&self) -> &SharedShape {
        &self.shape
    }

    /// The pose of the engine shape relative to the description frame.
    #[inline]
    pub fn local_pose(&self) -> &Isometry<Real> {
        &self.local_pose
    }

    /// The kind of shape this geometry was built from.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The world-space pose of the engine shape, given the world-space pose of the description frame.
    #[inline]
    pub fn engine_pose(&self, pose: &Isometry<Real>) -> Isometry<Real> {
        pose * self.local_pose
    }

    /// The world-space AABB of this geometry placed at `pose`.
    pub fn compute_aabb(&self, pose: &Isometry<Real>) -> Aabb {
        self.shape.compute_aabb(&self.engine_pose(pose))
    }
}

impl fmt::Debug for CollisionGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionGeometry")
            .field("kind", &self.kind)
            .field("local_pose", &self.local_pose)
            .finish_non_exhaustive()
    }
}

/// Builds the collision geometry of `shape` scaled by `scale` then grown by `padding`.
///
/// A `scale` of one and a `padding` of zero (up to [`Real::EPSILON`]) skip the scaled copy of
/// the description entirely.
///
/// # Errors
/// Fails if the shape kind is not supported (cones) or if the shape is malformed. See
/// [`GeometryError`].
///
/// # Example
///
/// ```
/// use pairgate3d::geometry::{build_geometry, GeometryError, ShapeDescription, ShapeKind};
///
/// let ball = build_geometry(&ShapeDescription::Sphere { radius: 0.5 }, 1.0, 0.0).unwrap();
/// assert_eq!(ball.kind(), ShapeKind::Sphere);
///
/// let cone = ShapeDescription::Cone { radius: 0.5, length: 1.0 };
/// assert_eq!(
///     build_geometry(&cone, 1.0, 0.0).unwrap_err(),
///     GeometryError::UnsupportedShape(ShapeKind::Cone)
/// );
/// ```
pub fn build_geometry(
    shape: &ShapeDescription,
    scale: Real,
    padding: Real,
) -> Result<CollisionGeometry, GeometryError> {
    if abs_diff_eq!(scale, 1.0, epsilon = Real::EPSILON)
        && abs_diff_eq!(padding, 0.0, epsilon = Real::EPSILON)
    {
        build_unscaled_geometry(shape)
    } else {
        build_unscaled_geometry(&shape.scaled_and_padded(scale, padding))
    }
}

/// Builds the collision geometry of `shape` as-is.
pub fn build_unscaled_geometry(shape: &ShapeDescription) -> Result<CollisionGeometry, GeometryError> {
    let kind = shape.kind();

    match shape {
        ShapeDescription::Sphere { radius } => {
            check_dimension(kind, *radius)?;
            Ok(CollisionGeometry::new(SharedShape::ball(*radius), kind))
        }
        ShapeDescription::Box { size } => {
            for s in size {
                check_dimension(kind, *s)?;
            }

            let half_extents = Vector::from(*size) / 2.0;
            Ok(CollisionGeometry::new(
                SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z),
                kind,
            ))
        }
        ShapeDescription::Cylinder { radius, length } => {
            check_dimension(kind, *radius)?;
            check_dimension(kind, *length)?;

            // The engine cylinder is along `y`: rotate it onto `z`.
            let local_pose = Isometry::from_parts(
                Translation::identity(),
                Rotation::from_axis_angle(&Vector::x_axis(), core::f64::consts::FRAC_PI_2),
            );
            Ok(CollisionGeometry::with_local_pose(
                SharedShape::cylinder(*length / 2.0, *radius),
                local_pose,
                kind,
            ))
        }
        ShapeDescription::Plane { a, b, c, d } => {
            let normal = Vector::new(*a, *b, *c);
            let sq_norm = normal.norm_squared();

            if !sq_norm.is_finite() || sq_norm <= Real::EPSILON * Real::EPSILON || !d.is_finite() {
                return Err(GeometryError::DegeneratePlane(*a, *b, *c));
            }

            // The closest point of the plane to the origin.
            let origin = normal * (-*d / sq_norm);
            Ok(CollisionGeometry::with_local_pose(
                SharedShape::halfspace(Unit::new_normalize(normal)),
                Isometry::from_parts(Translation::from(origin), Rotation::identity()),
                kind,
            ))
        }
        ShapeDescription::Mesh {
            vertices,
            triangles,
        } => {
            for (triangle, idx) in triangles.iter().enumerate() {
                if let Some(vertex) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                    return Err(GeometryError::MeshIndexOutOfBounds {
                        triangle,
                        vertex: *vertex,
                        num_vertices: vertices.len(),
                    });
                }
            }

            let shape = SharedShape::trimesh(vertices.clone(), triangles.clone())?;
            Ok(CollisionGeometry::new(shape, kind))
        }
        ShapeDescription::Cone { .. } => {
            log::error!("This shape type ({:?}) is not supported for collision checking.", kind);
            Err(GeometryError::UnsupportedShape(kind))
        }
    }
}

fn check_dimension(shape: ShapeKind, value: Real) -> Result<(), GeometryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension { shape, value })
    }
}
