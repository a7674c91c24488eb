use crate::math::{Point, Real, Vector};
use alloc::vec::Vec;

/// Tolerance under which a mesh vertex is considered to coincide with the mesh centroid.
const MESH_PADDING_EPSILON: Real = 1.0e-6;

/// The kind of a [`ShapeDescription`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    /// A sphere.
    Sphere,
    /// A box.
    Box,
    /// A cylinder.
    Cylinder,
    /// A cone.
    Cone,
    /// An infinite plane.
    Plane,
    /// A triangle mesh.
    Mesh,
}

/// The host-side description of a body shape, as loaded from a robot or scene description.
///
/// All shapes are centered at the origin of their local frame. Cylinders and cones have their
/// axis aligned with the local `z` axis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeDescription {
    /// A sphere with the given radius.
    Sphere {
        /// The sphere radius.
        radius: Real,
    },
    /// A box with the given full side lengths.
    Box {
        /// The side lengths along `x`, `y` and `z`.
        size: [Real; 3],
    },
    /// A cylinder along the `z` axis.
    Cylinder {
        /// The cylinder radius.
        radius: Real,
        /// The full cylinder length.
        length: Real,
    },
    /// A cone along the `z` axis.
    Cone {
        /// The radius of the cone base.
        radius: Real,
        /// The full cone length.
        length: Real,
    },
    /// The plane `a*x + b*y + c*z + d = 0`.
    ///
    /// The side opposite to the normal `(a, b, c)` is solid.
    Plane {
        /// The `x` component of the plane normal.
        a: Real,
        /// The `y` component of the plane normal.
        b: Real,
        /// The `z` component of the plane normal.
        c: Real,
        /// The plane offset.
        d: Real,
    },
    /// A triangle mesh.
    Mesh {
        /// The mesh vertices.
        vertices: Vec<Point<Real>>,
        /// The mesh triangles, as triplets of indices into `vertices`.
        triangles: Vec<[u32; 3]>,
    },
}

impl ShapeDescription {
    /// The kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeDescription::Sphere { .. } => ShapeKind::Sphere,
            ShapeDescription::Box { .. } => ShapeKind::Box,
            ShapeDescription::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeDescription::Cone { .. } => ShapeKind::Cone,
            ShapeDescription::Plane { .. } => ShapeKind::Plane,
            ShapeDescription::Mesh { .. } => ShapeKind::Mesh,
        }
    }

    /// Scales this shape by `scale`, then grows it by `padding` in every direction.
    ///
    /// Planes are left unchanged. Mesh vertices are scaled about the mesh centroid and pushed
    /// away from it by `padding`.
    pub fn scale_and_pad(&mut self, scale: Real, padding: Real) {
        match self {
            ShapeDescription::Sphere { radius } => *radius = *radius * scale + padding,
            ShapeDescription::Box { size } => {
                for s in size.iter_mut() {
                    *s = *s * scale + 2.0 * padding;
                }
            }
            ShapeDescription::Cylinder { radius, length }
            | ShapeDescription::Cone { radius, length } => {
                *radius = *radius * scale + padding;
                *length = *length * scale + 2.0 * padding;
            }
            ShapeDescription::Plane { .. } => {}
            ShapeDescription::Mesh { vertices, .. } => scale_and_pad_vertices(vertices, scale, padding),
        }
    }

    /// Returns a copy of this shape scaled by `scale` then grown by `padding`.
    pub fn scaled_and_padded(&self, scale: Real, padding: Real) -> Self {
        let mut result = self.clone();
        result.scale_and_pad(scale, padding);
        result
    }
}

fn scale_and_pad_vertices(vertices: &mut [Point<Real>], scale: Real, padding: Real) {
    if vertices.is_empty() {
        return;
    }

    let centroid = vertices
        .iter()
        .fold(Vector::zeros(), |acc, pt| acc + pt.coords)
        / vertices.len() as Real;
    let centroid = Point::from(centroid);

    for pt in vertices.iter_mut() {
        let dpt = *pt - centroid;
        let norm = dpt.norm();

        if norm > MESH_PADDING_EPSILON {
            *pt = centroid + dpt * (scale + padding / norm);
        } else {
            // Degenerate direction: pad along each axis independently.
            *pt = centroid + dpt.map(|e| if e > 0.0 { e + padding } else { e - padding });
        }
    }
}
