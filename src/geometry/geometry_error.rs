use super::ShapeKind;
use crate::math::Real;
use parry::shape::TriMeshBuilderError;

/// Error raised while building the collision geometry of a shape.
///
/// These are configuration errors: they are reported when a collision object is built, before
/// any collision query runs.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The shape kind has no collision geometry counterpart.
    #[error("this shape type ({0:?}) is not supported for collision checking.")]
    UnsupportedShape(ShapeKind),
    /// A shape dimension is negative, infinite, or NaN.
    #[error("the {shape:?} has an invalid dimension: {value}.")]
    InvalidDimension {
        /// The kind of the malformed shape.
        shape: ShapeKind,
        /// The offending dimension.
        value: Real,
    },
    /// The normal of a plane is zero (or not finite).
    #[error("the plane normal ({0}, {1}, {2}) is degenerate.")]
    DegeneratePlane(Real, Real, Real),
    /// A mesh triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {vertex} but the mesh only has {num_vertices} vertices.")]
    MeshIndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: usize,
        /// The out-of-bounds vertex index.
        vertex: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
    /// The triangle mesh could not be built.
    #[error("invalid triangle mesh: {0}")]
    InvalidMesh(#[from] TriMeshBuilderError),
}
