use crate::math::{Isometry, Pose, Real, Rotation, Translation};
use crate::na::{Matrix3, Rotation3};

/// Converts a host-side rigid pose into the transform type of the geometry engine.
///
/// The rotational part of `pose` is assumed to be a proper rotation (no scaling or shearing), in
/// which case the conversion is lossless.
pub fn to_engine_transform(pose: &Pose<Real>) -> Isometry<Real> {
    let m = pose.matrix();
    let basis: Matrix3<Real> = m.fixed_view::<3, 3>(0, 0).into_owned();
    let rotation = Rotation::from_rotation_matrix(&Rotation3::from_matrix_unchecked(basis));
    let translation = Translation::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);

    Isometry::from_parts(translation, rotation)
}

/// Converts a transform of the geometry engine back into a host-side pose.
pub fn from_engine_transform(transform: &Isometry<Real>) -> Pose<Real> {
    Pose::from_matrix_unchecked(transform.to_homogeneous())
}
