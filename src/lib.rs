/*!
pairgate3d
==========

**pairgate3d** is the pairwise collision-decision layer of a 3-dimensional
robot motion-planning collision checker, written with the rust programming
language.

A broad-phase proposes candidate pairs of collision objects. For each pair,
[`query::decide`] applies the allowed-collision policy and the attached-body
touch-link exceptions, asks the narrow-phase for as many contacts as the
request budget permits, accumulates them per canonical body pair, and tells
the broad-phase whether the whole query is satisfied.

Geometry, narrow-phase contacts and bounding volumes are provided by
[parry](https://parry.rs).
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::type_complexity)] // Complains about closures that are fairly simple.

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate parry3d_f64 as parry;
pub use parry::na;

pub mod body;
pub mod geometry;
pub mod object;
pub mod partitioning;
pub mod policy;
pub mod query;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use parry::math::{Isometry, Point, Real, Translation, UnitVector, Vector};

    /// The rotation type.
    pub type Rotation<N> = crate::na::UnitQuaternion<N>;

    /// The host-side pose type, a general 3D affine transform.
    pub type Pose<N> = crate::na::Affine3<N>;
}
