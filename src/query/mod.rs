//! Discrete collision queries between the objects of a planning scene.
//!
//! A query is driven by a broad-phase (see [`crate::partitioning`]) enumerating candidate pairs
//! of objects. Each pair is handed to [`decide`], which consults the allowed-collision matrix and
//! the touch links of attached bodies, computes the contacts of the pair with a [`NarrowPhase`],
//! and accumulates them into a [`CollisionResult`] within the budgets of the [`CollisionRequest`].
//!
//! The [`collide`], [`collide_object`] and [`collide_group`] functions run such a query over a
//! whole broad-phase:
//!
//! ```
//! use pairgate3d::body::BodyData;
//! use pairgate3d::geometry::{build_geometry, ShapeDescription};
//! use pairgate3d::math::Isometry;
//! use pairgate3d::object::CollisionObject;
//! use pairgate3d::partitioning::{BroadPhase, SweepAndPrune};
//! use pairgate3d::query::{self, CollisionRequest, CollisionResult, CollisionSession, ParryNarrowPhase};
//! use std::sync::Arc;
//!
//! let ball = build_geometry(&ShapeDescription::Sphere { radius: 0.5 }, 1.0, 0.0).unwrap();
//! let mut broad_phase = SweepAndPrune::new();
//! let _ = broad_phase.register(Arc::new(CollisionObject::new(
//!     BodyData::robot_link("gripper"),
//!     ball.clone(),
//!     Isometry::identity(),
//! )));
//! let _ = broad_phase.register(Arc::new(CollisionObject::new(
//!     BodyData::world_object("table"),
//!     ball,
//!     Isometry::translation(0.8, 0.0, 0.0),
//! )));
//!
//! let request = CollisionRequest::with_contacts(10, 1);
//! let mut result = CollisionResult::new();
//! let narrow_phase = ParryNarrowPhase::new();
//! let mut session = CollisionSession::new(&request, &mut result, &narrow_phase);
//!
//! let _ = query::collide(&broad_phase, &mut session);
//! assert!(result.collision);
//! assert_eq!(result.contact_count, 1);
//! ```

pub use self::collide::{collide, collide_group, collide_object};
pub use self::contact::Contact;
pub use self::decide::decide;
pub use self::narrow_phase::{ContactRequest, NarrowPhase, ParryNarrowPhase};
pub use self::pair_key::CanonicalPairKey;
pub use self::request::CollisionRequest;
pub use self::result::CollisionResult;
pub use self::session::CollisionSession;

mod collide;
mod contact;
mod decide;
pub mod narrow_phase;
mod pair_key;
mod request;
mod result;
mod session;
