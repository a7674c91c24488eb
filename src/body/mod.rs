//! Identity of the bodies owning collision objects.

pub use self::body_id::{BodyData, BodyId, BodyKind};
pub use self::body_registry::{AttachedBodyInfo, BodyRegistry};

mod body_id;
mod body_registry;
