use super::{decide, CollisionSession};
use crate::object::{CollisionObject, ObjectGroup};
use crate::partitioning::BroadPhase;

/// Checks every candidate pair of objects registered to `broad_phase`.
///
/// Returns `true` if the query was satisfied before all the candidate pairs were checked.
pub fn collide(broad_phase: &dyn BroadPhase, session: &mut CollisionSession<'_>) -> bool {
    if !session.done {
        broad_phase.collide(&mut |o1, o2| decide(o1, o2, session));
    }

    session.done
}

/// Checks `object` against every object registered to `broad_phase`.
///
/// `object` is always the first object of the decided pairs.
pub fn collide_object(
    broad_phase: &dyn BroadPhase,
    object: &CollisionObject,
    session: &mut CollisionSession<'_>,
) -> bool {
    if !session.done {
        broad_phase.collide_object(object, &mut |o1, o2| decide(o1, o2, session));
    }

    session.done
}

/// Checks every object of `group` against the objects registered to `broad_phase`.
///
/// The group itself must not be registered to `broad_phase`, otherwise its objects are also
/// checked against each other.
pub fn collide_group(
    broad_phase: &dyn BroadPhase,
    group: &ObjectGroup,
    session: &mut CollisionSession<'_>,
) -> bool {
    for object in group.objects() {
        if collide_object(broad_phase, object, session) {
            break;
        }
    }

    session.done
}
