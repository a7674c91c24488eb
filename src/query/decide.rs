use super::{CanonicalPairKey, CollisionSession, ContactRequest};
use crate::body::{BodyData, BodyKind};
use crate::object::CollisionObject;
use crate::policy::{AllowedCollision, DecideContactFn};
use core::mem;

/// Decides whether the candidate pair `(object1, object2)` is a collision, and stores its
/// contacts into the session result.
///
/// This is the callback the broad-phase invokes for each candidate pair. It returns `true` once
/// the query is satisfied (a collision was found and either contacts are not requested or the
/// global contact budget is exhausted), telling the broad-phase to stop enumerating pairs.
///
/// The decision goes as follows:
/// 1. The allowed-collision matrix is looked up. `Always` pairs are skipped, `Conditional` pairs
///    have their contacts filtered by the decider.
/// 2. A robot link touching an attached body listing it as a touch link is skipped, whatever the
///    matrix entry is.
/// 3. The number of contacts still wanted for the pair is computed from the per-pair and global
///    budgets of the request.
/// 4. The narrow-phase is called once: exhaustively if there is a decider, for the wanted number
///    of contacts if there is a budget left, and as a boolean test otherwise.
pub fn decide(
    object1: &CollisionObject,
    object2: &CollisionObject,
    session: &mut CollisionSession<'_>,
) -> bool {
    if session.done {
        return true;
    }

    let request = session.request;
    let narrow_phase = session.narrow_phase;
    let (body1, body2) = (object1.body(), object2.body());

    let mut always_allowed = false;
    let mut decider: Option<&DecideContactFn> = None;

    if let Some(acm) = session.acm {
        match acm.get_entry(&body1.id, &body2.id) {
            Some(AllowedCollision::Always) => {
                always_allowed = true;
                if request.verbose {
                    log::info!(
                        "Collision between '{}' and '{}' is always allowed. No contacts are computed.",
                        body1.id,
                        body2.id
                    );
                }
            }
            Some(AllowedCollision::Conditional(dcf)) => {
                decider = Some(dcf);
                if request.verbose {
                    log::info!(
                        "Collision between '{}' and '{}' is conditionally allowed.",
                        body1.id,
                        body2.id
                    );
                }
            }
            Some(AllowedCollision::Never) | None => {}
        }
    }

    if let (Some(bodies), Some((link, attached))) = (session.bodies, link_and_attached(body1, body2))
    {
        if bodies.is_touch_link_exception(&link.id, &attached.id) {
            always_allowed = true;
            if request.verbose {
                log::info!(
                    "Robot link '{}' is allowed to touch attached object '{}'. No contacts are computed.",
                    link.id,
                    attached.id
                );
            }
        }
    }

    if always_allowed {
        return false;
    }

    let mut want_contact_count = 0;
    let mut pair_key = None;

    if request.contacts && session.result.contact_count < request.max_contacts {
        let key = CanonicalPairKey::from_refs(&body1.id, &body2.id);
        want_contact_count = session.result.remaining_budget(
            &key,
            request.max_contacts_per_pair,
            request.max_contacts,
        );
        pair_key = Some(key);
    }

    let mut contacts = mem::take(&mut session.workspace);
    contacts.clear();

    if let Some(decider) = decider {
        // Every contact must be checked against the decider.
        let num_contacts =
            narrow_phase.collide(object1, object2, &ContactRequest::exhaustive(), &mut contacts);

        if num_contacts > 0 && request.verbose {
            log::info!(
                "Found {} contacts between '{}' and '{}'. These contacts will be evaluated to check if they are accepted or not.",
                num_contacts,
                body1.id,
                body2.id
            );
        }

        for contact in contacts.drain(..) {
            if decider(&contact) {
                continue;
            }

            match pair_key.as_ref() {
                Some(key) if want_contact_count > 0 => {
                    want_contact_count -= 1;
                    session.result.record(key, contact);
                    log::debug!(
                        "Found unacceptable contact between '{}' and '{}'. Contact was stored.",
                        body1.id,
                        body2.id
                    );
                }
                _ => log::debug!(
                    "Found unacceptable contact between '{}' and '{}'. Contact was not stored.",
                    body1.id,
                    body2.id
                ),
            }

            session.result.collision = true;

            if want_contact_count == 0 {
                break;
            }
        }
    } else if let Some(key) = pair_key.as_ref().filter(|_| want_contact_count > 0) {
        let num_contacts = narrow_phase.collide(
            object1,
            object2,
            &ContactRequest::budgeted(want_contact_count),
            &mut contacts,
        );

        if num_contacts > 0 {
            // Never trust the narrow-phase to respect the budget.
            contacts.truncate(want_contact_count);

            if request.verbose {
                log::info!(
                    "Found {} contacts between '{}' and '{}', which constitute a collision. {} contacts will be stored.",
                    num_contacts,
                    body1.id,
                    body2.id,
                    contacts.len()
                );
            }

            session.result.collision = true;
            for contact in contacts.drain(..) {
                session.result.record(key, contact);
            }
        }
    } else {
        let num_contacts =
            narrow_phase.collide(object1, object2, &ContactRequest::boolean(), &mut contacts);

        if num_contacts > 0 {
            session.result.collision = true;
            if request.verbose {
                log::info!(
                    "Found a contact between '{}' and '{}', which constitutes a collision. Contact information is not stored.",
                    body1.id,
                    body2.id
                );
            }
        }
    }

    contacts.clear();
    session.workspace = contacts;

    if session.result.collision
        && (!request.contacts || session.result.contact_count >= request.max_contacts)
    {
        session.done = true;
        if request.verbose {
            log::info!(
                "Collision checking is considered complete (collision was found and {} contacts are stored).",
                session.result.contact_count
            );
        }
    }

    session.done
}

/// Splits a robot link/attached body pair into `(link, attached)`.
fn link_and_attached<'b>(
    body1: &'b BodyData,
    body2: &'b BodyData,
) -> Option<(&'b BodyData, &'b BodyData)> {
    match (body1.kind, body2.kind) {
        (BodyKind::RobotLink, BodyKind::RobotAttached) => Some((body1, body2)),
        (BodyKind::RobotAttached, BodyKind::RobotLink) => Some((body2, body1)),
        _ => None,
    }
}
