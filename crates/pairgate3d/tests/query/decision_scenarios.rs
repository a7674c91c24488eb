use super::scripted::{object, ScriptedNarrowPhase};
use pairgate3d::body::BodyData;
use pairgate3d::policy::AllowedCollisionMatrix;
use pairgate3d::query::{
    decide, CanonicalPairKey, CollisionRequest, CollisionResult, CollisionSession, ContactRequest,
};

#[test]
fn budgeted_pair_stores_up_to_its_quota() {
    let a = object(BodyData::robot_link("upper_arm"));
    let b = object(BodyData::world_object("wall"));
    let request = CollisionRequest::with_contacts(10, 2);
    let narrow_phase = ScriptedNarrowPhase::new(&[0.03, 0.02, 0.01]);
    let mut result = CollisionResult::new();
    let mut session = CollisionSession::new(&request, &mut result, &narrow_phase);

    assert!(!decide(&a, &b, &mut session));
    assert!(!session.is_done());
    assert_eq!(narrow_phase.last_request(), Some(ContactRequest::budgeted(2)));

    assert!(result.collision);
    assert_eq!(result.contact_count, 2);
    let key = CanonicalPairKey::from_refs(a.id(), b.id());
    assert_eq!(result.stored_count(&key), 2);
}

#[test]
fn conditional_pair_stores_rejected_contacts_only() {
    let a = object(BodyData::robot_link("wrist"));
    let b = object(BodyData::world_object("bin"));
    let mut acm = AllowedCollisionMatrix::new();
    // Shallow contacts are tolerated.
    acm.set_conditional("wrist", "bin", |c| c.depth <= 0.01);

    let request = CollisionRequest::with_contacts(10, 5);
    let narrow_phase = ScriptedNarrowPhase::new(&[0.02, 0.005]);
    let mut result = CollisionResult::new();
    let mut session =
        CollisionSession::new(&request, &mut result, &narrow_phase).with_allowed_collisions(&acm);

    assert!(!decide(&b, &a, &mut session));
    assert_eq!(narrow_phase.last_request(), Some(ContactRequest::exhaustive()));

    assert!(result.collision);
    assert_eq!(result.contact_count, 1);
    let stored: Vec<_> = result.iter_contacts().collect();
    assert_relative_eq!(stored[0].depth, 0.02);
    assert_eq!(stored[0].body_name_1.as_str(), "bin");
}

#[test]
fn boolean_query_stops_at_the_first_collision() {
    let a = object(BodyData::robot_link("base"));
    let b = object(BodyData::world_object("floor"));
    let request = CollisionRequest::boolean();
    let narrow_phase = ScriptedNarrowPhase::new(&[0.2, 0.1]);
    let mut result = CollisionResult::new();
    let mut session = CollisionSession::new(&request, &mut result, &narrow_phase);

    assert!(decide(&a, &b, &mut session));
    assert!(session.is_done());
    assert_eq!(narrow_phase.last_request(), Some(ContactRequest::boolean()));

    assert!(result.collision);
    assert_eq!(result.contact_count, 0);
    assert!(result.contacts.is_empty());
}

#[test]
fn colliding_pair_without_budget_still_reports_collision() {
    let a = object(BodyData::robot_link("base"));
    let b = object(BodyData::world_object("floor"));
    let request = CollisionRequest::with_contacts(10, 0);
    let narrow_phase = ScriptedNarrowPhase::new(&[0.2]);
    let mut result = CollisionResult::new();
    let mut session = CollisionSession::new(&request, &mut result, &narrow_phase);

    assert!(!decide(&a, &b, &mut session));
    assert_eq!(narrow_phase.last_request(), Some(ContactRequest::boolean()));
    assert!(result.collision);
    assert!(result.contacts.is_empty());
}

#[test]
fn rejected_contact_without_contact_request_ends_the_query() {
    let a = object(BodyData::robot_link("gripper"));
    let b = object(BodyData::world_object("shelf"));
    let mut acm = AllowedCollisionMatrix::new();
    acm.set_conditional("gripper", "shelf", |_| false);

    let request = CollisionRequest::boolean();
    let narrow_phase = ScriptedNarrowPhase::new(&[0.04, 0.03]);
    let mut result = CollisionResult::new();
    let mut session =
        CollisionSession::new(&request, &mut result, &narrow_phase).with_allowed_collisions(&acm);

    assert!(decide(&a, &b, &mut session));
    assert!(session.is_done());
    assert_eq!(narrow_phase.calls(), 1);
    assert_eq!(narrow_phase.last_request(), Some(ContactRequest::exhaustive()));

    assert!(result.collision);
    assert_eq!(result.contact_count, 0);
    assert!(result.contacts.is_empty());
}

#[test]
fn rejected_contact_with_exhausted_pair_quota_is_not_stored() {
    let a = object(BodyData::robot_link("gripper"));
    let b = object(BodyData::world_object("shelf"));
    let mut acm = AllowedCollisionMatrix::new();
    acm.set_conditional("gripper", "shelf", |_| false);

    let request = CollisionRequest::with_contacts(10, 1);
    let narrow_phase = ScriptedNarrowPhase::new(&[0.04, 0.03]);
    let mut result = CollisionResult::new();
    let mut session =
        CollisionSession::new(&request, &mut result, &narrow_phase).with_allowed_collisions(&acm);

    // The first pass fills the quota of the pair.
    assert!(!decide(&a, &b, &mut session));
    assert_eq!(result.contact_count, 1);

    let mut session =
        CollisionSession::new(&request, &mut result, &narrow_phase).with_allowed_collisions(&acm);
    assert!(!decide(&b, &a, &mut session));
    assert!(!session.is_done());
    assert_eq!(narrow_phase.calls(), 2);
    assert_eq!(narrow_phase.last_request(), Some(ContactRequest::exhaustive()));

    assert!(result.collision);
    assert_eq!(result.contact_count, 1);
    let key = CanonicalPairKey::from_refs(a.id(), b.id());
    assert_eq!(result.stored_count(&key), 1);
    assert_relative_eq!(result.pair_contacts(&key)[0].depth, 0.04);
}
