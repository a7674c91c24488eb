use super::scripted::{object, ScriptedNarrowPhase};
use pairgate3d::body::{AttachedBodyInfo, BodyData, BodyId, BodyRegistry};
use pairgate3d::object::CollisionObject;
use pairgate3d::policy::AllowedCollisionMatrix;
use pairgate3d::query::{
    decide, CanonicalPairKey, CollisionRequest, CollisionResult, CollisionSession,
};

#[test]
fn always_allowed_pairs_leave_the_result_untouched() {
    let a = object(BodyData::robot_link("forearm"));
    let b = object(BodyData::world_object("shelf"));
    let mut acm = AllowedCollisionMatrix::new();
    acm.set_entry("shelf", "forearm", true);

    for depths in [&[][..], &[0.1][..], &[0.1, 0.2, 0.3][..]] {
        for request in [
            CollisionRequest::boolean(),
            CollisionRequest::with_contacts(10, 3),
        ] {
            let narrow_phase = ScriptedNarrowPhase::new(depths);
            let mut result = CollisionResult::new();
            let mut session = CollisionSession::new(&request, &mut result, &narrow_phase)
                .with_allowed_collisions(&acm);

            assert!(!decide(&a, &b, &mut session));
            assert!(!decide(&b, &a, &mut session));
            assert_eq!(narrow_phase.calls(), 0);
            assert!(!result.collision);
            assert_eq!(result.contact_count, 0);
            assert!(result.contacts.is_empty());
        }
    }
}

#[test]
fn touch_links_override_never_and_conditional_entries() {
    let finger = object(BodyData::robot_link("finger"));
    let cup = object(BodyData::robot_attached("cup"));
    let mut bodies = BodyRegistry::new();
    let _ = bodies.attach("cup", AttachedBodyInfo::new("hand", ["finger".into()]));

    let mut never = AllowedCollisionMatrix::new();
    never.set_entry("finger", "cup", false);
    let mut conditional = AllowedCollisionMatrix::new();
    conditional.set_conditional("finger", "cup", |_| false);

    for acm in [&never, &conditional] {
        let request = CollisionRequest::with_contacts(10, 2);
        let narrow_phase = ScriptedNarrowPhase::new(&[0.1, 0.2]);
        let mut result = CollisionResult::new();
        let mut session = CollisionSession::new(&request, &mut result, &narrow_phase)
            .with_allowed_collisions(acm)
            .with_bodies(&bodies);

        assert!(!decide(&finger, &cup, &mut session));
        assert!(!decide(&cup, &finger, &mut session));
        assert_eq!(narrow_phase.calls(), 0);
        assert!(!result.collision);
        assert!(result.contacts.is_empty());
    }
}

#[test]
fn touch_link_exception_only_applies_to_link_attached_pairs() {
    // A world object named after a touch link gets no exception.
    let not_a_link = object(BodyData::world_object("finger"));
    let cup = object(BodyData::robot_attached("cup"));
    let mut bodies = BodyRegistry::new();
    let _ = bodies.attach("cup", AttachedBodyInfo::new("hand", ["finger".into()]));

    let request = CollisionRequest::boolean();
    let narrow_phase = ScriptedNarrowPhase::new(&[0.1]);
    let mut result = CollisionResult::new();
    let mut session =
        CollisionSession::new(&request, &mut result, &narrow_phase).with_bodies(&bodies);

    assert!(decide(&not_a_link, &cup, &mut session));
    assert_eq!(narrow_phase.calls(), 1);
    assert!(result.collision);
}

#[test]
fn contacts_of_both_orders_share_one_bucket() {
    let a = object(BodyData::robot_link("a"));
    let b = object(BodyData::world_object("b"));
    let key = CanonicalPairKey::from_refs(&"b".into(), &"a".into());
    let request = CollisionRequest::with_contacts(10, 4);
    let narrow_phase = ScriptedNarrowPhase::new(&[0.1]);

    let mut ab_then_ba = CollisionResult::new();
    let mut session = CollisionSession::new(&request, &mut ab_then_ba, &narrow_phase);
    let _ = decide(&a, &b, &mut session);
    let _ = decide(&b, &a, &mut session);

    let mut ba_then_ab = CollisionResult::new();
    let mut session = CollisionSession::new(&request, &mut ba_then_ab, &narrow_phase);
    let _ = decide(&b, &a, &mut session);
    let _ = decide(&a, &b, &mut session);

    assert_eq!(ab_then_ba.contacts.len(), 1);
    assert_eq!(ab_then_ba.stored_count(&key), 2);
    assert_eq!(ba_then_ab.stored_count(&key), 2);

    // Contacts keep the body order of the decision that produced them.
    let firsts: Vec<&str> = ab_then_ba
        .pair_contacts(&key)
        .iter()
        .map(|c| c.body_name_1.as_str())
        .collect();
    assert_eq!(firsts, vec!["a", "b"]);
}

#[test]
fn random_decision_sequences_respect_contact_quotas() {
    let mut rng = oorandom::Rand32::new(42);
    let bodies: Vec<CollisionObject> = (0..6)
        .map(|i| object(BodyData::world_object(format!("body{}", i))))
        .collect();

    for _ in 0..200 {
        let max_contacts = rng.rand_range(1..12) as usize;
        let max_contacts_per_pair = rng.rand_range(1..5) as usize;
        let request = CollisionRequest::with_contacts(max_contacts, max_contacts_per_pair);

        let mut acm = AllowedCollisionMatrix::new();
        for _ in 0..3 {
            let i = rng.rand_range(0..6) as usize;
            let j = rng.rand_range(0..6) as usize;
            if i != j {
                let threshold = rng.rand_float() as f64;
                acm.set_conditional(bodies[i].id().clone(), bodies[j].id().clone(), move |c| {
                    c.depth < threshold
                });
            }
        }

        let narrow_phase = ScriptedNarrowPhase::new(&[]);
        let mut result = CollisionResult::new();
        let mut session = CollisionSession::new(&request, &mut result, &narrow_phase)
            .with_allowed_collisions(&acm);

        for _ in 0..30 {
            let i = rng.rand_range(0..6) as usize;
            let j = (i + rng.rand_range(1..6) as usize) % 6;
            let depths: Vec<f64> = (0..rng.rand_range(0..7))
                .map(|_| rng.rand_float() as f64)
                .collect();
            narrow_phase.set_depths(&depths);

            let was_done = session.is_done();
            let done = decide(&bodies[i], &bodies[j], &mut session);
            assert!(!was_done || done);

            let partial = session.result();
            assert!(partial.contact_count <= max_contacts);
            assert_eq!(
                partial.contact_count,
                partial.contacts.values().map(|c| c.len()).sum::<usize>()
            );
            for contacts in partial.contacts.values() {
                assert!(contacts.len() <= max_contacts_per_pair);
            }
        }
    }
}

#[test]
fn query_stays_done_once_the_global_budget_is_spent() {
    let ids: Vec<BodyId> = ["a", "b", "c"].into_iter().map(BodyId::from).collect();
    let objects: Vec<CollisionObject> = ids
        .iter()
        .map(|id| object(BodyData::world_object(id.clone())))
        .collect();
    let request = CollisionRequest::with_contacts(3, 2);
    let narrow_phase = ScriptedNarrowPhase::new(&[0.1, 0.2]);
    let mut result = CollisionResult::new();
    let mut session = CollisionSession::new(&request, &mut result, &narrow_phase);

    assert!(!decide(&objects[0], &objects[1], &mut session));
    assert_eq!(session.result().contact_count, 2);

    // Only one contact is left in the global budget.
    assert!(decide(&objects[1], &objects[2], &mut session));
    assert_eq!(session.result().contact_count, 3);

    let calls = narrow_phase.calls();
    assert!(decide(&objects[0], &objects[2], &mut session));
    assert!(decide(&objects[2], &objects[0], &mut session));
    assert_eq!(narrow_phase.calls(), calls);
    assert!(session.is_done());

    assert!(result.collision);
    assert_eq!(result.contact_count, 3);
}
