use chrono::{Duration, TimeZone, Utc};
use social_agent_core::{Idea, IdeaStatus, Platform};

use super::*;
use crate::engagement::SeededEngagement;

fn seeded_store() -> IdeaStore {
    IdeaStore::with_generator(Box::new(SeededEngagement::new(42)))
}

fn store_with_draft() -> (IdeaStore, i64) {
    let mut store = seeded_store();
    let idea = store.append_draft(Idea::draft(0, "Title", "Summary"));
    (store, idea.id)
}

#[test]
fn demo_board_has_two_scheduled_and_three_posted() {
    let store = IdeaStore::new().with_demo_ideas();
    assert_eq!(store.len(), 5);
    assert_eq!(store.by_status(IdeaStatus::Scheduled).len(), 2);
    assert_eq!(store.by_status(IdeaStatus::Posted).len(), 3);
    let ids: Vec<i64> = store.list().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn demo_ideas_keep_stage_fields_consistent() {
    let store = IdeaStore::new().with_demo_ideas();
    for idea in store.list() {
        match idea.status() {
            IdeaStatus::Scheduled => {
                assert!(idea.scheduled_for().is_some());
                assert!(idea.published_at().is_none() && idea.engagement().is_none());
            }
            IdeaStatus::Posted => {
                assert!(idea.published_at().is_some() && idea.engagement().is_some());
                assert!(idea.scheduled_for().is_none());
            }
            other => panic!("unexpected demo status {other}"),
        }
        assert_eq!(idea.platform_adaptations.len(), 3);
    }
}

#[test]
fn append_draft_discards_caller_id_and_stage() {
    let mut store = seeded_store();
    let mut incoming = Idea::draft(99, "t", "s");
    incoming.stage = IdeaStage::Approved;
    let stored = store.append_draft(incoming);
    assert_eq!(stored.id, 1);
    assert_eq!(stored.status(), IdeaStatus::Draft);
}

#[test]
fn ids_continue_after_demo_seed() {
    let mut store = IdeaStore::new().with_demo_ideas();
    let idea = store.append_draft(Idea::draft(0, "t", "s"));
    assert_eq!(idea.id, 6);
}

#[test]
fn approve_sets_status_and_is_idempotent() {
    let (mut store, id) = store_with_draft();
    store.approve(id).unwrap();
    let once = store.get(id).unwrap().clone();
    assert_eq!(once.status(), IdeaStatus::Approved);
    store.approve(id).unwrap();
    assert_eq!(store.get(id).unwrap(), &once);
}

#[test]
fn approve_unknown_id_is_not_found() {
    let mut store = seeded_store();
    let err = store.approve(404).unwrap_err();
    assert!(matches!(err, ContentError::NotFound { kind: "idea", id: 404 }));
}

#[test]
fn full_lifecycle_reaches_posted() {
    let (mut store, id) = store_with_draft();
    let when = Utc.with_ymd_and_hms(2030, 5, 1, 9, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2030, 5, 1, 9, 5, 0).unwrap();

    store.approve(id).unwrap();
    let scheduled = store.schedule(id, when).unwrap();
    assert_eq!(scheduled.scheduled_for(), Some(when));

    let posted = store.publish(id, now).unwrap().clone();
    assert_eq!(posted.status(), IdeaStatus::Posted);
    assert_eq!(posted.published_at(), Some(now));
    assert!(posted.scheduled_for().is_none());

    let engagement = posted.engagement().unwrap();
    assert!((50..250).contains(&engagement.likes));
    assert!((10..40).contains(&engagement.comments));
    assert!((5..25).contains(&engagement.shares));
}

#[test]
fn seeded_publish_is_reproducible() {
    let run = || {
        let (mut store, id) = store_with_draft();
        let now = Utc::now();
        store.approve(id).unwrap();
        store.schedule(id, now + Duration::hours(24)).unwrap();
        let engagement = store.publish(id, now).unwrap().engagement();
        engagement
    };
    assert_eq!(run(), run());
}

#[test]
fn publish_draft_is_invalid_transition() {
    let (mut store, id) = store_with_draft();
    let err = store.publish(id, Utc::now()).unwrap_err();
    assert!(matches!(
        err,
        ContentError::InvalidTransition {
            from: IdeaStatus::Draft,
            action: Transition::Publish,
            ..
        }
    ));
    assert_eq!(store.get(id).unwrap().status(), IdeaStatus::Draft);
}

#[test]
fn schedule_draft_is_invalid_transition() {
    let (mut store, id) = store_with_draft();
    let err = store.schedule(id, Utc::now()).unwrap_err();
    assert!(matches!(
        err,
        ContentError::InvalidTransition {
            action: Transition::Schedule,
            ..
        }
    ));
}

#[test]
fn nothing_leaves_posted() {
    let mut store = IdeaStore::new().with_demo_ideas();
    let posted_id = store.by_status(IdeaStatus::Posted)[0].id;
    assert!(store.approve(posted_id).is_err());
    assert!(store.schedule(posted_id, Utc::now()).is_err());
    assert!(store.publish(posted_id, Utc::now()).is_err());
    assert_eq!(store.get(posted_id).unwrap().status(), IdeaStatus::Posted);
}

#[test]
fn filter_preserves_append_order() {
    let mut store = seeded_store();
    for title in ["a", "b", "c", "d"] {
        let mut idea = Idea::draft(0, title, "");
        if title != "b" {
            idea.platform_adaptations
                .insert(Platform::Tiktok, format!("{title} on tiktok"));
        }
        store.append_draft(idea);
    }
    let titles: Vec<&str> = store
        .filter(|i| i.platform_adaptations.contains_key(&Platform::Tiktok))
        .iter()
        .map(|i| i.title.as_str())
        .collect();
    assert_eq!(titles, vec!["a", "c", "d"]);
}

#[test]
fn transition_requirements_follow_the_chain() {
    assert_eq!(Transition::Approve.requires(), IdeaStatus::Draft);
    assert_eq!(Transition::Schedule.requires(), IdeaStatus::Approved);
    assert_eq!(Transition::Publish.requires(), IdeaStatus::Scheduled);
}
