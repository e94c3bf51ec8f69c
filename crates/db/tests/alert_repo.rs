//! Alert and toolbox talk repository tests against the in-memory store.

mod common;

use sara_db::models::alert::NewAlert;
use sara_db::models::toolbox_talk::NewToolboxTalk;
use sara_db::repositories::{AlertRepo, ToolboxTalkRepo};
use sara_db::Store;

fn new_alert(site_id: &str, alert_type: &str, user_id: &str) -> NewAlert {
    NewAlert {
        site_id: site_id.to_string(),
        alert_type: alert_type.to_string(),
        user_id: user_id.to_string(),
    }
}

fn new_talk(site_id: &str, message: &str) -> NewToolboxTalk {
    NewToolboxTalk {
        site_id: site_id.to_string(),
        talk_type: "ppe".to_string(),
        message: message.to_string(),
    }
}

#[tokio::test]
async fn create_stamps_active_alert_with_date() {
    let store = common::test_store();
    let alert = AlertRepo::create(&store, &new_alert("s1", "fire", "u1")).await.unwrap();

    assert!(alert.active);
    assert_eq!(alert.timestamp, common::START_MILLIS);
    assert_eq!(alert.date, "2026-01-01");
    assert_eq!(alert.user_id.as_deref(), Some("u1"));
}

#[tokio::test]
async fn newer_alert_supersedes_previous_for_same_site_only() {
    let store = common::test_store();
    let other = AlertRepo::create(&store, &new_alert("s2", "gas", "u9")).await.unwrap();
    AlertRepo::create(&store, &new_alert("s1", "fire", "u1")).await.unwrap();
    let evac = AlertRepo::create(&store, &new_alert("s1", "evac", "u2")).await.unwrap();

    let site_alerts = AlertRepo::list_by_site(&store, "s1").await.unwrap();
    let active: Vec<_> = site_alerts.iter().filter(|a| a.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, evac.id);
    assert_eq!(active[0].alert_type, "evac");

    let s2 = AlertRepo::list_by_site(&store, "s2").await.unwrap();
    assert_eq!(s2.len(), 1);
    assert_eq!(s2[0].id, other.id);
    assert!(s2[0].active);
}

#[tokio::test]
async fn alerts_list_newest_first() {
    let store = common::test_store();
    AlertRepo::create(&store, &new_alert("s1", "fire", "u1")).await.unwrap();
    AlertRepo::create(&store, &new_alert("s2", "gas", "u1")).await.unwrap();
    AlertRepo::create(&store, &new_alert("s1", "evac", "u1")).await.unwrap();

    let types: Vec<String> = AlertRepo::list(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.alert_type)
        .collect();
    assert_eq!(types, ["evac", "gas", "fire"]);
}

#[tokio::test]
async fn concurrent_alerts_leave_one_active() {
    let store = Store::in_memory();
    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            AlertRepo::create(&store, &new_alert("s1", &format!("drill-{i}"), "u1"))
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let alerts = AlertRepo::list_by_site(&store, "s1").await.unwrap();
    assert_eq!(alerts.len(), 16);
    assert_eq!(alerts.iter().filter(|a| a.active).count(), 1);
}

#[tokio::test]
async fn toolbox_talk_defaults() {
    let store = common::test_store();
    let talk = ToolboxTalkRepo::create(&store, &new_talk("s1", "Wear hard hats"))
        .await
        .unwrap();

    assert!(talk.id.starts_with("talk-"));
    assert!(talk.is_active);
    assert!(talk.acknowledged_by.is_empty());
    assert_eq!(talk.created_by, "s1");
    assert_eq!(talk.created_at, "2026-01-01T00:00:00.000Z");
}

#[tokio::test]
async fn toolbox_talks_list_newest_first_per_site() {
    let store = common::test_store();
    ToolboxTalkRepo::create(&store, &new_talk("s1", "one")).await.unwrap();
    ToolboxTalkRepo::create(&store, &new_talk("s2", "elsewhere")).await.unwrap();
    ToolboxTalkRepo::create(&store, &new_talk("s1", "two")).await.unwrap();

    let talks = ToolboxTalkRepo::list_by_site(&store, "s1").await.unwrap();
    let messages: Vec<&str> = talks.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["two", "one"]);
    assert!(talks.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}
