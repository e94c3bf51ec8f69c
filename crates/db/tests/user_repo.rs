//! User repository tests against the in-memory store.

mod common;

use sara_db::models::site::SiteMembership;
use sara_db::models::user::UserProfile;
use sara_db::repositories::UserRepo;

fn profile(id: &str, name: &str, site_id: Option<&str>) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: name.to_string(),
        role: "worker".to_string(),
        site_id: site_id.map(str::to_string),
    }
}

#[tokio::test]
async fn upsert_creates_user_with_cleared_flags() {
    let store = common::test_store();
    let user = UserRepo::upsert(&store, &profile("u1", "Ana", Some("s1"))).await.unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(user.site_id.as_deref(), Some("s1"));
    assert!(!user.acknowledged);
    assert!(!user.needs_help);
    assert_eq!(user.last_active, common::START_MILLIS);
}

#[tokio::test]
async fn second_upsert_overwrites_profile_but_keeps_flags() {
    let store = common::test_store();
    UserRepo::upsert(&store, &profile("u1", "Ana", Some("s1"))).await.unwrap();
    assert!(UserRepo::acknowledge(&store, "u1", true).await.unwrap());

    let user = UserRepo::upsert(&store, &profile("u1", "Ana Lima", None)).await.unwrap();
    assert_eq!(user.name, "Ana Lima");
    assert_eq!(user.site_id, None);
    assert!(user.acknowledged);
    assert!(user.needs_help);
    assert!(user.last_active > common::START_MILLIS);

    let all = UserRepo::list(&store).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Ana Lima");
}

#[tokio::test]
async fn join_moves_user_between_sites() {
    let store = common::test_store();
    let member = SiteMembership {
        user_id: "u1".to_string(),
        user_name: "Ana".to_string(),
        role: "worker".to_string(),
    };

    UserRepo::join(&store, "s1", &member).await.unwrap();
    UserRepo::join(&store, "s2", &member).await.unwrap();

    assert!(UserRepo::list_by_site(&store, "s1").await.unwrap().is_empty());
    let roster = UserRepo::list_by_site(&store, "s2").await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, "u1");
}

#[tokio::test]
async fn list_by_site_filters_other_sites() {
    let store = common::test_store();
    UserRepo::upsert(&store, &profile("u1", "Ana", Some("s1"))).await.unwrap();
    UserRepo::upsert(&store, &profile("u2", "Ben", Some("s2"))).await.unwrap();
    UserRepo::upsert(&store, &profile("u3", "Cai", Some("s1"))).await.unwrap();
    UserRepo::upsert(&store, &profile("u4", "Dee", None)).await.unwrap();

    let ids: Vec<String> = UserRepo::list_by_site(&store, "s1")
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, ["u1", "u3"]);
}

#[tokio::test]
async fn acknowledge_unknown_user_creates_nothing() {
    let store = common::test_store();
    assert!(!UserRepo::acknowledge(&store, "ghost", true).await.unwrap());
    assert!(UserRepo::find_by_id(&store, "ghost").await.unwrap().is_none());
    assert_eq!(store.counts().await.unwrap().users, 0);
}

#[tokio::test]
async fn acknowledge_can_clear_needs_help() {
    let store = common::test_store();
    UserRepo::upsert(&store, &profile("u1", "Ana", None)).await.unwrap();
    UserRepo::acknowledge(&store, "u1", true).await.unwrap();
    UserRepo::acknowledge(&store, "u1", false).await.unwrap();

    let user = UserRepo::find_by_id(&store, "u1").await.unwrap().unwrap();
    assert!(user.acknowledged);
    assert!(!user.needs_help);
}
