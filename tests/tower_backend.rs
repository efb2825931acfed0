mod common;

use std::collections::HashMap;
use std::sync::Arc;

use common::{record, record_count, sqlite_store};
use seaorm_session_records::session_store;
use seaorm_session_records::ManualClock;
use serde_json::json;
use time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::{ExpiredDeletion, SessionStore as _};

fn tower_record(user: &str) -> Record {
    Record {
        id: Id::default(),
        data: HashMap::from([("user".to_string(), json!(user))]),
        expiry_date: OffsetDateTime::now_utc() + time::Duration::hours(1),
    }
}

#[tokio::test]
async fn created_record_loads_back() {
    let store = sqlite_store(Arc::new(ManualClock::at(0))).await;
    let mut rec = tower_record("ada");

    store.create(&mut rec).await.unwrap();

    let loaded = store.load(&rec.id).await.unwrap().unwrap();
    assert_eq!(loaded.id, rec.id);
    assert_eq!(loaded.data, rec.data);
}

#[tokio::test]
async fn create_moves_off_a_taken_id() {
    let store = sqlite_store(Arc::new(ManualClock::at(0))).await;
    let mut rec = tower_record("ada");
    let taken = rec.id.to_string();
    store.read(&taken).await.unwrap();

    store.create(&mut rec).await.unwrap();

    assert_ne!(rec.id.to_string(), taken);
    assert_eq!(record(&store, &taken).await.unwrap().data, "");
    assert!(store.load(&rec.id).await.unwrap().is_some());
}

#[tokio::test]
async fn unknown_id_loads_as_none() {
    let store = sqlite_store(Arc::new(ManualClock::at(0))).await;

    assert!(store.load(&Id::default()).await.unwrap().is_none());
    // Creation on read still leaves an empty record behind.
    assert_eq!(record_count(&store).await, 1);
}

#[tokio::test]
async fn save_updates_and_recreates() {
    let store = sqlite_store(Arc::new(ManualClock::at(0))).await;
    let mut rec = tower_record("ada");
    store.create(&mut rec).await.unwrap();

    rec.data.insert("visits".to_string(), json!(2));
    store.save(&rec).await.unwrap();
    let loaded = store.load(&rec.id).await.unwrap().unwrap();
    assert_eq!(loaded.data["visits"], json!(2));

    store.delete(&rec.id).await.unwrap();
    store.save(&rec).await.unwrap();
    assert!(store.load(&rec.id).await.unwrap().is_some());
}

#[tokio::test]
async fn delete_removes_the_record() {
    let store = sqlite_store(Arc::new(ManualClock::at(0))).await;
    let mut rec = tower_record("ada");
    store.create(&mut rec).await.unwrap();

    store.delete(&rec.id).await.unwrap();

    assert!(record(&store, &rec.id.to_string()).await.is_none());
}

#[tokio::test]
async fn expired_sessions_load_as_none_and_get_deleted() {
    let clock = Arc::new(ManualClock::at(0));
    let store = sqlite_store(clock.clone()).await;
    let mut rec = tower_record("ada");
    store.create(&mut rec).await.unwrap();

    clock.set(1_000);
    assert!(store.load(&rec.id).await.unwrap().is_none());

    store.delete_expired().await.unwrap();
    store.settle().await;
    assert!(record(&store, &rec.id.to_string()).await.is_none());
}

#[tokio::test]
async fn record_past_its_own_expiry_loads_as_none() {
    let clock = Arc::new(ManualClock::at(0));
    let store = sqlite_store(clock.clone()).await;
    let mut rec = tower_record("ada");
    rec.expiry_date = OffsetDateTime::from_unix_timestamp(50).unwrap();
    store.create(&mut rec).await.unwrap();

    clock.set(49);
    assert!(store.load(&rec.id).await.unwrap().is_some());

    // The store's own lifetime still covers it until 100.
    clock.set(50);
    assert!(store.load(&rec.id).await.unwrap().is_none());
    assert!(record(&store, &rec.id.to_string()).await.is_some());
}

#[tokio::test]
async fn foreign_payload_is_a_decode_error() {
    let store = sqlite_store(Arc::new(ManualClock::at(0))).await;
    let id = Id::default();
    store.read(&id.to_string()).await.unwrap();
    store.write(&id.to_string(), "a=1;b=2").await.unwrap();

    let err = store.load(&id).await.unwrap_err();
    assert!(matches!(err, session_store::Error::Decode(_)));
}
