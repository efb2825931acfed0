#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::{ColumnTrait, ConnectOptions, Database, EntityTrait, PaginatorTrait, QueryFilter};
use seaorm_session_records::entity::session;
use seaorm_session_records::{ManualClock, SeaOrmRecordStore, SessionStore, StoreConfig};

pub const MAX_LIFETIME: i64 = 100;

pub async fn sqlite_records() -> SeaOrmRecordStore {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let conn = Database::connect(opt).await.expect("in-memory sqlite");
    SeaOrmRecordStore::new(conn)
}

pub async fn sqlite_store(clock: Arc<ManualClock>) -> SessionStore {
    let config = StoreConfig::default().with_max_lifetime_seconds(MAX_LIFETIME);
    let store = SessionStore::new(sqlite_records().await, config).with_clock(clock);
    store.start().await.expect("store starts");
    store
}

pub async fn record(store: &SessionStore, session_id: &str) -> Option<session::Model> {
    session::Entity::find()
        .filter(session::Column::SessionId.eq(session_id))
        .one(store.records().connection())
        .await
        .expect("query records")
}

pub async fn record_count(store: &SessionStore) -> u64 {
    session::Entity::find()
        .count(store.records().connection())
        .await
        .expect("count records")
}
