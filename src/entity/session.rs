//! Session record entity model for Sea-ORM database interaction.
//!
//! This module defines the schema of one persisted session record. The table
//! name below is the default one; stores configured with another collection
//! name use the same columns under that name.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing one session record.
///
/// # Database Schema
///
/// | Column     | Type                     | Description                              |
/// |------------|--------------------------|------------------------------------------|
/// | id         | BIGINT (Primary Key)     | Store-assigned row identifier            |
/// | session_id | VARCHAR (Unique)         | Externally visible session key           |
/// | data       | TEXT                     | Serialized session payload               |
/// | expires_at | BIGINT                   | Unix timestamp after which it is dead    |
/// | updated_at | BIGINT                   | Unix timestamp of the last write         |
/// | user_id    | VARCHAR (Nullable)       | Identity the session belongs to, if any  |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// Row identifier assigned by the database. This is not the session id.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// The session identifier carried by the client, unique across all rows.
    #[sea_orm(unique)]
    pub session_id: String,

    /// The opaque session payload.
    ///
    /// An empty string means either that nothing was written yet or that the
    /// session expired; readers treat both the same as an absent record.
    #[sea_orm(column_type = "Text")]
    pub data: String,

    /// Unix timestamp (seconds) at which the session stops being valid.
    ///
    /// Refreshed to `now + max_lifetime` on every create and every update.
    pub expires_at: i64,

    /// Unix timestamp (seconds) of the last write.
    pub updated_at: i64,

    /// Optional user identity, used to find every session of one user.
    pub user_id: Option<String>,
}

/// This entity doesn't have any relations to other entities.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
