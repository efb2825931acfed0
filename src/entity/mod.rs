//! Database entity models for the session record store.
//!
//! The store addresses its table through a configurable name, but the column
//! set is always the one described by [`session::Model`]. The entity is also
//! handy for querying records directly, e.g. from tests or admin tooling.

/// Session record entity model for Sea-ORM database interaction.
pub mod session;
