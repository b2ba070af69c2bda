//! Database module: the local character store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `create.rs`: write payloads accepted by the actor
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `actor.rs`: the actor owning the connection pool, plus its cloneable handle

pub mod actor;
pub mod create;
pub mod models;
pub mod schema;

pub use actor::{DbActorHandle, DbSettings, spawn};
pub use create::CharacterCreate;
pub use models::DbCharacter;
pub use schema::SQLITE_INIT;
