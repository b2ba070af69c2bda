use crate::config::BasicConfig;
use crate::db::create::CharacterCreate;
use crate::db::models::DbCharacter;
use crate::db::schema::SQLITE_INIT;
use crate::error::HolocronError;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

const CHARACTER_COLUMNS: &str =
    "id, name, height, mass, hair_color, skin_color, eye_color, birth_year, gender, favorite";

#[derive(Debug)]
pub enum DbActorMessage {
    /// Insert a character, or overwrite every non-key field of the row with the same name.
    Upsert(CharacterCreate, RpcReplyPort<Result<i64, HolocronError>>),

    /// Fetch one character by name (case-insensitive).
    GetByName(String, RpcReplyPort<Result<Option<DbCharacter>, HolocronError>>),

    /// Set the favorite flag by name; replies with the affected row count.
    SetFavorite(String, bool, RpcReplyPort<Result<u64, HolocronError>>),

    /// List every character in storage order.
    ListAll(RpcReplyPort<Result<Vec<DbCharacter>, HolocronError>>),

    /// List characters with favorite=1 in storage order.
    ListFavorites(RpcReplyPort<Result<Vec<DbCharacter>, HolocronError>>),

    /// Delete one character by name; replies with the affected row count.
    DeleteByName(String, RpcReplyPort<Result<u64, HolocronError>>),

    /// Delete every character; replies with the affected row count.
    DeleteAll(RpcReplyPort<Result<u64, HolocronError>>),
}

/// Connection settings for the store.
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub database_url: String,
    pub max_connections: u32,
}

impl From<&BasicConfig> for DbSettings {
    fn from(cfg: &BasicConfig) -> Self {
        Self {
            database_url: cfg.database_url.clone(),
            max_connections: cfg.max_connections,
        }
    }
}

/// Cloneable handle to the store. Every operation is one RPC to the actor.
#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn upsert(&self, create: CharacterCreate) -> Result<i64, HolocronError> {
        ractor::call!(self.actor, DbActorMessage::Upsert, create)
            .map_err(|e| HolocronError::ActorError(format!("DbActor Upsert RPC failed: {e}")))?
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<DbCharacter>, HolocronError> {
        ractor::call!(self.actor, DbActorMessage::GetByName, name.to_string()).map_err(|e| {
            HolocronError::ActorError(format!("DbActor GetByName RPC failed: {e}"))
        })?
    }

    pub async fn set_favorite(&self, name: &str, favorite: bool) -> Result<u64, HolocronError> {
        ractor::call!(
            self.actor,
            DbActorMessage::SetFavorite,
            name.to_string(),
            favorite
        )
        .map_err(|e| HolocronError::ActorError(format!("DbActor SetFavorite RPC failed: {e}")))?
    }

    pub async fn list_all(&self) -> Result<Vec<DbCharacter>, HolocronError> {
        ractor::call!(self.actor, DbActorMessage::ListAll)
            .map_err(|e| HolocronError::ActorError(format!("DbActor ListAll RPC failed: {e}")))?
    }

    pub async fn list_favorites(&self) -> Result<Vec<DbCharacter>, HolocronError> {
        ractor::call!(self.actor, DbActorMessage::ListFavorites).map_err(|e| {
            HolocronError::ActorError(format!("DbActor ListFavorites RPC failed: {e}"))
        })?
    }

    pub async fn delete_by_name(&self, name: &str) -> Result<u64, HolocronError> {
        ractor::call!(self.actor, DbActorMessage::DeleteByName, name.to_string()).map_err(|e| {
            HolocronError::ActorError(format!("DbActor DeleteByName RPC failed: {e}"))
        })?
    }

    pub async fn delete_all(&self) -> Result<u64, HolocronError> {
        ractor::call!(self.actor, DbActorMessage::DeleteAll)
            .map_err(|e| HolocronError::ActorError(format!("DbActor DeleteAll RPC failed: {e}")))?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = DbSettings;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        settings: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(settings.database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        // Every in-memory connection is its own database.
        let max_connections = if settings.database_url.contains(":memory:") {
            1
        } else {
            settings.max_connections.max(1)
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!(max_connections, "DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::Upsert(create, reply) => {
                let res = self.upsert(&state.pool, create).await;
                let _ = reply.send(res);
            }
            DbActorMessage::GetByName(name, reply) => {
                let res = self.get_by_name(&state.pool, &name).await;
                let _ = reply.send(res);
            }
            DbActorMessage::SetFavorite(name, favorite, reply) => {
                let res = self.set_favorite(&state.pool, &name, favorite).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ListAll(reply) => {
                let res = self.list(&state.pool, false).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ListFavorites(reply) => {
                let res = self.list(&state.pool, true).await;
                let _ = reply.send(res);
            }
            DbActorMessage::DeleteByName(name, reply) => {
                let res = self.delete_by_name(&state.pool, &name).await;
                let _ = reply.send(res);
            }
            DbActorMessage::DeleteAll(reply) => {
                let res = self.delete_all(&state.pool).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

impl DbActor {
    async fn upsert(&self, pool: &SqlitePool, c: CharacterCreate) -> Result<i64, HolocronError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO characters (
            name, height, mass, hair_color, skin_color, eye_color, birth_year, gender
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(name) DO UPDATE SET
            name = excluded.name,
            height = excluded.height,
            mass = excluded.mass,
            hair_color = excluded.hair_color,
            skin_color = excluded.skin_color,
            eye_color = excluded.eye_color,
            birth_year = excluded.birth_year,
            gender = excluded.gender
        RETURNING id
        "#,
        )
        .bind(c.name)
        .bind(c.height)
        .bind(c.mass)
        .bind(c.hair_color)
        .bind(c.skin_color)
        .bind(c.eye_color)
        .bind(c.birth_year)
        .bind(c.gender)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    async fn get_by_name(
        &self,
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<DbCharacter>, HolocronError> {
        let row = sqlx::query_as::<_, DbCharacter>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM characters WHERE name = ?"
        ))
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn set_favorite(
        &self,
        pool: &SqlitePool,
        name: &str,
        favorite: bool,
    ) -> Result<u64, HolocronError> {
        let res = sqlx::query("UPDATE characters SET favorite = ? WHERE name = ?")
            .bind(favorite)
            .bind(name)
            .execute(pool)
            .await?;

        Ok(res.rows_affected())
    }

    async fn list(
        &self,
        pool: &SqlitePool,
        favorites_only: bool,
    ) -> Result<Vec<DbCharacter>, HolocronError> {
        let sql = if favorites_only {
            format!("SELECT {CHARACTER_COLUMNS} FROM characters WHERE favorite = 1 ORDER BY id")
        } else {
            format!("SELECT {CHARACTER_COLUMNS} FROM characters ORDER BY id")
        };
        let rows = sqlx::query_as::<_, DbCharacter>(&sql)
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }

    async fn delete_by_name(&self, pool: &SqlitePool, name: &str) -> Result<u64, HolocronError> {
        let res = sqlx::query("DELETE FROM characters WHERE name = ?")
            .bind(name)
            .execute(pool)
            .await?;

        Ok(res.rows_affected())
    }

    async fn delete_all(&self, pool: &SqlitePool) -> Result<u64, HolocronError> {
        let res = sqlx::query("DELETE FROM characters")
            .execute(pool)
            .await?;

        Ok(res.rows_affected())
    }
}

/// Spawn the database actor and return a cloneable handle.
pub async fn spawn(settings: DbSettings) -> Result<DbActorHandle, HolocronError> {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, settings)
        .await
        .map_err(|e| HolocronError::ActorError(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), HolocronError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
