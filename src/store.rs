use sqlx::SqlitePool;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct GroupSwitch {
    pub id: i64,
    pub name: String,
    pub stat: String,
}

/// Per-group enable switch, one row per group that was ever toggled.
/// A missing row reads as off.
#[derive(Clone)]
pub struct SwitchStore {
    pool: SqlitePool,
}

impl SwitchStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS group_switch (
                id INTEGER PRIMARY KEY,
                name VARCHAR(256) NOT NULL,
                stat VARCHAR(5) NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get(&self, group_id: i64) -> Result<Option<GroupSwitch>> {
        let row = sqlx::query_as::<_, GroupSwitch>(
            "SELECT id, name, stat FROM group_switch WHERE id = ?",
        )
        .bind(group_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn is_enabled(&self, group_id: i64) -> Result<bool> {
        let row = self.get(group_id).await?;
        Ok(row.map_or(false, |row| row.stat == SwitchState::On.as_str()))
    }

    // A single upsert statement, so concurrent toggles for the same group
    // can never insert a second row. The stored name is refreshed on every
    // write.
    pub async fn set(&self, group_id: i64, name: &str, state: SwitchState) -> Result {
        sqlx::query(
            "INSERT INTO group_switch (id, name, stat) VALUES (?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, stat = excluded.stat",
        )
        .bind(group_id)
        .bind(name)
        .bind(state.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SwitchStore {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let store = SwitchStore::new(pool);
        store.ensure_schema().await.unwrap();
        store
    }

    #[tokio::test]
    async fn missing_rows_read_as_off() {
        let store = memory_store().await;
        assert!(store.get(1).await.unwrap().is_none());
        assert!(!store.is_enabled(1).await.unwrap());
    }

    #[tokio::test]
    async fn upsert_keeps_a_single_row_per_group() {
        let store = memory_store().await;
        store.set(1, "one", SwitchState::On).await.unwrap();
        store.set(1, "one", SwitchState::On).await.unwrap();
        store.set(1, "one", SwitchState::Off).await.unwrap();

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM group_switch")
            .fetch_one(&store.pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
        assert!(!store.is_enabled(1).await.unwrap());
    }

    #[tokio::test]
    async fn upsert_refreshes_the_stored_name() {
        let store = memory_store().await;
        store.set(1, "old name", SwitchState::On).await.unwrap();
        store.set(1, "new name", SwitchState::On).await.unwrap();

        let row = store.get(1).await.unwrap().unwrap();
        assert_eq!(row.name, "new name");
        assert_eq!(row.stat, "on");
    }

    #[tokio::test]
    async fn groups_do_not_share_switches() {
        let store = memory_store().await;
        store.set(1, "one", SwitchState::On).await.unwrap();

        assert!(store.is_enabled(1).await.unwrap());
        assert!(!store.is_enabled(2).await.unwrap());
    }
}
