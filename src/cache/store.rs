use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::paths;

/// Fetched translations stay valid for a day.
pub const TRANSLATION_MAX_AGE: Duration = Duration::from_secs(60 * 60 * 24);

/// Disk-backed response cache shared across invocations.
///
/// Each launch is a short-lived process, so nothing is held in memory:
/// every lookup opens the database, and entries are immutable once written.
/// Staleness is checked at read time; expired rows are simply overwritten by
/// the next `INSERT OR REPLACE`, never actively evicted.
#[derive(Debug, Clone)]
pub struct CacheStore {
    db_path: PathBuf,
}

impl CacheStore {
    pub fn new() -> Result<Self> {
        let cache_dir = paths::cache_dir();

        std::fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        let db_path = cache_dir.join("responses.db");
        let store = Self { db_path };

        store.init_db()?;

        Ok(store)
    }

    /// Test-only constructor bypassing the XDG cache directory.
    #[cfg(test)]
    pub(crate) fn with_db_path(db_path: PathBuf) -> Result<Self> {
        let store = Self { db_path };
        store.init_db()?;
        Ok(store)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS responses (
                cache_key TEXT PRIMARY KEY,
                payload TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )",
            [],
        )
        .context("Failed to create responses table")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    /// Returns the cached value for `key` if it is younger than `ttl`,
    /// otherwise runs `compute` exactly once, stores its result with a fresh
    /// timestamp, and returns it.
    ///
    /// A failing `compute` stores nothing, so the next lookup retries.
    pub async fn get_or_compute<F, Fut>(&self, key: &str, ttl: Duration, compute: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        if let Some(payload) = self.get_fresh(key, ttl)? {
            return Ok(payload);
        }

        let payload = compute().await?;
        self.put(key, &payload)?;
        Ok(payload)
    }

    fn get_fresh(&self, key: &str, ttl: Duration) -> Result<Option<String>> {
        let conn = self.connect()?;

        let mut stmt =
            conn.prepare("SELECT payload, created_at FROM responses WHERE cache_key = ?1")?;

        let row: Option<(String, i64)> = stmt
            .query_row([key], |row| Ok((row.get(0)?, row.get(1)?)))
            .ok();

        Ok(row.and_then(|(payload, created_at)| {
            let age = unix_now().saturating_sub(created_at);
            (age < ttl.as_secs() as i64).then_some(payload)
        }))
    }

    fn put(&self, key: &str, payload: &str) -> Result<()> {
        self.put_at(key, payload, unix_now())
    }

    // INSERT OR REPLACE is a single statement, so a racing sibling process
    // sees either the old row or the new one, never a torn entry.
    fn put_at(&self, key: &str, payload: &str, created_at: i64) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO responses (cache_key, payload, created_at)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![key, payload, created_at],
        )
        .context("Failed to insert response into cache")?;

        Ok(())
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    fn create_test_store(temp_dir: &TempDir) -> CacheStore {
        CacheStore::with_db_path(temp_dir.path().join("responses.db")).unwrap()
    }

    #[tokio::test]
    async fn test_miss_computes_once_and_stores() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let calls = AtomicUsize::new(0);

        let value = store
            .get_or_compute("key", TRANSLATION_MAX_AGE, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("[\"hola\"]".to_string())
            })
            .await
            .unwrap();

        assert_eq!(value, "[\"hola\"]");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            store.get_fresh("key", TRANSLATION_MAX_AGE).unwrap(),
            Some("[\"hola\"]".to_string())
        );
    }

    #[tokio::test]
    async fn test_hit_within_ttl_skips_compute() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value = store
                .get_or_compute("key", TRANSLATION_MAX_AGE, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("[\"hola\"]".to_string())
                })
                .await
                .unwrap();
            assert_eq!(value, "[\"hola\"]");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_recomputes() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let two_days_ago = unix_now() - 2 * 24 * 60 * 60;
        store.put_at("key", "[\"stale\"]", two_days_ago).unwrap();

        let calls = AtomicUsize::new(0);
        let value = store
            .get_or_compute("key", TRANSLATION_MAX_AGE, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("[\"fresh\"]".to_string())
            })
            .await
            .unwrap();

        assert_eq!(value, "[\"fresh\"]");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_always_recomputes() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            store
                .get_or_compute("key", Duration::ZERO, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("value".to_string())
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_compute_stores_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let result = store
            .get_or_compute("key", TRANSLATION_MAX_AGE, || async {
                anyhow::bail!("network unreachable")
            })
            .await;
        assert!(result.is_err());

        assert_eq!(store.get_fresh("key", TRANSLATION_MAX_AGE).unwrap(), None);
    }

    #[tokio::test]
    async fn test_distinct_keys_do_not_collide() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.put("a", "first").unwrap();
        store.put("b", "second").unwrap();

        assert_eq!(
            store.get_fresh("a", TRANSLATION_MAX_AGE).unwrap(),
            Some("first".to_string())
        );
        assert_eq!(
            store.get_fresh("b", TRANSLATION_MAX_AGE).unwrap(),
            Some("second".to_string())
        );
    }
}
