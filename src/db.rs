use std::sync::Arc;

use tokio::sync::OnceCell;

#[derive(Clone)]
pub struct Database {
    pub pool: sqlx::PgPool,
}

impl Database {
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let pool = sqlx::PgPool::connect(url).await?;

        Ok(Database { pool })
    }
}

/// Connection slot filled once the background connect succeeds.
#[derive(Clone, Default)]
pub struct Connection {
    inner: Arc<OnceCell<Database>>,
}

impl Connection {
    pub fn get(&self) -> Option<&Database> {
        self.inner.get()
    }

    pub fn is_connected(&self) -> bool {
        self.inner.initialized()
    }

    /// Returns false, dropping `database`, when a pool is already stored.
    fn store(&self, database: Database) -> bool {
        self.inner.set(database).is_ok()
    }

    /// Connects once in the background. Failures are only logged and never
    /// retried; the server keeps running without a database.
    pub fn open(&self, url: Option<String>) -> tokio::task::JoinHandle<()> {
        let connection = self.clone();

        tokio::spawn(async move {
            let Some(url) = url else {
                log::error!("database: no connection string configured");
                return;
            };

            match Database::connect(&url).await {
                Ok(database) => {
                    if connection.store(database) {
                        log::info!("Connected to database ({url})");
                    } else {
                        log::warn!("database: already connected, dropping pool for {url}");
                    }
                }
                Err(e) => log::error!("database: {e}"),
            }
        })
    }
}
