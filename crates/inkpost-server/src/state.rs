use axum::extract::FromRef;
use inkpost_core::errors::{ExError, ExErrorKind};
use inkpost_store::db::create_pool;
use inkpost_store::errors::from_pool;
use inkpost_store::migrations::apply_migrations;
use inkpost_store::DbPool;
use rusqlite::Connection;
use std::sync::Arc;

use crate::configuration::Settings;
use crate::error::AppError;
use crate::flash::FlashKey;
use crate::templates::Templates;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub templates: Arc<Templates>,
    pub flash_key: FlashKey,
}

impl AppState {
    pub fn new(pool: DbPool, templates: Templates, flash_key: FlashKey) -> Self {
        Self {
            pool,
            templates: Arc::new(templates),
            flash_key,
        }
    }

    /// Open the pool, bring the schema up to date and parse the templates
    ///
    /// # Errors
    /// Fails when the database cannot be opened or migrated, or a template
    /// does not parse.
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let pool = create_pool(&settings.database.path, settings.database.pool_size)?;
        {
            let mut conn = pool.get().map_err(from_pool)?;
            apply_migrations(&mut conn)?;
        }

        let templates = Templates::new()?;
        let flash_key = FlashKey::new(settings.session.secret_key.expose().as_bytes());

        Ok(Self::new(pool, templates, flash_key))
    }

    /// Run `f` on a pooled connection, off the async executor
    ///
    /// # Errors
    /// Returns whatever `f` returns, a `Persistence` error when no
    /// connection could be checked out, or `Internal` if the blocking task
    /// panicked.
    pub async fn with_conn<T, F>(&self, f: F) -> Result<T, ExError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ExError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(from_pool)?;
            f(&mut conn)
        })
        .await
        .unwrap_or_else(|err| {
            Err(ExError::new(ExErrorKind::Internal)
                .with_op("spawn_blocking")
                .with_message(err.to_string()))
        })
    }
}

impl FromRef<AppState> for FlashKey {
    fn from_ref(state: &AppState) -> Self {
        state.flash_key.clone()
    }
}
