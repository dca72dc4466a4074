use std::sync::Arc;

use catalog::Catalog;
use tokio::task::spawn_blocking;
use tracing::warn;

use crate::{error::AppError, state::State};

/// Never fails, a panicked load degrades to an empty catalog.
pub async fn load_catalog(state: Arc<State>) -> Arc<Catalog> {
    spawn_blocking(move || state.index.ensure_loaded())
        .await
        .unwrap_or_else(|e| {
            warn!("Catalog load failed: {e}");
            Arc::default()
        })
}

pub async fn rebuild_catalog(state: Arc<State>) -> Result<Arc<Catalog>, AppError> {
    spawn_blocking(move || state.index.rebuild())
        .await
        .map_err(|e| AppError::InternalError(Box::new(e)))
}
