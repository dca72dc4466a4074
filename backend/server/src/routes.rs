use std::sync::Arc;

use axum::{
    Json,
    extract::{self, Query, rejection::QueryRejection},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::AppError,
    expiry::{ExpiryReport, parse_date, report},
    search::{SearchResult, search},
    state::State,
    utils::{load_catalog, rebuild_catalog},
};

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct ExpiryParams {
    pub date: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct FoodsCount {
    pub count: usize,
}

pub async fn search_handler(
    extract::State(state): extract::State<Arc<State>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Json<Vec<SearchResult>> {
    let query = match params {
        Ok(Query(params)) => params.q,
        Err(e) => {
            debug!("Unreadable search params, browsing instead: {e}");
            None
        }
    };

    let catalog = load_catalog(state).await;

    Json(search(query.as_deref(), &catalog))
}

pub async fn foods_count_handler(
    extract::State(state): extract::State<Arc<State>>,
) -> Json<FoodsCount> {
    let catalog = load_catalog(state).await;

    Json(FoodsCount {
        count: catalog.len(),
    })
}

pub async fn rebuild_handler(
    extract::State(state): extract::State<Arc<State>>,
) -> Result<Json<FoodsCount>, AppError> {
    let catalog = rebuild_catalog(state).await?;
    info!("Catalog rebuilt on request: {} foods", catalog.len());

    Ok(Json(FoodsCount {
        count: catalog.len(),
    }))
}

pub async fn expiry_handler(
    params: Result<Query<ExpiryParams>, QueryRejection>,
) -> Result<Json<ExpiryReport>, AppError> {
    let Query(params) = params.map_err(|_| AppError::MalformedPayload)?;
    let expiration = parse_date(&params.date).ok_or(AppError::MalformedPayload)?;

    Ok(Json(report(expiration, Local::now().date_naive())))
}
