use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::controllers::paste;
use crate::error::ApiError;
use crate::paste_id::PasteId;
use crate::types::api::{PasteQuery, Usage};
use crate::types::FetchResult;
use crate::upstream::Upstream;
use crate::App;

pub async fn run(app: App) -> anyhow::Result<()> {
    let addr = app.config.server.socket_addr();
    info!("listening on {addr}, relaying to {}", app.config.upstream.base_url);

    axum::Server::bind(&addr)
        .serve(router(app).into_make_service())
        .await?;

    Ok(())
}

pub fn router(app: App) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/pastefy", get(get_paste).post(post_paste))
        .route("/api/pastefy/raw/:paste_id", get(get_paste_raw))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

async fn index() -> Json<Usage> {
    Json(Usage::default())
}

async fn get_paste(
    State(upstream): State<Upstream>,
    RawQuery(query): RawQuery,
) -> crate::ApiResult<Response> {
    let query = PasteQuery::from_query_string(query.as_deref().unwrap_or_default());
    lookup(&upstream, query).await
}

async fn post_paste(State(upstream): State<Upstream>, body: Bytes) -> crate::ApiResult<Response> {
    let query = parse_json_query(&body)?;
    lookup(&upstream, query).await
}

async fn get_paste_raw(
    State(upstream): State<Upstream>,
    paste_id: Result<Path<String>, PathRejection>,
) -> crate::ApiResult<Response> {
    let Path(paste_id) = paste_id.map_err(|_| ApiError::InvalidPasteId)?;

    let response = match paste::fetch(&upstream, &PasteId::unchecked(paste_id)).await {
        FetchResult::Success(paste) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            paste.content,
        )
            .into_response(),
        failure => (StatusCode::NOT_FOUND, Json(failure)).into_response(),
    };
    Ok(response)
}

async fn lookup(upstream: &Upstream, query: PasteQuery) -> crate::ApiResult<Response> {
    let id = PasteId::from_request(query.url.as_deref(), query.id.as_deref())?;
    let result = paste::fetch(upstream, &id).await;

    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(result)).into_response())
}

/// Read lookup parameters from a JSON body. Anything that isn't a non-empty object of strings
/// counts as no data.
fn parse_json_query(body: &[u8]) -> crate::ApiResult<PasteQuery> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::NoJsonData)?;
    match &value {
        Value::Object(fields) if !fields.is_empty() => {
            serde_json::from_value(value).map_err(|_| ApiError::NoJsonData)
        }
        _ => Err(ApiError::NoJsonData),
    }
}
