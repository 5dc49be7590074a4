//! Route table for the issue resource.
//!
//! | Verb | Path | Command |
//! |------|------|---------|
//! | GET | `/api/issues/:project` | `ListIssues` |
//! | POST | `/api/issues/:project` | `CreateIssue` |
//! | PUT | `/api/issues/:project` | `UpdateIssue` |
//! | DELETE | `/api/issues/:project` | `DeleteIssue` |
//!
//! Declared errors are sent as JSON bodies with status 200. A failed list
//! lookup is the one exception and is sent with 404.

use axum::extract::{DefaultBodyLimit, Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracker_executor::{Command, Error, Executor, Output};

use crate::body::{parse_query, RequestFields};
use crate::config::TrackerConfig;

/// Build the application router over an executor.
pub fn router(executor: Executor, config: &TrackerConfig) -> Router {
    let mut router = Router::new()
        .route(
            "/api/issues/:project",
            get(list_issues)
                .post(create_issue)
                .put(update_issue)
                .delete(delete_issue),
        )
        .fallback(not_found)
        .with_state(executor)
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    // Add middleware
    router = router.layer(TraceLayer::new_for_http());

    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

async fn list_issues(
    State(executor): State<Executor>,
    Path(project): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    respond(executor.execute(Command::ListIssues {
        project,
        query: parse_query(query.as_deref()),
    }))
}

async fn create_issue(
    State(executor): State<Executor>,
    Path(project): Path<String>,
    RequestFields(fields): RequestFields,
) -> Response {
    respond(executor.execute(Command::CreateIssue { project, fields }))
}

async fn update_issue(
    State(executor): State<Executor>,
    Path(project): Path<String>,
    RequestFields(fields): RequestFields,
) -> Response {
    respond(executor.execute(Command::UpdateIssue { project, fields }))
}

async fn delete_issue(
    State(executor): State<Executor>,
    Path(project): Path<String>,
    RequestFields(fields): RequestFields,
) -> Response {
    respond(executor.execute(Command::DeleteIssue { project, fields }))
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" }))).into_response()
}

/// Map a command result to its HTTP response.
fn respond(result: tracker_executor::Result<Output>) -> Response {
    match result {
        Ok(output) => Json(output.to_body()).into_response(),
        Err(err) => (status_for(&err), Json(err.to_body())).into_response(),
    }
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::LookupFailed { .. } => StatusCode::NOT_FOUND,
        Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    }
}
