//! HTTP route handlers.

use std::path::Path as FsPath;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::RouteNo;
use crate::table::{Overview, QueryError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/search", get(search))
        .route("/stop/:stop_name", get(stop_info))
        .route("/route/:route_no", get(route_info))
        .route("/api/overview", get(api_overview))
        .route("/api/stop/:stop_name", get(api_stop))
        .route("/api/route/:route_no", get(api_route))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Path of the page for `stop_name`, percent-encoded.
pub fn stop_path(stop_name: &str) -> String {
    format!("/stop/{}", urlencoding::encode(stop_name))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with stop search and route list.
async fn index_page(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate::from(state.table.list_overview())
}

/// Redirect the search form to the stop page, or home if nothing was typed.
async fn search(Query(req): Query<SearchRequest>) -> Redirect {
    match req.stop_name.as_deref() {
        Some(name) if !name.is_empty() => Redirect::to(&stop_path(name)),
        _ => Redirect::to("/"),
    }
}

/// Route cards for every route serving a stop.
async fn stop_info(
    State(state): State<AppState>,
    Path(stop_name): Path<String>,
) -> Result<Response, AppError> {
    match state.table.find_routes_for_stop(&stop_name) {
        Ok(routes) => {
            let page = StopInfoTemplate::new(&stop_name, &routes);
            Ok(render(&page)?.into_response())
        }
        Err(e) => not_found_fragment(&e),
    }
}

/// Redirect a route number to the page of its first stop.
async fn route_info(
    State(state): State<AppState>,
    Path(route_no): Path<String>,
) -> Result<Response, AppError> {
    let Ok(route) = RouteNo::parse(&route_no) else {
        return not_found_fragment(&format!("No data found for Route {route_no}"));
    };

    match state.table.resolve_route_to_stop(route) {
        Ok(stop_name) => Ok(Redirect::to(&stop_path(&stop_name)).into_response()),
        Err(e) => not_found_fragment(&e),
    }
}

/// Distinct stops and routes as JSON.
async fn api_overview(State(state): State<AppState>) -> Json<Overview> {
    Json(state.table.list_overview())
}

/// Routes serving a stop as JSON.
async fn api_stop(
    State(state): State<AppState>,
    Path(stop_name): Path<String>,
) -> Result<Json<StopRoutesResponse>, AppError> {
    let routes = state.table.find_routes_for_stop(&stop_name)?;
    Ok(Json(StopRoutesResponse { stop_name, routes }))
}

/// First stop of a route as JSON.
async fn api_route(
    State(state): State<AppState>,
    Path(route_no): Path<String>,
) -> Result<Json<RouteStopResponse>, AppError> {
    let route = RouteNo::parse(&route_no).map_err(|e| AppError::BadRequest {
        message: format!("{e}: {route_no:?}"),
    })?;
    let stop_name = state.table.resolve_route_to_stop(route)?;

    Ok(Json(RouteStopResponse {
        route_no: route,
        stop_name,
    }))
}

/// Render a template, mapping failures to an internal error.
fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Inline not-found message with a 404 status.
fn not_found_fragment(message: &impl ToString) -> Result<Response, AppError> {
    let message = message.to_string();
    debug!(%message, "no match");

    let html = render(&NotFoundTemplate { message })?;
    Ok((StatusCode::NOT_FOUND, html).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::NotFound { message } => {
                debug!(%message, "not found");
                (StatusCode::NOT_FOUND, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
