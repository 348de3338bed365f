//! HTTP surface. Every route answers 200 with a JSON envelope; failures are
//! `{"ok": false, "error": ...}`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use imm_core::advisor::{filter, growth, live, scorer, AdvisorError};
use imm_core::quote::QuoteProvider;

#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<dyn QuoteProvider>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/longterm", post(longterm))
        .route("/stockadvisor", post(stock_advisor))
        .route("/stockpicks", post(stock_picks))
        .route("/stockpicks-live", post(stock_picks_live))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(Serialize)]
struct Success<T> {
    ok: bool,
    #[serde(flatten)]
    body: T,
}

#[derive(Serialize)]
struct Failure {
    ok: bool,
    error: String,
}

fn envelope<T: Serialize>(route: &'static str, res: Result<T, AdvisorError>) -> Response {
    match res {
        Ok(body) => Json(Success { ok: true, body }).into_response(),
        Err(e) => {
            tracing::info!(route, error = %e, "request not served");
            Json(Failure {
                ok: false,
                error: e.to_string(),
            })
            .into_response()
        }
    }
}

/// Unreadable bodies are handled as empty ones so they fail field validation.
fn body_or_default<T: Default>(route: &'static str, body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(v)) => v,
        Err(rejection) => {
            tracing::debug!(route, error = %rejection, "unreadable request body");
            T::default()
        }
    }
}

#[derive(Serialize)]
struct Health {
    ok: bool,
    message: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        message: "InvestMyMillion API is live.",
    })
}

async fn longterm(body: Result<Json<growth::GrowthRequest>, JsonRejection>) -> Response {
    let req = body_or_default("/longterm", body);
    envelope("/longterm", growth::project(req))
}

async fn stock_advisor(body: Result<Json<scorer::AdvisorRequest>, JsonRejection>) -> Response {
    let req = body_or_default("/stockadvisor", body);
    envelope("/stockadvisor", scorer::recommend(req))
}

async fn stock_picks(body: Result<Json<filter::PicksRequest>, JsonRejection>) -> Response {
    let req = body_or_default("/stockpicks", body);
    envelope("/stockpicks", filter::pick(req))
}

async fn stock_picks_live(
    State(state): State<AppState>,
    body: Result<Json<live::LiveRequest>, JsonRejection>,
) -> Response {
    let req = body_or_default("/stockpicks-live", body);
    envelope(
        "/stockpicks-live",
        live::pick_live(req, state.quotes.as_ref()).await,
    )
}
