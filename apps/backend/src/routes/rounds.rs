//! Round routes: hand out unused cards and evaluate win conditions.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::services::rounds::{self, CardSubmission, RoundCard};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct StartRoundRequest {
    round: i32,
}

#[derive(Debug, Serialize)]
struct StartRoundResponse {
    status: &'static str,
    cards: Vec<RoundCard>,
}

/// POST /api/rounds/start
///
/// Returns every unused card assigned to the requested round, ordered by
/// sheet then position.
async fn start_round(
    app_state: web::Data<AppState>,
    body: web::Json<StartRoundRequest>,
) -> Result<HttpResponse, AppError> {
    let cards = rounds::start_round(&app_state.db, body.round).await?;
    info!(round = body.round, cards = cards.len(), "round started");

    Ok(HttpResponse::Ok().json(StartRoundResponse {
        status: "success",
        cards,
    }))
}

#[derive(Debug, Deserialize)]
struct CheckWinnersRequest {
    drawn_numbers: Vec<serde_json::Value>,
    cards: Vec<CardSubmission>,
}

/// POST /api/rounds/check
///
/// Evaluates the submitted cards against the drawn numbers. Draw tokens
/// may be numbers or strings; a malformed card grid is skipped rather
/// than failing the request.
async fn check_winners(body: web::Json<CheckWinnersRequest>) -> Result<HttpResponse, AppError> {
    let result = rounds::check_winners(&body.drawn_numbers, &body.cards)?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/start", web::post().to(start_round))
        .route("/check", web::post().to(check_winners));
}
