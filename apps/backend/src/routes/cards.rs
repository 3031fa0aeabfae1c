//! Card mutation routes.

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::repos::cards as cards_repo;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct MarkUsedResponse {
    status: &'static str,
    id: String,
}

/// POST /api/cards/{id}/use
///
/// Marks a card as used so it no longer appears when a round starts.
async fn mark_used(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let card_id = path.into_inner();
    cards_repo::mark_used(&app_state.db, &card_id).await?;
    info!(card_id = %card_id, "card marked as used");

    Ok(HttpResponse::Ok().json(MarkUsedResponse {
        status: "success",
        id: card_id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{id}/use", web::post().to(mark_used));
}
