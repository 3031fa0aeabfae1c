//! Event listing routes.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::repos::cards as cards_repo;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct EventsResponse {
    events: Vec<String>,
}

/// GET /api/events
///
/// Distinct event names that currently have cards in the store.
async fn list_events(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let events = cards_repo::list_events(&app_state.db).await?;
    Ok(HttpResponse::Ok().json(EventsResponse { events }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_events));
}
