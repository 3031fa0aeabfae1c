use actix_web::web;

pub mod cards;
pub mod events;
pub mod health;
pub mod rounds;

/// Configure application routes for the server and for tests.
///
/// Tests register the same paths through here so endpoint behavior is
/// exercised exactly as production serves it.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Event routes: /api/events
    cfg.service(web::scope("/api/events").configure(events::configure_routes));

    // Round routes: /api/rounds/**
    cfg.service(web::scope("/api/rounds").configure(rounds::configure_routes));

    // Card routes: /api/cards/**
    cfg.service(web::scope("/api/cards").configure(cards::configure_routes));
}
