use actix_web::{web, App, HttpServer};
use bingo_backend::config::db::DbProfile;
use bingo_backend::infra::state::build_state;
use bingo_backend::middleware::cors::cors_middleware;
use bingo_backend::middleware::request_trace::RequestTrace;
use bingo_backend::routes;
use bingo_backend::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    tracing::info!(host = %host, port, "starting bingo backend");

    let app_state = match build_state().with_profile(DbProfile::Prod).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
