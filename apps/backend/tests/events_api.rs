mod common;

use actix_web::{test, web, App};
use bingo_backend::middleware::request_trace::RequestTrace;
use bingo_backend::routes;
use bingo_backend::services::provisioning::{provision_event, ProvisionSpec};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

#[actix_web::test]
async fn events_list_is_empty_without_cards() {
    let state = common::test_state().await;
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/events").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body = common::read_json(resp).await;
    assert_eq!(body, json!({ "events": [] }));
}

#[actix_web::test]
async fn events_list_names_each_provisioned_event_once() {
    let state = common::test_state().await;
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for event in ["Festa Junina", "Arraial"] {
        provision_event(&state.db, &mut rng, &ProvisionSpec::new(event, 2, 2))
            .await
            .expect("provision event");
    }

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/events").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body = common::read_json(resp).await;
    // Four cards per event, one name each, alphabetical
    assert_eq!(body, json!({ "events": ["Arraial", "Festa Junina"] }));
}
