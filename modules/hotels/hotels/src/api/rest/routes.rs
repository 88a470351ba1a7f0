use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Extension, Router};

use crate::api::rest::handlers;
use crate::auth::{require_auth, TokenValidator};
use crate::domain::service::HotelsService;

/// Hotel routes sit behind `require_auth`; `/health` and `/openapi.json` do not.
pub fn register_routes(
    router: Router,
    service: Arc<HotelsService>,
    validator: Arc<dyn TokenValidator>,
    enable_docs: bool,
) -> Router {
    let hotels = Router::new()
        .route("/hotels", get(handlers::list_hotels))
        .route("/hotels/{hotel_id}", get(handlers::get_hotel_rooms))
        .route_layer(middleware::from_fn_with_state(validator, require_auth))
        .layer(Extension(service));

    let mut router = router
        .merge(hotels)
        .route("/health", get(handlers::health));

    if enable_docs {
        router = router.route("/openapi.json", get(handlers::openapi));
    }

    router
}
