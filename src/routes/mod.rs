pub mod rfps;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/rfps", get(rfps::list).post(rfps::create))
        .route(
            "/rfps/{id}",
            get(rfps::get).put(rfps::update).delete(rfps::delete),
        )
}
