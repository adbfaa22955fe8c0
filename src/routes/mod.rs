// src/routes/mod.rs
pub mod extract;
pub mod lex;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use lex::{delete_session_handler, get_session_handler, health_handler, send_message_handler};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let lex_routes = Router::new()
        .route("/send-message", post(send_message_handler))
        .route(
            "/session/{session_id}",
            get(get_session_handler).delete(delete_session_handler),
        )
        .route("/health", get(health_handler));

    Router::new()
        .nest("/api/lex", lex_routes)
        .layer(TraceLayer::new_for_http())
}
