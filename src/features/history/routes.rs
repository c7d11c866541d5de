use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::history::handlers::{self, HistoryState};

/// Create routes for the history feature
pub fn routes(state: HistoryState) -> Router {
    Router::new()
        .route(
            "/api/history",
            get(handlers::list_history)
                .post(handlers::record_history)
                .delete(handlers::clear_history),
        )
        .route("/api/history/{nik}", delete(handlers::delete_history_entry))
        .with_state(state)
}
