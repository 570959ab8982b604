//! Route table of the gateway
//!
//! Every endpoint is registered here, once. The HTTP server serves this
//! table for external traffic and the batch endpoint dispatches its
//! sub-requests through the same table.

pub mod batch;
pub mod health;
pub mod info;
pub mod logs;
pub mod users;

use crate::core::router::{AppRouter, Router};
use crate::server::state::AppState;

/// Build the gateway's route table
pub fn build_router() -> Router<AppState> {
    Router::new()
        .get("/health", health::health_check)
        .get("/users", users::list_users)
        .post("/users", users::create_user)
        .delete("/users", users::delete_all_users)
        .get("/users/{device_id}", users::get_user)
        .patch("/users/{device_id}", users::update_user)
        .put("/users/{device_id}", users::replace_user)
        .delete("/users/{device_id}", users::delete_user)
        .get("/logs", logs::list_logs)
        .post("/logs", logs::create_log)
        .get("/logs/{device_id}", logs::device_logs)
        .get("/info", info::info)
        .post("/notification", info::notification)
        .post("/batch", batch::batch)
}

/// The route table bound to `state`
pub fn app_router(state: AppState) -> AppRouter<AppState> {
    build_router().with_state(state)
}
