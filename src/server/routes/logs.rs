//! Log endpoints

use crate::core::models::NewLog;
use crate::core::router::{RouteContext, RouteRequest, RouteResponse};
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

/// `GET /logs`
pub async fn list_logs(_req: RouteRequest, ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    let logs = ctx.state().store().list_logs().await?;
    RouteResponse::json(&logs)
}

/// `POST /logs`
///
/// The owner is looked up by `device_id`. A missing or malformed
/// `timestamp` is replaced by the time of upload.
pub async fn create_log(req: RouteRequest, ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    let new_log: NewLog = req.json()?;
    let store = ctx.state().store();

    let user = store.find_user(&new_log.device_id).await?.ok_or_else(|| {
        GatewayError::not_found(format!("No user with device ID {}", new_log.device_id))
    })?;

    let record = store.insert_log(new_log.into_log(user.user_id)).await?;
    RouteResponse::json(&record)
}

/// `GET /logs/{device_id}`
pub async fn device_logs(_req: RouteRequest, ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    let device_id = ctx.param("device_id")?;
    let store = ctx.state().store();

    let user = store.find_user(device_id).await?.ok_or_else(|| {
        GatewayError::not_found(format!("No user with device ID {}", device_id))
    })?;

    let logs = store.logs_for_user(user.user_id).await?;
    RouteResponse::json(&logs)
}
