//! User endpoints

use crate::core::models::{NewUser, UserPatch};
use crate::core::router::{RouteContext, RouteRequest, RouteResponse};
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::http::StatusCode;
use serde_json::Value;
use tracing::info;

fn unknown_device(device_id: &str) -> GatewayError {
    GatewayError::not_found(format!("No user with device ID {}", device_id))
}

/// `GET /users`
pub async fn list_users(_req: RouteRequest, ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    let users = ctx.state().store().list_users().await?;
    RouteResponse::json(&users)
}

/// `POST /users`
///
/// A duplicate token or device ID is answered with an explanatory plain-text
/// message rather than an error status.
pub async fn create_user(req: RouteRequest, ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    let new_user: NewUser = req.json()?;

    match ctx.state().store().insert_user(new_user).await {
        Ok(user) => {
            info!(device_id = %user.device_id, "User created");
            RouteResponse::json(&user)
        }
        Err(GatewayError::Conflict(message)) => Ok(RouteResponse::text(message)),
        Err(e) => Err(e),
    }
}

/// `GET /users/{device_id}`
pub async fn get_user(_req: RouteRequest, ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    let device_id = ctx.param("device_id")?;
    let user = ctx
        .state()
        .store()
        .find_user(device_id)
        .await?
        .ok_or_else(|| unknown_device(device_id))?;
    RouteResponse::json(&user)
}

/// `PATCH /users/{device_id}`
pub async fn update_user(req: RouteRequest, ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    let device_id = ctx.param("device_id")?;
    let patch = UserPatch::from_json(&req.json::<Value>()?);

    let user = ctx
        .state()
        .store()
        .update_user(device_id, patch)
        .await?
        .ok_or_else(|| unknown_device(device_id))?;
    RouteResponse::json(&user)
}

/// `PUT /users/{device_id}`
pub async fn replace_user(req: RouteRequest, ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    let device_id = ctx.param("device_id")?;
    let replacement: NewUser = req.json()?;

    let user = ctx
        .state()
        .store()
        .replace_user(device_id, replacement)
        .await?
        .ok_or_else(|| unknown_device(device_id))?;
    RouteResponse::json(&user)
}

/// `DELETE /users/{device_id}`
pub async fn delete_user(_req: RouteRequest, ctx: RouteContext<AppState>) -> Result<RouteResponse> {
    let device_id = ctx.param("device_id")?;

    if !ctx.state().store().delete_user(device_id).await? {
        return Err(unknown_device(device_id));
    }
    info!(device_id, "User deleted");
    Ok(RouteResponse::empty(StatusCode::OK))
}

/// `DELETE /users`, which also drops every log
pub async fn delete_all_users(
    _req: RouteRequest,
    ctx: RouteContext<AppState>,
) -> Result<RouteResponse> {
    ctx.state().store().delete_all_users().await?;
    info!("All users deleted");
    Ok(RouteResponse::empty(StatusCode::OK))
}
