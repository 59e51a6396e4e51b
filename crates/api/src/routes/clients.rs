//! Read handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::{routing::get, Json, Router};

use inmo_core::error::CoreError;
use inmo_core::types::DbId;
use inmo_db::models::client::Client;
use inmo_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/clients
async fn list_clients(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/v1/clients/{id}
async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "client",
            id,
        }))?;
    Ok(Json(client))
}

/// Mount client routes under `/clients`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients))
        .route("/clients/{id}", get(get_client))
}
