//! Handlers for the `/onboarding` resource.
//!
//! Thin wrappers: deserialize the input, hand it to the matching
//! orchestrator in `inmo_db::onboarding`, map the outcome to JSON. All
//! transactional behaviour lives in the orchestrators.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use serde::Deserialize;

use inmo_core::types::DbId;
use inmo_db::onboarding::{
    create_lead_with_consultation, create_owner_with_property, create_tenant_with_property,
    LeadInput, LeadOutcome, OwnerInput, OwnerOutcome, TenantInput, TenantOutcome,
};

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /onboarding/tenants`.
///
/// The acting back-office user is carried alongside the tenant fields
/// until an auth layer exists to derive it from the session.
#[derive(Debug, Deserialize)]
pub struct TenantRequest {
    #[serde(flatten)]
    pub fields: TenantInput,
    pub created_by_user_id: DbId,
}

/// POST /api/v1/onboarding/leads
async fn create_lead(
    State(state): State<AppState>,
    Json(input): Json<LeadInput>,
) -> AppResult<(StatusCode, Json<LeadOutcome>)> {
    let outcome = create_lead_with_consultation(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// POST /api/v1/onboarding/owners
async fn create_owner(
    State(state): State<AppState>,
    Json(input): Json<OwnerInput>,
) -> AppResult<(StatusCode, Json<OwnerOutcome>)> {
    let outcome = create_owner_with_property(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// POST /api/v1/onboarding/tenants
async fn create_tenant(
    State(state): State<AppState>,
    Json(input): Json<TenantRequest>,
) -> AppResult<(StatusCode, Json<TenantOutcome>)> {
    let outcome =
        create_tenant_with_property(&state.pool, &input.fields, input.created_by_user_id).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Mount onboarding routes under `/onboarding`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/onboarding/leads", post(create_lead))
        .route("/onboarding/owners", post(create_owner))
        .route("/onboarding/tenants", post(create_tenant))
}
