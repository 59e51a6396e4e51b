pub mod clients;
pub mod health;
pub mod onboarding;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /onboarding/leads     create a lead with an optional consultation
/// /onboarding/owners    create an owner, optionally claiming a property
/// /onboarding/tenants   create a tenant with an optional contract chain
///
/// /clients              list clients
/// /clients/{id}         get one client
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(onboarding::router())
        .merge(clients::router())
}
