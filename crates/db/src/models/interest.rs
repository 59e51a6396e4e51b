//! Client/property interest link model.

use inmo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `client_property_interests` table.
///
/// Interests are non-exclusive: a client may hold many, and a property may
/// interest many clients. One row per (client, property) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientPropertyInterest {
    pub id: DbId,
    pub client_id: DbId,
    pub property_id: DbId,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}
