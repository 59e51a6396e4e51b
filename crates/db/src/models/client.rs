//! Client entity model and creation DTO.

use inmo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `clients` table.
///
/// `phone` is always the canonical form produced by
/// [`inmo_core::phone::normalize_phone`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub dni: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub rental_interest: bool,
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields for inserting a new client.
///
/// `phone` may arrive in any formatting; the dedup helper canonicalizes it
/// before the row is written.
#[derive(Debug, Clone)]
pub struct CreateClient {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub dni: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub rental_interest: bool,
    pub category_id: DbId,
}
