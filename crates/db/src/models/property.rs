//! Property read model.
//!
//! Properties are managed elsewhere in the back-office; onboarding only
//! reads them and, in the owner flow, claims `owner_id`.

use inmo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::catalog::CurrencyType;

/// A row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: DbId,
    pub title: String,
    pub address: Option<String>,
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub owner_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// The property a tenant is currently renting, enriched with the contract
/// currency when financial terms were recorded.
#[derive(Debug, Clone, Serialize)]
pub struct RentedProperty {
    pub property: Property,
    pub currency: Option<CurrencyType>,
}
