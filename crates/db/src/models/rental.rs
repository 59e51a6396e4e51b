//! Rental (financial terms) model and DTO.

use inmo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `rentals` table.
///
/// Exists only when a [`crate::models::client_rental::ClientRental`] exists
/// and both a monthly amount and a resolvable currency were supplied.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub id: DbId,
    pub client_rental_id: DbId,
    pub property_id: DbId,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub monthly_amount: i64,
    pub currency_type_id: DbId,
    pub created_by_user_id: DbId,
    pub created_at: Timestamp,
}

/// Fields for inserting a new rental.
#[derive(Debug, Clone)]
pub struct CreateRental {
    pub client_rental_id: DbId,
    pub property_id: DbId,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub monthly_amount: i64,
    pub currency_type_id: DbId,
    pub created_by_user_id: DbId,
}
