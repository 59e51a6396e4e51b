//! Client rental (administrative contract link) model and DTO.

use inmo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `client_rentals` table.
///
/// Links a tenant-role client to a property under contract dates. Carries
/// no financial terms; those live in `rentals`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientRental {
    pub id: DbId,
    pub client_id: DbId,
    pub property_id: DbId,
    pub external_reference: Option<String>,
    pub contract_start_date: Option<Timestamp>,
    pub contract_end_date: Option<Timestamp>,
    pub next_increase_date: Option<Timestamp>,
    pub remind_increase: bool,
    pub remind_contract_end: bool,
    pub created_at: Timestamp,
}

/// Fields for inserting a new client rental.
#[derive(Debug, Clone)]
pub struct CreateClientRental {
    pub client_id: DbId,
    pub property_id: DbId,
    pub external_reference: Option<String>,
    pub contract_start_date: Option<Timestamp>,
    pub contract_end_date: Option<Timestamp>,
    pub next_increase_date: Option<Timestamp>,
    pub remind_increase: bool,
    pub remind_contract_end: bool,
}
