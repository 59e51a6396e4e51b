//! Immutable reference rows: client categories and currency types.
//!
//! Both tables are seeded by migrations and never written by the
//! application. Resolution failures are configuration errors.

use inmo_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table (client role: Lead, Owner, Tenant).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// A row from the `currency_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CurrencyType {
    pub id: DbId,
    pub name: String,
    pub symbol: String,
}
