//! Repository for the `categories` and `currency_types` reference tables.
//!
//! Read-only: catalog rows are seeded by migrations and never created at
//! runtime.

use inmo_core::types::DbId;
use sqlx::PgConnection;

use crate::models::catalog::{Category, CurrencyType};

pub struct CatalogRepo;

impl CatalogRepo {
    /// Find a category by exact name.
    pub async fn category_by_name(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = $1")
            .bind(name)
            .fetch_optional(conn)
            .await
    }

    /// Find a currency type by its primary key.
    pub async fn currency_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<CurrencyType>, sqlx::Error> {
        sqlx::query_as::<_, CurrencyType>(
            "SELECT id, name, symbol FROM currency_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    /// Find a currency type by exact name.
    pub async fn currency_by_name(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Option<CurrencyType>, sqlx::Error> {
        sqlx::query_as::<_, CurrencyType>(
            "SELECT id, name, symbol FROM currency_types WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(conn)
        .await
    }

    /// Find a currency type by symbol, case-insensitively.
    pub async fn currency_by_symbol(
        conn: &mut PgConnection,
        symbol: &str,
    ) -> Result<Option<CurrencyType>, sqlx::Error> {
        sqlx::query_as::<_, CurrencyType>(
            "SELECT id, name, symbol FROM currency_types WHERE LOWER(symbol) = LOWER($1)",
        )
        .bind(symbol)
        .fetch_optional(conn)
        .await
    }
}
