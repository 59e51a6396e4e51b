//! Repository for the `properties` table.
//!
//! Properties are created and managed by the listings side of the
//! back-office; onboarding only reads them and claims ownership in the
//! owner flow.

use inmo_core::types::DbId;
use sqlx::PgConnection;

use crate::models::property::Property;

/// Column list for properties queries.
const COLUMNS: &str = "id, title, address, property_type, status, owner_id, created_at";

pub struct PropertyRepo;

impl PropertyRepo {
    /// Find a property by its primary key.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Set a property's owner, but only while it has none.
    ///
    /// Returns `true` if the row was claimed. The `owner_id IS NULL` guard
    /// keeps a concurrent claim from being silently overwritten.
    pub async fn claim_for_owner(
        conn: &mut PgConnection,
        property_id: DbId,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE properties SET owner_id = $1
             WHERE id = $2 AND owner_id IS NULL",
        )
        .bind(owner_id)
        .bind(property_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
