//! Repository for the `client_property_interests` table.

use inmo_core::types::DbId;
use sqlx::PgConnection;

use crate::models::interest::ClientPropertyInterest;

const COLUMNS: &str = "id, client_id, property_id, notes, created_at";

pub struct InterestRepo;

impl InterestRepo {
    /// Insert an interest link unless the (client, property) pair already
    /// has one.
    ///
    /// Returns `None` when the link pre-exists. `ON CONFLICT DO NOTHING`
    /// is used instead of catch-and-continue because any failed statement
    /// would poison the surrounding Postgres transaction.
    pub async fn create_if_absent(
        conn: &mut PgConnection,
        client_id: DbId,
        property_id: DbId,
        notes: Option<&str>,
    ) -> Result<Option<ClientPropertyInterest>, sqlx::Error> {
        let query = format!(
            "INSERT INTO client_property_interests (client_id, property_id, notes)
             VALUES ($1, $2, $3)
             ON CONFLICT (client_id, property_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientPropertyInterest>(&query)
            .bind(client_id)
            .bind(property_id)
            .bind(notes)
            .fetch_optional(conn)
            .await
    }

    /// List all interests held by a client, oldest first.
    pub async fn list_by_client(
        conn: &mut PgConnection,
        client_id: DbId,
    ) -> Result<Vec<ClientPropertyInterest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM client_property_interests
             WHERE client_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, ClientPropertyInterest>(&query)
            .bind(client_id)
            .fetch_all(conn)
            .await
    }
}
