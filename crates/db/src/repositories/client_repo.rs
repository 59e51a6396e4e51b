//! Repository for the `clients` table.

use inmo_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::client::{Client, CreateClient};

/// Column list for clients queries.
const COLUMNS: &str = "id, first_name, last_name, phone, email, dni, address, notes, \
    rental_interest, category_id, created_at, updated_at";

/// Provides reads and the insert for client rows.
///
/// Uniqueness of email, dni and (name, phone) is enforced by partial unique
/// indexes in the schema; the onboarding dedup helper performs advisory
/// pre-checks on top of them.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    ///
    /// `input.phone` must already be canonical.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateClient,
    ) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients
                (first_name, last_name, phone, email, dni, address, notes,
                 rental_interest, category_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.dni)
            .bind(&input.address)
            .bind(&input.notes)
            .bind(input.rental_interest)
            .bind(input.category_id)
            .fetch_one(conn)
            .await
    }

    /// Find a client by exact email.
    pub async fn find_by_email(
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE email = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(email)
            .fetch_optional(conn)
            .await
    }

    /// Find a client by exact dni.
    pub async fn find_by_dni(
        conn: &mut PgConnection,
        dni: &str,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE dni = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(dni)
            .fetch_optional(conn)
            .await
    }

    /// List all clients sharing a canonical phone.
    ///
    /// Several clients may legitimately share a phone (e.g. an office
    /// line); the dedup helper narrows by name on top of this.
    pub async fn list_by_phone(
        conn: &mut PgConnection,
        phone: &str,
    ) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE phone = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(phone)
            .fetch_all(conn)
            .await
    }

    /// Find a client by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }
}
