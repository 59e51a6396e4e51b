//! Repository for the `client_rentals` table.

use sqlx::PgConnection;

use crate::models::client_rental::{ClientRental, CreateClientRental};

const COLUMNS: &str = "id, client_id, property_id, external_reference, \
    contract_start_date, contract_end_date, next_increase_date, \
    remind_increase, remind_contract_end, created_at";

pub struct ClientRentalRepo;

impl ClientRentalRepo {
    /// Insert a new client rental, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateClientRental,
    ) -> Result<ClientRental, sqlx::Error> {
        let query = format!(
            "INSERT INTO client_rentals
                (client_id, property_id, external_reference,
                 contract_start_date, contract_end_date, next_increase_date,
                 remind_increase, remind_contract_end)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientRental>(&query)
            .bind(input.client_id)
            .bind(input.property_id)
            .bind(&input.external_reference)
            .bind(input.contract_start_date)
            .bind(input.contract_end_date)
            .bind(input.next_increase_date)
            .bind(input.remind_increase)
            .bind(input.remind_contract_end)
            .fetch_one(conn)
            .await
    }
}
