//! Repository for the `rentals` table (financial terms).

use sqlx::PgConnection;

use crate::models::rental::{CreateRental, Rental};

const COLUMNS: &str = "id, client_rental_id, property_id, start_date, end_date, \
    monthly_amount, currency_type_id, created_by_user_id, created_at";

pub struct RentalRepo;

impl RentalRepo {
    /// Insert a new rental, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateRental,
    ) -> Result<Rental, sqlx::Error> {
        let query = format!(
            "INSERT INTO rentals
                (client_rental_id, property_id, start_date, end_date,
                 monthly_amount, currency_type_id, created_by_user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(input.client_rental_id)
            .bind(input.property_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.monthly_amount)
            .bind(input.currency_type_id)
            .bind(input.created_by_user_id)
            .fetch_one(conn)
            .await
    }
}
