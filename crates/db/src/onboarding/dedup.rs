//! Dedup/creation helper for base client rows.
//!
//! Create-only by design: any pre-existing match is a terminal conflict,
//! never a silent reuse. The checks run in a strict order so the caller
//! always learns about the most specific duplicate first.

use inmo_core::error::CoreError;
use inmo_core::phone::normalize_phone;
use inmo_core::types::DbId;
use sqlx::PgConnection;

use crate::models::client::{Client, CreateClient};
use crate::models::property::Property;
use crate::repositories::{ClientRepo, PropertyRepo};

use super::OnboardingError;

/// Create a new client after checking for duplicates.
///
/// Check order, each a terminal [`CoreError::Conflict`]:
///
/// 1. another client holds the same email (when supplied);
/// 2. another client holds the same dni (when supplied);
/// 3. another client shares the canonical phone *and* the exact
///    first/last name.
///
/// Otherwise the row is inserted with the canonical phone. The checks are
/// advisory (check-then-act, no row locks); the partial unique indexes on
/// `clients` are the real enforcement point under concurrency, and a
/// unique violation raised by the insert itself is translated into the
/// same `Conflict` the pre-check would have produced.
pub async fn create_base_client(
    conn: &mut PgConnection,
    input: &CreateClient,
) -> Result<Client, OnboardingError> {
    if let Some(email) = input.email.as_deref() {
        if ClientRepo::find_by_email(conn, email).await?.is_some() {
            return Err(
                CoreError::Conflict(format!("a client with email {email:?} already exists")).into(),
            );
        }
    }

    if let Some(dni) = input.dni.as_deref() {
        if ClientRepo::find_by_dni(conn, dni).await?.is_some() {
            return Err(
                CoreError::Conflict(format!("a client with dni {dni:?} already exists")).into(),
            );
        }
    }

    let phone = normalize_phone(&input.phone);
    let same_phone = ClientRepo::list_by_phone(conn, &phone).await?;
    if same_phone
        .iter()
        .any(|c| c.first_name == input.first_name && c.last_name == input.last_name)
    {
        return Err(CoreError::Conflict(format!(
            "a client named {} {} with phone {phone} already exists",
            input.first_name, input.last_name
        ))
        .into());
    }

    let row = CreateClient {
        phone,
        ..input.clone()
    };
    match ClientRepo::create(conn, &row).await {
        Ok(client) => Ok(client),
        Err(err) if is_unique_violation(&err) => {
            // Lost the check-then-act race; report it the same way the
            // pre-check would have.
            Err(CoreError::Conflict("a matching client already exists".to_string()).into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Fetch a property the caller referenced, failing if it does not exist.
pub async fn validate_property_exists(
    conn: &mut PgConnection,
    property_id: DbId,
) -> Result<Property, OnboardingError> {
    match PropertyRepo::find_by_id(conn, property_id).await? {
        Some(property) => Ok(property),
        None => {
            Err(CoreError::Validation(format!("property {property_id} does not exist")).into())
        }
    }
}

/// PostgreSQL unique constraint violation (SQLSTATE 23505).
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505")
    )
}
