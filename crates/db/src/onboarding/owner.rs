//! Owner onboarding: a client in the Owner role, optionally taking
//! ownership of an existing property.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use inmo_core::error::CoreError;
use inmo_core::types::DbId;

use crate::models::client::{Client, CreateClient};
use crate::repositories::PropertyRepo;

use super::{dedup, resolve_category, OnboardingError, CATEGORY_OWNER};

/// Input for [`create_owner_with_property`].
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub dni: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub property_id: Option<DbId>,
}

/// Result of an owner onboarding call.
#[derive(Debug, Serialize)]
pub struct OwnerOutcome {
    pub client: Client,
    /// Always `false`: the dedup helper is create-only, so an existing
    /// match fails the call instead of being reused. Kept in the response
    /// shape for API compatibility.
    pub was_existing_client: bool,
    pub property: Option<OwnerPropertyOutcome>,
}

/// Property portion of the owner onboarding response.
#[derive(Debug, Serialize)]
pub struct OwnerPropertyOutcome {
    pub id: DbId,
    pub title: String,
    pub owner_id: Option<DbId>,
    /// Informational: whether the property was associated to the new
    /// client or left with its current owner.
    pub message: String,
}

/// Create an owner client and, when the referenced property has no owner
/// yet, associate it to the new client.
///
/// A property that already has an owner is a soft conflict: the client is
/// still created, the property is left untouched, and the response carries
/// an informational message. A failed association update on an unowned
/// property is a hard internal error and rolls the whole call back.
pub async fn create_owner_with_property(
    pool: &PgPool,
    input: &OwnerInput,
) -> Result<OwnerOutcome, OnboardingError> {
    let mut tx = pool.begin().await?;

    let category_id = resolve_category(&mut *tx, CATEGORY_OWNER).await?;

    // Inspect the property before the client insert so a dangling
    // reference aborts with nothing written.
    let property = match input.property_id {
        Some(property_id) => Some(dedup::validate_property_exists(&mut *tx, property_id).await?),
        None => None,
    };
    let should_associate = matches!(&property, Some(p) if p.owner_id.is_none());

    let client = dedup::create_base_client(
        &mut *tx,
        &CreateClient {
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            phone: input.phone.clone(),
            email: input.email.clone(),
            dni: input.dni.clone(),
            address: input.address.clone(),
            notes: input.notes.clone(),
            rental_interest: false,
            category_id,
        },
    )
    .await?;

    let property = match property {
        Some(property) if should_associate => {
            let claimed = PropertyRepo::claim_for_owner(&mut *tx, property.id, client.id).await?;
            if !claimed {
                // The association was promised; failing to apply it must
                // not leave a half-onboarded owner behind.
                return Err(CoreError::Internal(format!(
                    "failed to associate property {} to client {}",
                    property.id, client.id
                ))
                .into());
            }
            Some(OwnerPropertyOutcome {
                id: property.id,
                title: property.title,
                owner_id: Some(client.id),
                message: "property associated to the new owner".to_string(),
            })
        }
        Some(property) => {
            tracing::info!(
                property_id = property.id,
                current_owner = ?property.owner_id,
                "property already has an owner, association skipped"
            );
            Some(OwnerPropertyOutcome {
                id: property.id,
                title: property.title,
                owner_id: property.owner_id,
                message: "property already has an owner; it was left unchanged".to_string(),
            })
        }
        None => None,
    };

    tx.commit().await?;

    tracing::info!(client_id = client.id, "owner onboarded");
    Ok(OwnerOutcome {
        client,
        was_existing_client: false,
        property,
    })
}
