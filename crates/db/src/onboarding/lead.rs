//! Lead onboarding: a consultation contact, optionally linked to the
//! property that prompted it.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use inmo_core::types::DbId;

use crate::models::client::{Client, CreateClient};
use crate::models::interest::ClientPropertyInterest;
use crate::repositories::InterestRepo;

use super::{dedup, resolve_category, OnboardingError, CATEGORY_LEAD};

/// Notes recorded on the interest link when the caller supplied none.
const DEFAULT_CONSULTATION_NOTES: &str = "Consultation from onboarding";

/// Input for [`create_lead_with_consultation`].
#[derive(Debug, Clone, Deserialize)]
pub struct LeadInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub notes: Option<String>,
    pub property_id: Option<DbId>,
}

/// Result of a lead onboarding call.
#[derive(Debug, Serialize)]
pub struct LeadOutcome {
    pub client: Client,
    /// The interest link created for `property_id`, when one was supplied
    /// and the link did not already exist.
    pub property_interest: Option<ClientPropertyInterest>,
}

/// Create a lead client and, when a property was referenced, an interest
/// link to it.
///
/// Runs in one transaction. A nonexistent `property_id` aborts the whole
/// call before any row is written. A pre-existing interest link is the one
/// non-critical failure: it is logged and swallowed, and the lead itself
/// still commits.
pub async fn create_lead_with_consultation(
    pool: &PgPool,
    input: &LeadInput,
) -> Result<LeadOutcome, OnboardingError> {
    let mut tx = pool.begin().await?;

    let category_id = resolve_category(&mut *tx, CATEGORY_LEAD).await?;

    if let Some(property_id) = input.property_id {
        dedup::validate_property_exists(&mut *tx, property_id).await?;
    }

    let client = dedup::create_base_client(
        &mut *tx,
        &CreateClient {
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            phone: input.phone.clone(),
            email: Some(input.email.clone()),
            dni: None,
            address: None,
            notes: input.notes.clone(),
            rental_interest: false,
            category_id,
        },
    )
    .await?;

    let property_interest = match input.property_id {
        Some(property_id) => {
            let notes = input.notes.as_deref().unwrap_or(DEFAULT_CONSULTATION_NOTES);
            let interest =
                InterestRepo::create_if_absent(&mut *tx, client.id, property_id, Some(notes))
                    .await?;
            if interest.is_none() {
                tracing::warn!(
                    client_id = client.id,
                    property_id,
                    "interest link already exists, lead created without a new one"
                );
            }
            interest
        }
        None => None,
    };

    tx.commit().await?;

    tracing::info!(client_id = client.id, "lead onboarded");
    Ok(LeadOutcome {
        client,
        property_interest,
    })
}
