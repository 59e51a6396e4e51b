//! Tenant onboarding: a rental-interested client with an optional contract
//! chain behind it.
//!
//! The dependent rows form a three-state chain, modelled explicitly as
//! [`RentalChain`] so the reachable end states are exhaustive:
//!
//! - no property or no start date: client only;
//! - property + start date: client + administrative `client_rentals` row;
//! - additionally amount + currency: the above + financial `rentals` row.

use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};

use inmo_core::dates::parse_contract_date;
use inmo_core::types::{DbId, Timestamp};

use crate::models::client::{Client, CreateClient};
use crate::models::client_rental::{ClientRental, CreateClientRental};
use crate::models::interest::ClientPropertyInterest;
use crate::models::property::RentedProperty;
use crate::models::rental::{CreateRental, Rental};
use crate::repositories::{CatalogRepo, ClientRentalRepo, InterestRepo, PropertyRepo, RentalRepo};

use super::{dedup, resolve_category, resolve_currency, OnboardingError, CATEGORY_TENANT};

/// Input for [`create_tenant_with_property`].
#[derive(Debug, Clone, Deserialize)]
pub struct TenantInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub dni: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub property_id: Option<DbId>,
    /// `YYYY-MM-DD`; the contract chain is only built when this and
    /// `property_id` are both present.
    pub contract_start_date: Option<String>,
    pub contract_end_date: Option<String>,
    pub next_increase_date: Option<String>,
    pub monthly_amount: Option<i64>,
    /// Currency id, trusted as-is when present.
    pub currency_type_id: Option<DbId>,
    /// Currency name, or symbol as fallback (e.g. `"ARS"`).
    pub currency_type: Option<String>,
    pub remind_increase: Option<bool>,
    pub remind_contract_end: Option<bool>,
    pub external_reference: Option<String>,
}

/// The three reachable end states of the tenant contract chain.
#[derive(Debug)]
pub enum RentalChain {
    /// No property or no contract start date was supplied.
    NoContract,
    /// Administrative link created; amount or currency was missing.
    ContractOnly { client_rental: ClientRental },
    /// Administrative link plus financial terms.
    ContractWithFinancials {
        client_rental: ClientRental,
        rental: Rental,
    },
}

impl RentalChain {
    fn client_rental(&self) -> Option<&ClientRental> {
        match self {
            Self::NoContract => None,
            Self::ContractOnly { client_rental }
            | Self::ContractWithFinancials { client_rental, .. } => Some(client_rental),
        }
    }

    fn into_parts(self) -> (Option<ClientRental>, Option<Rental>) {
        match self {
            Self::NoContract => (None, None),
            Self::ContractOnly { client_rental } => (Some(client_rental), None),
            Self::ContractWithFinancials {
                client_rental,
                rental,
            } => (Some(client_rental), Some(rental)),
        }
    }
}

/// Result of a tenant onboarding call.
#[derive(Debug, Serialize)]
pub struct TenantOutcome {
    pub client: Client,
    /// The property under contract, re-read with its type/status and the
    /// contract currency. Present only when a client rental was created.
    pub rented_property: Option<RentedProperty>,
    /// All interest links held by the client, independent of the contract
    /// chain.
    pub properties_of_interest: Vec<ClientPropertyInterest>,
    pub client_rental: Option<ClientRental>,
    pub rental: Option<Rental>,
}

/// Normalized contract dates for the administrative row.
struct ContractDates {
    start: Timestamp,
    end: Option<Timestamp>,
    next_increase: Option<Timestamp>,
}

/// Create a tenant client and whatever portion of the contract chain the
/// supplied inputs allow.
pub async fn create_tenant_with_property(
    pool: &PgPool,
    input: &TenantInput,
    created_by_user_id: DbId,
) -> Result<TenantOutcome, OnboardingError> {
    let mut tx = pool.begin().await?;

    let category_id = resolve_category(&mut *tx, CATEGORY_TENANT).await?;

    // Catalog resolution happens before any write so a bad currency name
    // aborts with nothing inserted.
    let currency_id = resolve_currency(
        &mut *tx,
        input.currency_type_id,
        input.currency_type.as_deref(),
    )
    .await?;

    if let Some(property_id) = input.property_id {
        dedup::validate_property_exists(&mut *tx, property_id).await?;
    }

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
            rental_interest: true,
            category_id,
        },
    )
    .await?;

    let chain = build_contract_chain(&mut *tx, input, &client, currency_id, created_by_user_id)
        .await?;

    // Response assembly reads run inside the transaction so they can see
    // the uncommitted rows.
    let rented_property = match chain.client_rental() {
        Some(client_rental) => {
            read_rented_property(&mut *tx, client_rental.property_id, &chain).await?
        }
        None => None,
    };
    let properties_of_interest = InterestRepo::list_by_client(&mut *tx, client.id).await?;

    tx.commit().await?;

    tracing::info!(client_id = client.id, "tenant onboarded");
    let (client_rental, rental) = chain.into_parts();
    Ok(TenantOutcome {
        client,
        rented_property,
        properties_of_interest,
        client_rental,
        rental,
    })
}

/// Build the contract chain for the new client.
///
/// The `client_rentals` row is created iff a property and a start date were
/// both supplied; the `rentals` row additionally requires a monthly amount
/// and a resolved currency.
async fn build_contract_chain(
    conn: &mut PgConnection,
    input: &TenantInput,
    client: &Client,
    currency_id: Option<DbId>,
    created_by_user_id: DbId,
) -> Result<RentalChain, OnboardingError> {
    let (Some(property_id), Some(start_raw)) =
        (input.property_id, input.contract_start_date.as_deref())
    else {
        return Ok(RentalChain::NoContract);
    };

    let dates = normalize_contract_dates(input, start_raw)?;

    let client_rental = ClientRentalRepo::create(
        &mut *conn,
        &CreateClientRental {
            client_id: client.id,
            property_id,
            external_reference: input.external_reference.clone(),
            contract_start_date: Some(dates.start),
            contract_end_date: dates.end,
            next_increase_date: dates.next_increase,
            remind_increase: input.remind_increase.unwrap_or(false),
            remind_contract_end: input.remind_contract_end.unwrap_or(false),
        },
    )
    .await?;

    match (input.monthly_amount, currency_id) {
        (Some(monthly_amount), Some(currency_type_id)) => {
            let rental = RentalRepo::create(
                &mut *conn,
                &CreateRental {
                    client_rental_id: client_rental.id,
                    property_id,
                    start_date: dates.start,
                    end_date: dates.end,
                    monthly_amount,
                    currency_type_id,
                    created_by_user_id,
                },
            )
            .await?;
            Ok(RentalChain::ContractWithFinancials {
                client_rental,
                rental,
            })
        }
        _ => Ok(RentalChain::ContractOnly { client_rental }),
    }
}

/// Parse the three optional contract dates from their wire form.
fn normalize_contract_dates(
    input: &TenantInput,
    start_raw: &str,
) -> Result<ContractDates, OnboardingError> {
    let start = parse_contract_date("contract_start_date", start_raw)?;
    let end = input
        .contract_end_date
        .as_deref()
        .map(|v| parse_contract_date("contract_end_date", v))
        .transpose()?;
    let next_increase = input
        .next_increase_date
        .as_deref()
        .map(|v| parse_contract_date("next_increase_date", v))
        .transpose()?;
    Ok(ContractDates {
        start,
        end,
        next_increase,
    })
}

/// Re-read the property under contract, attaching the contract currency
/// when financial terms exist.
async fn read_rented_property(
    conn: &mut PgConnection,
    property_id: DbId,
    chain: &RentalChain,
) -> Result<Option<RentedProperty>, OnboardingError> {
    let Some(property) = PropertyRepo::find_by_id(&mut *conn, property_id).await? else {
        return Ok(None);
    };
    let currency = match chain {
        RentalChain::ContractWithFinancials { rental, .. } => {
            CatalogRepo::currency_by_id(&mut *conn, rental.currency_type_id).await?
        }
        _ => None,
    };
    Ok(Some(RentedProperty { property, currency }))
}
