//! Transactional client onboarding.
//!
//! Each flow (lead, owner, tenant) runs as a single sqlx transaction on one
//! pooled connection: resolve catalogs, validate the optional property
//! reference, create the base client through the dedup helper, then create
//! whatever dependent rows the supplied inputs call for. Any error drops
//! the transaction handle, which rolls everything back; only a fully built
//! chain commits.

use inmo_core::error::CoreError;
use inmo_core::types::DbId;
use sqlx::PgConnection;

use crate::repositories::CatalogRepo;

pub mod dedup;
pub mod lead;
pub mod owner;
pub mod tenant;

pub use lead::{create_lead_with_consultation, LeadInput, LeadOutcome};
pub use owner::{create_owner_with_property, OwnerInput, OwnerOutcome, OwnerPropertyOutcome};
pub use tenant::{create_tenant_with_property, RentalChain, TenantInput, TenantOutcome};

/// Category name for consultation leads.
pub const CATEGORY_LEAD: &str = "Lead";

/// Category name for property owners.
pub const CATEGORY_OWNER: &str = "Owner";

/// Category name for rental-interested tenants.
pub const CATEGORY_TENANT: &str = "Tenant";

/// Error type for every onboarding operation.
///
/// Domain failures (conflict, validation, internal) and database failures
/// are kept apart so the HTTP layer can map them independently.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Resolve a category by exact name.
///
/// Categories are seeded reference data; a miss means the deployment is
/// misconfigured, never a reason to create one.
pub(crate) async fn resolve_category(
    conn: &mut PgConnection,
    name: &str,
) -> Result<DbId, OnboardingError> {
    match CatalogRepo::category_by_name(conn, name).await? {
        Some(category) => Ok(category.id),
        None => Err(CoreError::Validation(format!(
            "category {name:?} is not configured"
        ))
        .into()),
    }
}

/// Resolve a currency from an optional id or an optional name/symbol.
///
/// A numeric id is trusted as-is. A name is looked up exactly, then retried
/// as a case-insensitive symbol. Returns `Ok(None)` when neither input was
/// supplied; an unresolvable name is an error.
pub(crate) async fn resolve_currency(
    conn: &mut PgConnection,
    id: Option<DbId>,
    name_or_symbol: Option<&str>,
) -> Result<Option<DbId>, OnboardingError> {
    if let Some(id) = id {
        return Ok(Some(id));
    }
    let Some(name) = name_or_symbol else {
        return Ok(None);
    };

    if let Some(currency) = CatalogRepo::currency_by_name(conn, name).await? {
        return Ok(Some(currency.id));
    }
    if let Some(currency) = CatalogRepo::currency_by_symbol(conn, name).await? {
        return Ok(Some(currency.id));
    }
    Err(CoreError::Validation(format!("currency {name:?} is not configured")).into())
}
