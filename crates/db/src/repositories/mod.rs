//! Table repositories.
//!
//! Convention: methods used inside an onboarding transaction take
//! `&mut PgConnection` so every statement runs on the one connection the
//! orchestrator's transaction owns (callers pass `&mut *tx`). Standalone
//! reads used by HTTP handlers outside a transaction take `&PgPool`.

pub mod catalog_repo;
pub mod client_rental_repo;
pub mod client_repo;
pub mod interest_repo;
pub mod property_repo;
pub mod rental_repo;

pub use catalog_repo::CatalogRepo;
pub use client_rental_repo::ClientRentalRepo;
pub use client_repo::ClientRepo;
pub use interest_repo::InterestRepo;
pub use property_repo::PropertyRepo;
pub use rental_repo::RentalRepo;
