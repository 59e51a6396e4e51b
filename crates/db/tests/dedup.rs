//! Integration tests for the dedup/creation helper and the storage-level
//! uniqueness constraints backing it.

use assert_matches::assert_matches;
use sqlx::PgPool;

use inmo_core::error::CoreError;
use inmo_core::types::DbId;
use inmo_db::models::client::CreateClient;
use inmo_db::onboarding::{dedup, OnboardingError};
use inmo_db::repositories::ClientRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn lead_category_id(pool: &PgPool) -> DbId {
    let row: (DbId,) = sqlx::query_as("SELECT id FROM categories WHERE name = 'Lead'")
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

fn new_client(category_id: DbId, email: Option<&str>, dni: Option<&str>) -> CreateClient {
    CreateClient {
        first_name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        phone: "+54 11 5555-1000".to_string(),
        email: email.map(str::to_string),
        dni: dni.map(str::to_string),
        address: None,
        notes: None,
        rental_interest: false,
        category_id,
    }
}

// ---------------------------------------------------------------------------
// Dedup rules
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn creates_client_with_canonical_phone(pool: PgPool) {
    let category_id = lead_category_id(&pool).await;
    let mut conn = pool.acquire().await.unwrap();

    let client = dedup::create_base_client(&mut conn, &new_client(category_id, None, None))
        .await
        .unwrap();

    assert_eq!(client.phone, "+541155551000");
    assert_eq!(client.category_id, category_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejects_duplicate_email(pool: PgPool) {
    let category_id = lead_category_id(&pool).await;
    let mut conn = pool.acquire().await.unwrap();

    dedup::create_base_client(&mut conn, &new_client(category_id, Some("ana@example.com"), None))
        .await
        .unwrap();

    // Same email, everything else different.
    let mut dup = new_client(category_id, Some("ana@example.com"), None);
    dup.first_name = "Otra".to_string();
    dup.phone = "11 5555 2000".to_string();

    let err = dedup::create_base_client(&mut conn, &dup).await.unwrap_err();
    assert_matches!(err, OnboardingError::Domain(CoreError::Conflict(msg)) => {
        assert!(msg.contains("email"));
    });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejects_duplicate_dni(pool: PgPool) {
    let category_id = lead_category_id(&pool).await;
    let mut conn = pool.acquire().await.unwrap();

    dedup::create_base_client(&mut conn, &new_client(category_id, None, Some("28999000")))
        .await
        .unwrap();

    let mut dup = new_client(category_id, None, Some("28999000"));
    dup.last_name = "Martinez".to_string();
    dup.phone = "11 5555 2000".to_string();

    let err = dedup::create_base_client(&mut conn, &dup).await.unwrap_err();
    assert_matches!(err, OnboardingError::Domain(CoreError::Conflict(msg)) => {
        assert!(msg.contains("dni"));
    });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejects_same_name_and_phone_across_formattings(pool: PgPool) {
    let category_id = lead_category_id(&pool).await;
    let mut conn = pool.acquire().await.unwrap();

    dedup::create_base_client(&mut conn, &new_client(category_id, None, None))
        .await
        .unwrap();

    // Same person, phone formatted differently: canonicalization must
    // still catch the duplicate.
    let mut dup = new_client(category_id, None, None);
    dup.phone = "+54 (11) 5555.1000".to_string();

    let err = dedup::create_base_client(&mut conn, &dup).await.unwrap_err();
    assert_matches!(err, OnboardingError::Domain(CoreError::Conflict(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn allows_shared_phone_with_different_name(pool: PgPool) {
    let category_id = lead_category_id(&pool).await;
    let mut conn = pool.acquire().await.unwrap();

    dedup::create_base_client(&mut conn, &new_client(category_id, None, None))
        .await
        .unwrap();

    // An office line shared by two different people is fine.
    let mut other = new_client(category_id, None, None);
    other.first_name = "Bruno".to_string();

    assert!(dedup::create_base_client(&mut conn, &other).await.is_ok());
}

// ---------------------------------------------------------------------------
// Storage-level enforcement
// ---------------------------------------------------------------------------

/// The dedup checks are check-then-act; under concurrency the partial
/// unique index on email is what actually holds the invariant. Going
/// through the repository directly (skipping the pre-checks) must hit it.
#[sqlx::test(migrations = "../../db/migrations")]
async fn email_unique_index_is_the_enforcement_point(pool: PgPool) {
    let category_id = lead_category_id(&pool).await;
    let mut conn = pool.acquire().await.unwrap();

    let mut input = new_client(category_id, Some("race@example.com"), None);
    input.phone = "1155551000".to_string();
    ClientRepo::create(&mut conn, &input).await.unwrap();

    let mut second = input.clone();
    second.first_name = "Concurrente".to_string();
    second.phone = "1155559999".to_string();

    let err = ClientRepo::create(&mut conn, &second).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(db) => {
        assert_eq!(db.code().as_deref(), Some("23505"));
        assert!(db.constraint().unwrap_or_default().starts_with("uq_"));
    });

    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM clients WHERE email = 'race@example.com'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count.0, 1);
}
