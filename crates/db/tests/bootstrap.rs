use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify catalog seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    inmo_db::health_check(&pool).await.unwrap();

    let categories: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(categories.0, 3, "Lead, Owner and Tenant should be seeded");

    let currencies: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM currency_types")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(currencies.0 >= 2, "currency seed data missing");

    for name in ["Lead", "Owner", "Tenant"] {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories WHERE name = $1")
            .bind(name)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 1, "category {name} should be seeded exactly once");
    }
}
