use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    quire_db::health_check(&pool).await.unwrap();

    for table in ["tags", "articles"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Column defaults fill in everything the insert leaves out.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_article_defaults(pool: PgPool) {
    let row: (i64, String, i32, i64) = sqlx::query_as(
        "INSERT INTO articles (title) VALUES ('t') \
         RETURNING tag_id, modified_by, state, created_on",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(row, (0, String::new(), 0, 0));
}
