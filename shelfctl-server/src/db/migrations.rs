//! Table bootstrap for the product store

use sqlx::PgPool;

/// Create the products table if it does not exist.
///
/// Price is fixed-point: 10 digits total, 7 after the decimal point.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring products table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            quantity INTEGER NOT NULL DEFAULT 0,
            price NUMERIC(10,7) NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
