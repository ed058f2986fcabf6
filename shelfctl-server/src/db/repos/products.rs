//! Product repository
//!
//! Handles product CRUD:
//! - create: INSERT ... RETURNING (id assigned by the store)
//! - delete: idempotent, reports rows affected
//! - list: offset/limit window ordered by id

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::models::{ListWindow, ProductName};

use super::DbError;

/// Product record from database
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}

/// Fields for a product about to be inserted; id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub quantity: i32,
    pub price: Decimal,
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a single product by id.
    pub async fn get(&self, id: i64) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "product",
            id: id.to_string(),
        })
    }

    /// Insert a product, returning the stored row.
    ///
    /// RETURNING gives back the price as rounded by the column type, so the
    /// caller sees exactly what a later get() would.
    pub async fn create(&self, new: NewProduct) -> Result<Product, DbError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, quantity, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, quantity, price
            "#,
        )
        .bind(new.name.as_str())
        .bind(new.quantity)
        .bind(new.price)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Delete a product by id, returning the number of rows affected.
    ///
    /// Deleting an id with no row is not an error; callers that need a 404
    /// distinction can check the count.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// List products ordered by id ascending, bounded by the window.
    ///
    /// Materialized in full before return.
    pub async fn list(&self, window: ListWindow) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, price
            FROM products
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(window.limit() as i64)
        .bind(window.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p shelfctl-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("bootstrap failed");
        sqlx::query("DELETE FROM products")
            .execute(&pool)
            .await
            .expect("clear failed");
        pool
    }

    fn new_product(name: &str, quantity: i32, price: Decimal) -> NewProduct {
        NewProduct {
            name: ProductName::new(name).expect("valid name"),
            quantity,
            price,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_roundtrip() {
        let pool = test_pool().await;
        let repo = ProductRepo::new(&pool);

        let created = repo
            .create(new_product("keyboard", 100, Decimal::new(100, 0)))
            .await
            .expect("create failed");

        let fetched = repo.get(created.id).await.expect("get failed");
        assert_eq!(fetched.name, "keyboard");
        assert_eq!(fetched.quantity, 100);
        assert_eq!(fetched.price, created.price);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = ProductRepo::new(&pool);

        let err = repo.get(424242).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "product", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_is_idempotent() {
        let pool = test_pool().await;
        let repo = ProductRepo::new(&pool);

        let created = repo
            .create(new_product("connector", 10, Decimal::new(10, 0)))
            .await
            .expect("create failed");

        assert_eq!(repo.delete(created.id).await.expect("delete failed"), 1);
        // Second delete affects no rows but still succeeds
        assert_eq!(repo.delete(created.id).await.expect("delete failed"), 0);

        let err = repo.get(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ids_are_monotonic() {
        let pool = test_pool().await;
        let repo = ProductRepo::new(&pool);

        let first = repo
            .create(new_product("chair", 1, Decimal::new(100, 0)))
            .await
            .expect("create failed");
        let second = repo
            .create(new_product("desk", 2, Decimal::new(250, 0)))
            .await
            .expect("create failed");

        assert!(second.id > first.id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_orders_by_id_and_honors_window() {
        let pool = test_pool().await;
        let repo = ProductRepo::new(&pool);

        for i in 0..5 {
            repo.create(new_product(&format!("item-{i}"), i, Decimal::new(i as i64, 0)))
                .await
                .expect("create failed");
        }

        let all = repo.list(ListWindow::new(0, 100)).await.expect("list failed");
        assert_eq!(all.len(), 5);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        let tail = repo.list(ListWindow::new(3, 100)).await.expect("list failed");
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].id, all[3].id);

        let capped = repo.list(ListWindow::new(0, 2)).await.expect("list failed");
        assert_eq!(capped.len(), 2);
    }
}
