//! Product endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db::repos::{NewProduct, Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidProductId;
use crate::http::server::AppState;
use crate::models::{ListParams, ListWindow, ProductName};

/// Create product request
///
/// Quantity and price default to zero when the body omits them; the name is
/// required and validated before anything touches the store.
#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub price: Decimal,
}

/// Product response
#[derive(Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            quantity: p.quantity,
            price: p.price,
        }
    }
}

/// Delete response
#[derive(Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

/// GET /product/{id} - fetch a single product
async fn get_product(
    State(state): State<Arc<AppState>>,
    ValidProductId(id): ValidProductId,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = ProductRepo::new(&state.pool).get(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// POST /product - create a new product
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let name = ProductName::new(&req.name)?;
    let product = ProductRepo::new(&state.pool)
        .create(NewProduct {
            name,
            quantity: req.quantity,
            price: req.price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// DELETE /product/{id} - delete a product
///
/// Idempotent: deleting an id with no row still responds with success.
async fn delete_product(
    State(state): State<Arc<AppState>>,
    ValidProductId(id): ValidProductId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let affected = ProductRepo::new(&state.pool).delete(id).await?;
    if affected == 0 {
        tracing::debug!(id, "delete matched no rows");
    }

    Ok(Json(DeleteResponse { result: "success" }))
}

/// GET /products - list products ordered by id
async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let window = ListWindow::from(params);
    let products = ProductRepo::new(&state.pool).list(window).await?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/product", post(create_product))
        .route("/product/{id}", get(get_product).delete(delete_product))
        .route("/products", get(list_products))
}
