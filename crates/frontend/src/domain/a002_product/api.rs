use crate::shared::api_utils::{
    api_url, api_url_with_query, ensure_ok, get_json, post_json, put_json, ApiError,
};
use contracts::domain::a002_product::{
    Product, ProductCount, ProductFilter, ProductId, ProductPageQuery, ProductPayload,
};
use gloo_net::http::Request;

/// `GET /products/count` with the list filters
pub async fn fetch_product_count(filter: &ProductFilter) -> Result<usize, ApiError> {
    let url = api_url_with_query("/products/count", filter)?;
    let count: ProductCount = get_json(&url).await?;
    Ok(count.total)
}

/// `GET /products/` for one page
pub async fn fetch_products_page(query: &ProductPageQuery) -> Result<Vec<Product>, ApiError> {
    let url = api_url_with_query("/products/", query)?;
    get_json(&url).await
}

pub async fn create_product(payload: &ProductPayload) -> Result<Product, ApiError> {
    post_json(&api_url("/products/"), payload).await
}

/// `PUT /products/{id}`
pub async fn update_product(id: ProductId, payload: &ProductPayload) -> Result<Product, ApiError> {
    put_json(&api_url(&format!("/products/{}", id)), payload).await
}

/// `GET /products/export-csv`, unpaginated, returning the raw CSV bytes.
pub async fn export_products_csv(filter: &ProductFilter) -> Result<Vec<u8>, ApiError> {
    let url = api_url_with_query("/products/export-csv", filter)?;
    let response = Request::get(&url).send().await.map_err(ApiError::network)?;
    let response = ensure_ok(response).await?;
    response.binary().await.map_err(ApiError::decode)
}
