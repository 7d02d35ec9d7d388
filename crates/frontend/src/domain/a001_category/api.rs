use crate::shared::api_utils::{api_url, get_json, post_json, ApiError};
use contracts::domain::a001_category::{Category, CreateCategoryDto};

/// `GET /categories/`
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json(&api_url("/categories/")).await
}

/// `POST /categories/`
pub async fn create_category(dto: &CreateCategoryDto) -> Result<Category, ApiError> {
    post_json(&api_url("/categories/"), dto).await
}
