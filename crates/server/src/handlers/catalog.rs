//! # Catalog Handlers
//!
//! Read-only lookups into the field catalog, used by the front end to build
//! its category pickers.

use super::AppError;
use appraisal::catalog::{self, GridKind};
use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct CategoriesParams {
    pub form_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CategoriesResponse {
    pub form_type: Option<String>,
    pub categories: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CategoryFieldsResponse {
    pub category: String,
    pub grid: bool,
    pub fields: Vec<String>,
}

/// `GET /categories?form_type=1004`. Unknown or absent form types get the default list.
pub async fn list_categories_handler(
    Query(params): Query<CategoriesParams>,
) -> Json<CategoriesResponse> {
    let categories = catalog::resolve_categories(params.form_type.as_deref().unwrap_or(""))
        .iter()
        .map(|c| c.to_string())
        .collect();
    Json(CategoriesResponse {
        form_type: params.form_type,
        categories,
    })
}

/// `GET /categories/{category}`. Category names are case-insensitive.
pub async fn category_fields_handler(
    Path(category): Path<String>,
) -> Result<Json<CategoryFieldsResponse>, AppError> {
    let category = catalog::normalize_category(&category);
    let fields = catalog::fields_for(&category)?;
    Ok(Json(CategoryFieldsResponse {
        grid: GridKind::from_category(&category).is_some(),
        fields: fields.iter().map(|f| f.to_string()).collect(),
        category,
    }))
}
