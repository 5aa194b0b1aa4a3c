//! Category HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::backend::error::BackendResult;
use crate::backend::store::SharedStore;
use crate::shared::blog::{Category, CreateCategoryRequest, ListCategoriesResponse};

/// List every category in creation order
pub async fn list_categories(State(store): State<SharedStore>) -> Json<ListCategoriesResponse> {
    let store = store.lock().await;
    Json(ListCategoriesResponse {
        categories: store.categories.iter().cloned().collect(),
    })
}

pub async fn create_category(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> BackendResult<Json<Category>> {
    let Json(request) = payload?;
    let mut category = request.into_category()?;

    category.id = store.lock().await.categories.insert(category.clone());
    tracing::info!("Created category {} ({})", category.id, category.name);
    Ok(Json(category))
}
