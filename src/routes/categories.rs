use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::extractors::Tenant;
use crate::state::AppState;
use crate::store::Category;

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories))
}

async fn list_categories(
    State(state): State<AppState>,
    Tenant(token): Tenant,
) -> Json<CategoriesResponse> {
    let categories = state.store.list_categories(&token).await;
    Json(CategoriesResponse { categories })
}
