use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extractors::Tenant;
use crate::state::AppState;
use crate::store::{delete_post_cascade, Comment, NewPost, Post, PostEdit};

// --- Forms ---

/// Body of `POST /posts/{id}` and `POST /comments/{id}`.
#[derive(Deserialize)]
pub struct VoteForm {
    #[serde(default)]
    pub option: Option<String>,
}

impl VoteForm {
    pub fn option(&self) -> &str {
        self.option.as_deref().unwrap_or_default()
    }
}

// --- Router ---

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post)
                .post(vote_post)
                .put(edit_post)
                .delete(delete_post),
        )
        .route("/posts/{id}/comments", get(list_post_comments))
        .route("/{category}/posts", get(list_category_posts))
}

// --- Handlers ---

async fn list_posts(State(state): State<AppState>, Tenant(token): Tenant) -> Json<Vec<Post>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    Json(dataset.posts().list_all())
}

async fn list_category_posts(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Path(category): Path<String>,
) -> Json<Vec<Post>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    Json(dataset.posts().list_by_category(&category))
}

async fn create_post(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Json(form): Json<NewPost>,
) -> AppResult<Json<Post>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    let post = dataset.posts().create(form)?;
    Ok(Json(post))
}

async fn get_post(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Path(id): Path<String>,
) -> AppResult<Json<Post>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    Ok(Json(dataset.posts().get(&id)?))
}

async fn vote_post(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Path(id): Path<String>,
    Json(form): Json<VoteForm>,
) -> AppResult<Json<Post>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    Ok(Json(dataset.posts().vote(&id, form.option())?))
}

async fn edit_post(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Path(id): Path<String>,
    Json(edit): Json<PostEdit>,
) -> AppResult<Json<Post>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    Ok(Json(dataset.posts().edit(&id, edit)?))
}

/// Soft-deletes the post and flags its comments in one step.
async fn delete_post(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Path(id): Path<String>,
) -> AppResult<Json<Post>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    let outcome = delete_post_cascade(&mut dataset, &id)?;
    Ok(Json(outcome.post))
}

async fn list_post_comments(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Path(id): Path<String>,
) -> Json<Vec<Comment>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    Json(dataset.comments().list_by_parent(&id))
}
