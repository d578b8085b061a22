use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::error::AppResult;
use crate::extractors::Tenant;
use crate::routes::posts::VoteForm;
use crate::state::AppState;
use crate::store::{Comment, CommentEdit, NewComment};

pub fn router() -> Router<AppState> {
    Router::new().route("/comments", post(create_comment)).route(
        "/comments/{id}",
        get(get_comment)
            .post(vote_comment)
            .put(edit_comment)
            .delete(delete_comment),
    )
}

async fn create_comment(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Json(form): Json<NewComment>,
) -> AppResult<Json<Comment>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    let comment = dataset.comments().create(form)?;
    Ok(Json(comment))
}

async fn get_comment(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Path(id): Path<String>,
) -> AppResult<Json<Comment>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    Ok(Json(dataset.comments().get(&id)?))
}

async fn vote_comment(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Path(id): Path<String>,
    Json(form): Json<VoteForm>,
) -> AppResult<Json<Comment>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    Ok(Json(dataset.comments().vote(&id, form.option())?))
}

async fn edit_comment(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Path(id): Path<String>,
    Json(edit): Json<CommentEdit>,
) -> AppResult<Json<Comment>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    Ok(Json(dataset.comments().edit(&id, edit)?))
}

async fn delete_comment(
    State(state): State<AppState>,
    Tenant(token): Tenant,
    Path(id): Path<String>,
) -> AppResult<Json<Comment>> {
    let dataset = state.store.resolve(&token).await;
    let mut dataset = dataset.lock().await;
    Ok(Json(dataset.comments().disable(&id)?))
}
