// Post deletion and its propagation to the post's comments.
use crate::store::dataset::Dataset;
use crate::store::domain::{Comment, Post};
use crate::store::error::StoreResult;

/// Result of a cascading post delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub post: Post,
    pub orphaned: Vec<Comment>,
}

/// Soft-delete a post, then flag its comments with `parent_deleted`.
///
/// The comment step only runs once the post step has succeeded, so an
/// unknown post id leaves every comment untouched.
pub fn delete_post_cascade(dataset: &mut Dataset, post_id: &str) -> StoreResult<CascadeOutcome> {
    let post = dataset.posts().disable(post_id)?;
    let orphaned = dataset.comments().disable_by_parent(&post.id);

    tracing::info!(
        "Deleted post {} and flagged {} comment(s)",
        post.id,
        orphaned.len()
    );

    Ok(CascadeOutcome { post, orphaned })
}
