use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::store::domain::{Comment, CommentEdit, NewComment, VotePolicy};
use crate::store::error::{RecordKind, StoreError, StoreResult};

/// Comment operations over one tenant's comment table.
///
/// `parent_id` is a plain lookup key. Nothing here checks that the parent
/// post exists; deleting a post only flags its comments (see `cascade`).
pub struct CommentStore<'a> {
    comments: &'a mut IndexMap<String, Comment>,
    vote_policy: VotePolicy,
}

impl<'a> CommentStore<'a> {
    pub(crate) fn new(comments: &'a mut IndexMap<String, Comment>, vote_policy: VotePolicy) -> Self {
        Self {
            comments,
            vote_policy,
        }
    }

    pub fn list_by_parent(&self, post_id: &str) -> Vec<Comment> {
        self.comments
            .values()
            .filter(|c| c.parent_id == post_id)
            .cloned()
            .collect()
    }

    pub fn create(&mut self, fields: NewComment) -> StoreResult<Comment> {
        match self.comments.entry(fields.id.clone()) {
            Entry::Occupied(slot) => Err(StoreError::duplicate(RecordKind::Comment, slot.key())),
            Entry::Vacant(slot) => {
                tracing::debug!("Created comment {} on {}", slot.key(), fields.parent_id);
                Ok(slot.insert(Comment::from(fields)).clone())
            }
        }
    }

    pub fn get(&self, id: &str) -> StoreResult<Comment> {
        self.comments
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(RecordKind::Comment, id))
    }

    pub fn edit(&mut self, id: &str, edit: CommentEdit) -> StoreResult<Comment> {
        let comment = self.find_mut(id)?;
        if let Some(timestamp) = edit.timestamp {
            comment.timestamp = timestamp;
        }
        if let Some(body) = edit.body {
            comment.body = body;
        }
        Ok(comment.clone())
    }

    pub fn vote(&mut self, id: &str, option: &str) -> StoreResult<Comment> {
        let policy = self.vote_policy;
        let comment = self.find_mut(id)?;
        match policy.resolve(option)? {
            Some(vote) => comment.vote_score += vote.delta(),
            None => tracing::debug!("Ignoring vote option {:?} on comment {}", option, id),
        }
        Ok(comment.clone())
    }

    pub fn disable(&mut self, id: &str) -> StoreResult<Comment> {
        let comment = self.find_mut(id)?;
        comment.deleted = true;
        Ok(comment.clone())
    }

    /// Flag every comment under `post_id` as orphaned. Returns the flagged
    /// comments; an unknown post yields an empty list.
    pub fn disable_by_parent(&mut self, post_id: &str) -> Vec<Comment> {
        self.comments
            .values_mut()
            .filter(|c| c.parent_id == post_id)
            .map(|c| {
                c.parent_deleted = true;
                c.clone()
            })
            .collect()
    }

    fn find_mut(&mut self, id: &str) -> StoreResult<&mut Comment> {
        self.comments
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(RecordKind::Comment, id))
    }
}
