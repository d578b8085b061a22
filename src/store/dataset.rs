use indexmap::IndexMap;

use crate::store::comments::CommentStore;
use crate::store::domain::{Category, Comment, Post, VotePolicy};
use crate::store::posts::PostStore;

/// Categories every new tenant starts with.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("react", "react"),
        Category::new("redux", "redux"),
        Category::new("udacity", "udacity"),
    ]
}

/// Everything one tenant owns.
#[derive(Debug, Clone)]
pub struct Dataset {
    categories: Vec<Category>,
    posts: IndexMap<String, Post>,
    comments: IndexMap<String, Comment>,
    vote_policy: VotePolicy,
}

impl Dataset {
    /// Fresh dataset holding its own copy of the default categories.
    pub fn seeded(vote_policy: VotePolicy) -> Self {
        Self {
            categories: default_categories(),
            posts: IndexMap::new(),
            comments: IndexMap::new(),
            vote_policy,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn posts(&mut self) -> PostStore<'_> {
        PostStore::new(&mut self.posts, self.vote_policy)
    }

    pub fn comments(&mut self) -> CommentStore<'_> {
        CommentStore::new(&mut self.comments, self.vote_policy)
    }
}
