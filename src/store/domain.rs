// Domain types - plain data, no locking or I/O
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::store::error::StoreError;

/// Opaque caller-supplied key that selects a tenant's dataset.
///
/// Held as raw bytes: header values need not be UTF-8, and two tokens are
/// the same tenant only when their bytes match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantToken(pub Vec<u8>);

impl TenantToken {
    pub fn new(token: impl Into<Vec<u8>>) -> Self {
        Self(token.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for TenantToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub path: String,
}

impl Category {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub timestamp: i64,
    pub title: String,
    pub body: String,
    pub author: String,
    /// Expected to name a `Category::path`; not checked.
    pub category: String,
    pub vote_score: i64,
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub timestamp: i64,
    pub body: String,
    pub author: String,
    /// Weak reference to a `Post::id` in the same tenant.
    pub parent_id: String,
    pub vote_score: i64,
    pub deleted: bool,
    pub parent_deleted: bool,
}

/// Fields a caller supplies when creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPost {
    pub id: String,
    pub timestamp: i64,
    pub title: String,
    pub body: String,
    pub author: String,
    pub category: String,
}

impl From<NewPost> for Post {
    fn from(new: NewPost) -> Self {
        Self {
            id: new.id,
            timestamp: new.timestamp,
            title: new.title,
            body: new.body,
            author: new.author,
            category: new.category,
            vote_score: 1,
            deleted: false,
        }
    }
}

/// Fields a caller supplies when creating a comment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub id: String,
    pub timestamp: i64,
    pub body: String,
    pub author: String,
    pub parent_id: String,
}

impl From<NewComment> for Comment {
    fn from(new: NewComment) -> Self {
        Self {
            id: new.id,
            timestamp: new.timestamp,
            body: new.body,
            author: new.author,
            parent_id: new.parent_id,
            vote_score: 1,
            deleted: false,
            parent_deleted: false,
        }
    }
}

/// Partial update for a post. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostEdit {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Partial update for a comment. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommentEdit {
    pub timestamp: Option<i64>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOption {
    UpVote,
    DownVote,
}

impl VoteOption {
    pub fn delta(self) -> i64 {
        match self {
            VoteOption::UpVote => 1,
            VoteOption::DownVote => -1,
        }
    }
}

impl FromStr for VoteOption {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upVote" => Ok(VoteOption::UpVote),
            "downVote" => Ok(VoteOption::DownVote),
            other => Err(StoreError::InvalidVoteOption(other.to_string())),
        }
    }
}

/// How a vote with an unrecognised option string is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotePolicy {
    /// Unknown options leave the score alone and return the record.
    #[default]
    Lenient,
    /// Unknown options fail with `StoreError::InvalidVoteOption`.
    Strict,
}

impl VotePolicy {
    /// Resolve a raw option string into the score delta to apply.
    /// `Ok(None)` means "ignore this vote".
    pub fn resolve(self, option: &str) -> Result<Option<VoteOption>, StoreError> {
        match (option.parse::<VoteOption>(), self) {
            (Ok(vote), _) => Ok(Some(vote)),
            (Err(_), VotePolicy::Lenient) => Ok(None),
            (Err(e), VotePolicy::Strict) => Err(e),
        }
    }
}
