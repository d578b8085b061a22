use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::store::domain::{NewPost, Post, PostEdit, VotePolicy};
use crate::store::error::{RecordKind, StoreError, StoreResult};

/// Post operations over one tenant's post table.
pub struct PostStore<'a> {
    posts: &'a mut IndexMap<String, Post>,
    vote_policy: VotePolicy,
}

impl<'a> PostStore<'a> {
    pub(crate) fn new(posts: &'a mut IndexMap<String, Post>, vote_policy: VotePolicy) -> Self {
        Self { posts, vote_policy }
    }

    /// Every post, deleted ones included.
    pub fn list_all(&self) -> Vec<Post> {
        self.posts.values().cloned().collect()
    }

    pub fn list_by_category(&self, path: &str) -> Vec<Post> {
        self.posts
            .values()
            .filter(|p| p.category == path)
            .cloned()
            .collect()
    }

    pub fn create(&mut self, fields: NewPost) -> StoreResult<Post> {
        match self.posts.entry(fields.id.clone()) {
            Entry::Occupied(slot) => Err(StoreError::duplicate(RecordKind::Post, slot.key())),
            Entry::Vacant(slot) => {
                tracing::debug!("Created post {}", slot.key());
                Ok(slot.insert(Post::from(fields)).clone())
            }
        }
    }

    pub fn get(&self, id: &str) -> StoreResult<Post> {
        self.posts
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(RecordKind::Post, id))
    }

    pub fn edit(&mut self, id: &str, edit: PostEdit) -> StoreResult<Post> {
        let post = self.find_mut(id)?;
        if let Some(title) = edit.title {
            post.title = title;
        }
        if let Some(body) = edit.body {
            post.body = body;
        }
        Ok(post.clone())
    }

    pub fn vote(&mut self, id: &str, option: &str) -> StoreResult<Post> {
        // Lookup first: a missing post is NotFound whatever the option.
        let policy = self.vote_policy;
        let post = self.find_mut(id)?;
        match policy.resolve(option)? {
            Some(vote) => post.vote_score += vote.delta(),
            None => tracing::debug!("Ignoring vote option {:?} on post {}", option, id),
        }
        Ok(post.clone())
    }

    /// Soft delete. Calling it again on a deleted post changes nothing.
    pub fn disable(&mut self, id: &str) -> StoreResult<Post> {
        let post = self.find_mut(id)?;
        post.deleted = true;
        Ok(post.clone())
    }

    fn find_mut(&mut self, id: &str) -> StoreResult<&mut Post> {
        self.posts
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(RecordKind::Post, id))
    }
}

#[cfg(test)]
mod tests {
    use crate::store::dataset::Dataset;
    use crate::store::domain::{NewPost, PostEdit, VotePolicy};
    use crate::store::error::{RecordKind, StoreError};

    fn new_post(id: &str, category: &str) -> NewPost {
        NewPost {
            id: id.into(),
            timestamp: 1467166872634,
            title: format!("Title {id}"),
            body: format!("Body {id}"),
            author: "thingone".into(),
            category: category.into(),
        }
    }

    #[test]
    fn create_then_get_returns_defaults() {
        let mut dataset = Dataset::seeded(VotePolicy::Lenient);
        let created = dataset.posts().create(new_post("p1", "react")).unwrap();
        let fetched = dataset.posts().get("p1").unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.title, "Title p1");
        assert_eq!(fetched.category, "react");
        assert_eq!(fetched.vote_score, 1);
        assert!(!fetched.deleted);
    }

    #[test]
    fn duplicate_id_is_rejected_and_first_kept() {
        let mut dataset = Dataset::seeded(VotePolicy::Lenient);
        dataset.posts().create(new_post("dup", "react")).unwrap();

        let mut second = new_post("dup", "redux");
        second.title = "Other".into();
        let err = dataset.posts().create(second).unwrap_err();

        assert_eq!(
            err,
            StoreError::DuplicateId {
                kind: RecordKind::Post,
                id: "dup".into()
            }
        );
        let kept = dataset.posts().get("dup").unwrap();
        assert_eq!(kept.title, "Title dup");
        assert_eq!(kept.category, "react");
        assert_eq!(dataset.posts().list_all().len(), 1);
    }

    #[test]
    fn get_missing_is_not_found() {
        let mut dataset = Dataset::seeded(VotePolicy::Lenient);
        assert!(matches!(
            dataset.posts().get("missing"),
            Err(StoreError::NotFound { kind: RecordKind::Post, .. })
        ));
    }

    #[test]
    fn list_by_category_filters_and_keeps_order() {
        let mut dataset = Dataset::seeded(VotePolicy::Lenient);
        let mut posts = dataset.posts();
        posts.create(new_post("p1", "react")).unwrap();
        posts.create(new_post("p2", "redux")).unwrap();
        posts.create(new_post("p3", "react")).unwrap();

        let ids: Vec<String> = posts
            .list_by_category("react")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p1", "p3"]);
        assert!(posts.list_by_category("udacity").is_empty());
    }

    #[test]
    fn list_all_includes_deleted_posts() {
        let mut dataset = Dataset::seeded(VotePolicy::Lenient);
        let mut posts = dataset.posts();
        posts.create(new_post("p1", "react")).unwrap();
        posts.create(new_post("p2", "react")).unwrap();
        posts.disable("p1").unwrap();

        let all = posts.list_all();
        assert_eq!(all.len(), 2);
        assert!(all[0].deleted);
        assert!(!all[1].deleted);
    }

    #[test]
    fn edit_only_touches_supplied_fields() {
        let mut dataset = Dataset::seeded(VotePolicy::Lenient);
        let mut posts = dataset.posts();
        posts.create(new_post("p1", "react")).unwrap();
        posts.vote("p1", "upVote").unwrap();

        let edited = posts
            .edit(
                "p1",
                PostEdit {
                    title: Some("Renamed".into()),
                    body: None,
                },
            )
            .unwrap();

        assert_eq!(edited.title, "Renamed");
        assert_eq!(edited.body, "Body p1");
        assert_eq!(edited.vote_score, 2);
        assert!(!edited.deleted);
        assert_eq!(edited.author, "thingone");
    }

    #[test]
    fn edit_missing_is_not_found() {
        let mut dataset = Dataset::seeded(VotePolicy::Lenient);
        assert!(dataset
            .posts()
            .edit("nope", PostEdit::default())
            .is_err());
    }

    #[test]
    fn votes_accumulate_by_one() {
        let mut dataset = Dataset::seeded(VotePolicy::Lenient);
        let mut posts = dataset.posts();
        posts.create(new_post("p1", "react")).unwrap();

        for _ in 0..5 {
            posts.vote("p1", "upVote").unwrap();
        }
        for _ in 0..8 {
            posts.vote("p1", "downVote").unwrap();
        }

        assert_eq!(posts.get("p1").unwrap().vote_score, 1 + 5 - 8);
    }

    #[test]
    fn unknown_vote_is_ignored_when_lenient() {
        let mut dataset = Dataset::seeded(VotePolicy::Lenient);
        let mut posts = dataset.posts();
        posts.create(new_post("p1", "react")).unwrap();

        let post = posts.vote("p1", "sideways").unwrap();
        assert_eq!(post.vote_score, 1);
    }

    #[test]
    fn unknown_vote_is_rejected_when_strict() {
        let mut dataset = Dataset::seeded(VotePolicy::Strict);
        let mut posts = dataset.posts();
        posts.create(new_post("p1", "react")).unwrap();

        assert!(matches!(
            posts.vote("p1", "sideways"),
            Err(StoreError::InvalidVoteOption(_))
        ));
        assert_eq!(posts.get("p1").unwrap().vote_score, 1);
    }

    #[test]
    fn vote_on_missing_post_is_not_found_even_with_bad_option() {
        let mut dataset = Dataset::seeded(VotePolicy::Strict);
        assert!(matches!(
            dataset.posts().vote("missing", "sideways"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn disable_is_idempotent() {
        let mut dataset = Dataset::seeded(VotePolicy::Lenient);
        let mut posts = dataset.posts();
        posts.create(new_post("p1", "react")).unwrap();

        let first = posts.disable("p1").unwrap();
        let second = posts.disable("p1").unwrap();
        assert!(first.deleted);
        assert_eq!(first, second);
    }
}
