use std::sync::Arc;

use tokio::sync::Mutex;

use super::collection::Collection;
use crate::shared::blog::{Category, Comment, EntityId, Post, User};

/// The whole data set behind one lock.
///
/// Handlers hold the lock for the full read or write and release it when the
/// guard drops, on every return path.
pub type SharedStore = Arc<Mutex<BlogStore>>;

#[derive(Debug, Clone, Default)]
pub struct BlogStore {
    pub users: Collection<User>,
    pub posts: Collection<Post>,
    pub categories: Collection<Category>,
    pub comments: Collection<Comment>,
}

impl BlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// Published posts, oldest first.
    pub fn published_posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|post| post.is_published)
    }

    /// First post whose slug matches exactly. Drafts are included.
    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.find(|post| post.slug == slug)
    }

    /// Comments on `post_id`, oldest first. Empty when the post does not exist.
    pub fn comments_for_post(&self, post_id: EntityId) -> impl Iterator<Item = &Comment> {
        self.comments
            .iter()
            .filter(move |comment| comment.post_id == post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> Post {
        Post::draft(1, title.to_string(), "Body".to_string())
    }

    #[test]
    fn test_published_posts_skip_drafts() {
        let mut store = BlogStore::new();
        store.posts.insert(post("First"));
        let second = store.posts.insert(post("Second"));
        store.posts.insert(post("Third"));

        assert_eq!(store.published_posts().count(), 0);
        store.posts.update(second, |p| p.is_published = true);

        let titles: Vec<_> = store.published_posts().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Second"]);
    }

    #[test]
    fn test_post_by_slug_returns_first_duplicate() {
        let mut store = BlogStore::new();
        let first = store.posts.insert(post("Same Title"));
        store.posts.insert(post("Same Title"));

        assert_eq!(store.post_by_slug("same-title").map(|p| p.id), Some(first));
        assert!(store.post_by_slug("Same Title").is_none());
    }

    #[test]
    fn test_comments_for_post() {
        let mut store = BlogStore::new();
        for (post_id, content) in [(1, "a"), (2, "b"), (1, "c")] {
            store.comments.insert(Comment {
                id: 0,
                post_id,
                user_id: 1,
                content: content.to_string(),
                likes: 0,
                is_reported: false,
            });
        }

        let contents: Vec<_> = store
            .comments_for_post(1)
            .map(|c| c.content.as_str())
            .collect();
        assert_eq!(contents, ["a", "c"]);
        assert_eq!(store.comments_for_post(42).count(), 0);
    }

    #[tokio::test]
    async fn test_counters_are_per_collection() {
        let store = BlogStore::new().shared();
        let mut guard = store.lock().await;
        assert_eq!(guard.posts.insert(post("p")), 1);
        assert_eq!(
            guard.categories.insert(Category { id: 0, name: "c".into() }),
            1
        );
        assert_eq!(guard.posts.insert(post("q")), 2);
    }
}
