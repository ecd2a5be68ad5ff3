//! Posts operations.

use tracing::instrument;

use crate::encoding::encode_url;
use crate::errors::LinkedInResult;
use crate::pagination::{Page, PageIterator};
use crate::session::Session;
use crate::types::{Post, SortBy};

/// Service for posts.
pub struct PostsService<'a> {
    session: &'a Session,
}

impl<'a> PostsService<'a> {
    /// Creates a new posts service.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists the first page of posts by `author` (an organization or person URN).
    #[instrument(skip(self, author), fields(author = %author))]
    pub async fn list_by_author(
        &self,
        author: &str,
        count: u32,
        sort_by: SortBy,
    ) -> LinkedInResult<Page<Post>> {
        self.session
            .get_json(&by_author_path(author, count, sort_by))
            .await
    }

    /// Iterates every page of posts by `author`.
    pub fn pages_by_author(
        &self,
        author: &str,
        count: u32,
        sort_by: SortBy,
    ) -> PageIterator<'a, Post> {
        PageIterator::new(self.session, by_author_path(author, count, sort_by))
    }
}

fn by_author_path(author: &str, count: u32, sort_by: SortBy) -> String {
    format!(
        "/posts?q=author&author={}&count={}&sortBy={}",
        encode_url(author),
        count,
        sort_by.as_str()
    )
}
