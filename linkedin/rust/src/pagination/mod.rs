//! Pagination handling for Rest.li collections.
//!
//! Collection responses carry a `paging` object with relation links. Link
//! hrefs include the versioned API prefix (`/rest/...`, or `/v2/...` on
//! legacy endpoints), which has to be stripped before the href can be
//! passed back to [`Session::get`].
//!
//! See: https://learn.microsoft.com/en-us/linkedin/shared/api-guide/concepts/pagination

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::LinkedInResult;
use crate::session::Session;

/// Origin that absolute link hrefs may carry.
const API_ORIGIN: &str = "https://api.linkedin.com";

/// Path segments that prefix link hrefs but are already part of the base URL.
const API_PATH_PREFIXES: [&str; 2] = ["/rest", "/v2"];

const REL_NEXT: &str = "next";
const REL_PREV: [&str; 2] = ["prev", "previous"];

/// A relation link inside `paging.links`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Media type, e.g. `application/json`.
    #[serde(rename = "type")]
    pub link_type: String,
    pub rel: String,
    pub href: String,
}

/// Pagination metadata of a collection response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
    pub start: u32,
    pub count: u32,
    /// Not every finder reports a total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    pub links: Vec<Link>,
}

impl Paging {
    /// Request path of the next page, or `None` at the end of the collection.
    pub fn next_page_url(&self) -> Option<String> {
        self.find_link(|rel| rel == REL_NEXT)
    }

    /// Request path of the previous page, or `None` on the first page.
    pub fn prev_page_url(&self) -> Option<String> {
        self.find_link(|rel| REL_PREV.contains(&rel))
    }

    fn find_link(&self, matches: impl Fn(&str) -> bool) -> Option<String> {
        self.links
            .iter()
            .find(|link| matches(link.rel.as_str()))
            .map(|link| strip_api_prefix(&link.href).to_string())
    }
}

/// Removes the API origin and versioned path segment from a link href.
///
/// Only strips at a segment boundary, so `/restaurants` is left alone.
pub fn strip_api_prefix(href: &str) -> &str {
    let path = href.strip_prefix(API_ORIGIN).unwrap_or(href);

    for prefix in API_PATH_PREFIXES {
        if let Some(rest) = path.strip_prefix(prefix) {
            if rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') {
                return rest;
            }
        }
    }

    path
}

/// One page of a Rest.li collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub paging: Paging,
    #[serde(default = "Vec::new")]
    pub elements: Vec<T>,
}

impl<T> Page<T> {
    pub fn next_page_url(&self) -> Option<String> {
        self.paging.next_page_url()
    }

    pub fn prev_page_url(&self) -> Option<String> {
        self.paging.prev_page_url()
    }

    /// Returns true if there is a next page.
    pub fn has_next(&self) -> bool {
        self.paging.links.iter().any(|link| link.rel == REL_NEXT)
    }

    /// Returns the number of elements in this page.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consumes the page and returns the elements.
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

/// Walks a collection page by page, following `next` links.
pub struct PageIterator<'a, T> {
    session: &'a Session,
    next_path: Option<String>,
    pages_fetched: usize,
    _phantom: std::marker::PhantomData<T>,
}

impl<'a, T: DeserializeOwned> PageIterator<'a, T> {
    /// Creates an iterator starting at `first_path`.
    pub fn new(session: &'a Session, first_path: impl Into<String>) -> Self {
        Self {
            session,
            next_path: Some(first_path.into()),
            pages_fetched: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Fetches the next page, or `None` once the collection is exhausted.
    ///
    /// Non-2xx responses fail with `AuthError::UnexpectedStatus`. A failed
    /// fetch keeps the cursor, so calling again retries the same page.
    pub async fn next_page(&mut self) -> LinkedInResult<Option<Page<T>>> {
        let Some(path) = self.next_path.clone() else {
            return Ok(None);
        };

        let page: Page<T> = self.session.get_json(&path).await?;
        self.pages_fetched += 1;

        self.next_path = match page.next_page_url() {
            Some(next) if next == path => {
                warn!(path = %path, "next link points at the current page, stopping");
                None
            }
            next => next,
        };

        debug!(
            page = self.pages_fetched,
            elements = page.len(),
            has_next = self.next_path.is_some(),
            "fetched page"
        );

        Ok(Some(page))
    }

    /// Collects the elements of every remaining page.
    pub async fn collect_all(mut self) -> LinkedInResult<Vec<T>> {
        let mut all = Vec::new();

        while let Some(page) = self.next_page().await? {
            all.extend(page.into_elements());
        }

        Ok(all)
    }

    /// Returns true if there are more pages.
    pub fn has_more(&self) -> bool {
        self.next_path.is_some()
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}
