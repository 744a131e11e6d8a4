use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A published blog article as exposed by this gateway. Articles are owned
/// by the upstream content store and are read-only here; the store also
/// enforces slug uniqueness.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: String,
    pub title: String,
    /// The full body. Listing queries do not fetch it, only the
    /// by-slug lookup does.
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub slug: String,
    pub published_at: DateTime<Utc>,
    /// Absent on the recent-articles projection.
    pub updated_at: Option<DateTime<Utc>>,
    pub featured_image: Option<FeaturedImage>,
    pub author: Option<Author>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedImage {
    pub url: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Per-call listing options, built fresh from query-string parameters.
/// Values are forwarded to the content store verbatim; it enforces its own
/// limits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQueryOptions {
    pub order_by: Option<String>,
    pub first: Option<i32>,
    pub skip: Option<i32>,
}

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// List articles. A missing collection upstream yields an empty vec,
    /// never an error.
    async fn get_all(&self, options: ArticleQueryOptions) -> DomainResult<Vec<Article>>;

    /// Exact-match lookup. `Ok(None)` when no article carries the slug;
    /// that is a normal outcome, not a failure.
    async fn get_by_slug(&self, slug: &str) -> DomainResult<Option<Article>>;

    /// The `limit` most recently published articles, newest first.
    async fn get_recent(&self, limit: i32) -> DomainResult<Vec<Article>>;
}
