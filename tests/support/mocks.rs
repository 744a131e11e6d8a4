// tests/support/mocks.rs
use async_trait::async_trait;
use blog_gateway::domain::article::{Article, ArticleQueryOptions, ArticleRepository};
use blog_gateway::domain::errors::{DomainError, DomainResult};
use chrono::{TimeZone, Utc};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum RepoCall {
    All(ArticleQueryOptions),
    BySlug(String),
    Recent(i32),
}

/// In-memory stand-in for the Hygraph-backed repository. Records every call
/// so tests can assert what the router handed down.
pub struct StubArticleRepository {
    articles: Vec<Article>,
    pub calls: Mutex<Vec<RepoCall>>,
}

impl StubArticleRepository {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::with_articles(Vec::new())
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleRepository for StubArticleRepository {
    async fn get_all(&self, options: ArticleQueryOptions) -> DomainResult<Vec<Article>> {
        self.calls
            .lock()
            .unwrap()
            .push(RepoCall::All(options.clone()));

        // Honour the page size the way the upstream store would.
        let mut articles = self.articles.clone();
        if let Some(first) = options.first {
            articles.truncate(first.max(0) as usize);
        }
        Ok(articles)
    }

    async fn get_by_slug(&self, slug: &str) -> DomainResult<Option<Article>> {
        self.calls
            .lock()
            .unwrap()
            .push(RepoCall::BySlug(slug.to_string()));
        Ok(self.articles.iter().find(|a| a.slug == slug).cloned())
    }

    async fn get_recent(&self, limit: i32) -> DomainResult<Vec<Article>> {
        self.calls.lock().unwrap().push(RepoCall::Recent(limit));
        let mut articles = self.articles.clone();
        articles.truncate(limit.max(0) as usize);
        Ok(articles)
    }
}

/// Fails every operation with a transport error, for exercising the
/// upstream-failure path.
pub struct FailingArticleRepository;

#[async_trait]
impl ArticleRepository for FailingArticleRepository {
    async fn get_all(&self, _options: ArticleQueryOptions) -> DomainResult<Vec<Article>> {
        Err(transport_error())
    }

    async fn get_by_slug(&self, _slug: &str) -> DomainResult<Option<Article>> {
        Err(transport_error())
    }

    async fn get_recent(&self, _limit: i32) -> DomainResult<Vec<Article>> {
        Err(transport_error())
    }
}

fn transport_error() -> DomainError {
    DomainError::Transport("HTTP 503: Service Unavailable. upstream offline".into())
}

/// Minimal article fixture; fields beyond slug and title stay at their
/// simplest valid values.
pub fn article(slug: &str, title: &str) -> Article {
    Article {
        id: format!("id-{slug}"),
        title: title.to_string(),
        content: None,
        excerpt: Some(format!("Excerpt of {title}")),
        slug: slug.to_string(),
        published_at: Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
        updated_at: None,
        featured_image: None,
        author: None,
    }
}
