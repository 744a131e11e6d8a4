use std::sync::Arc;

use crate::domain::article::{Article, ArticleQueryOptions, ArticleRepository, Author, FeaturedImage};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::hygraph::client::GraphqlExecutor;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};

const DEFAULT_ORDER: &str = "publishedAt_DESC";

/// Listing projection: no body, cover image included.
const GET_ALL_ARTICLES: &str = "\
query GetAllArticles($orderBy: PostOrderByInput, $first: Int, $skip: Int) {
  posts(orderBy: $orderBy, first: $first, skip: $skip) {
    id
    title
    excerpt
    slug
    publishedAt
    updatedAt
    coverImage {
      url
      altText
    }
    author {
      name
      picture {
        url
      }
    }
  }
}";

/// Detail projection: the only query that fetches the body.
const GET_ARTICLE_BY_SLUG: &str = "\
query GetArticleBySlug($slug: String!) {
  post(where: { slug: $slug }) {
    id
    title
    content
    excerpt
    slug
    publishedAt
    updatedAt
    author {
      name
      picture {
        url
      }
    }
  }
}";

/// Recency projection: ordering is hardwired, no body or update stamp.
const GET_RECENT_ARTICLES: &str = "\
query GetRecentArticles($limit: Int!) {
  posts(orderBy: publishedAt_DESC, first: $limit) {
    id
    title
    excerpt
    slug
    publishedAt
    author {
      name
      picture {
        url
      }
    }
  }
}";

/// Raw CMS field shape, mapped into the stable domain shape below.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPost {
    id: String,
    title: String,
    content: Option<String>,
    excerpt: Option<String>,
    slug: String,
    published_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    cover_image: Option<RawCoverImage>,
    author: Option<RawAuthor>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCoverImage {
    url: String,
    alt_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAuthor {
    name: String,
    picture: Option<RawPicture>,
}

#[derive(Debug, Deserialize)]
struct RawPicture {
    url: String,
}

#[derive(Debug, Default, Deserialize)]
struct PostsData {
    #[serde(default)]
    posts: Vec<RawPost>,
}

#[derive(Debug, Default, Deserialize)]
struct PostData {
    post: Option<RawPost>,
}

impl From<RawPost> for Article {
    fn from(raw: RawPost) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            content: raw.content,
            excerpt: raw.excerpt,
            slug: raw.slug,
            published_at: raw.published_at,
            updated_at: raw.updated_at,
            featured_image: raw.cover_image.map(|image| FeaturedImage {
                url: image.url,
                alt: image.alt_text,
            }),
            author: raw.author.map(|author| Author {
                name: author.name,
                avatar_url: author.picture.map(|picture| picture.url),
            }),
        }
    }
}

pub struct HygraphArticleRepository {
    client: Arc<dyn GraphqlExecutor>,
}

impl HygraphArticleRepository {
    pub fn new(client: Arc<dyn GraphqlExecutor>) -> Self {
        Self { client }
    }

    fn parse<T: serde::de::DeserializeOwned + Default>(data: Value) -> DomainResult<T> {
        // An absent collection upstream comes back as null; treat it as
        // the empty shape rather than a failure.
        if data.is_null() {
            return Ok(T::default());
        }
        serde_json::from_value(data)
            .map_err(|err| DomainError::RemoteQuery(format!("unexpected response shape: {err}")))
    }
}

#[async_trait]
impl ArticleRepository for HygraphArticleRepository {
    async fn get_all(&self, options: ArticleQueryOptions) -> DomainResult<Vec<Article>> {
        let variables = json!({
            "orderBy": options.order_by.as_deref().unwrap_or(DEFAULT_ORDER),
            "first": options.first,
            "skip": options.skip,
        });

        let data = self
            .client
            .execute(GET_ALL_ARTICLES, variables)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to get all articles"))?;

        let data: PostsData = Self::parse(data)?;
        Ok(data.posts.into_iter().map(Into::into).collect())
    }

    async fn get_by_slug(&self, slug: &str) -> DomainResult<Option<Article>> {
        let data = self
            .client
            .execute(GET_ARTICLE_BY_SLUG, json!({ "slug": slug }))
            .await
            .inspect_err(
                |err| tracing::error!(error = %err, slug, "failed to get article by slug"),
            )?;

        let data: PostData = Self::parse(data)?;
        match data.post {
            Some(post) => Ok(Some(post.into())),
            None => {
                tracing::warn!(slug, "no article carries this slug");
                Ok(None)
            }
        }
    }

    async fn get_recent(&self, limit: i32) -> DomainResult<Vec<Article>> {
        let data = self
            .client
            .execute(GET_RECENT_ARTICLES, json!({ "limit": limit }))
            .await
            .inspect_err(|err| tracing::error!(error = %err, limit, "failed to get recent articles"))?;

        let data: PostsData = Self::parse(data)?;
        Ok(data.posts.into_iter().map(Into::into).collect())
    }
}
