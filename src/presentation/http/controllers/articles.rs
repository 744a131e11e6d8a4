// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::ArticleDto,
    queries::articles::{GetArticleBySlugQuery, ListArticlesQuery, RecentArticlesQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

const DEFAULT_RECENT_LIMIT: i32 = 5;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
    pub limit: Option<String>,
    pub skip: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecentParams {
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArticlesEnvelope {
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Serialize)]
pub struct ArticleEnvelope {
    pub article: ArticleDto,
}

/// Query-string values arrive as strings; coerce the numeric ones here so a
/// bad value is a 400 with the usual `{error}` body instead of an extractor
/// rejection.
fn parse_int_param(name: &str, value: Option<&str>) -> HttpResult<Option<i32>> {
    match value {
        None => Ok(None),
        Some(raw) => raw.parse::<i32>().map(Some).map_err(|_| {
            HttpError::bad_request(format!("query parameter '{name}' must be an integer"))
        }),
    }
}

pub async fn list_articles(
    State(state): State<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlesEnvelope>> {
    let query = ListArticlesQuery {
        order_by: params.order_by,
        limit: parse_int_param("limit", params.limit.as_deref())?,
        skip: parse_int_param("skip", params.skip.as_deref())?,
    };

    let articles = state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()?;

    Ok(Json(ArticlesEnvelope { articles }))
}

pub async fn get_article_by_slug(
    State(state): State<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleEnvelope>> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()?;

    Ok(Json(ArticleEnvelope { article }))
}

pub async fn recent_articles(
    State(state): State<HttpState>,
    Query(params): Query<RecentParams>,
) -> HttpResult<Json<ArticlesEnvelope>> {
    let limit = parse_int_param("limit", params.limit.as_deref())?.unwrap_or(DEFAULT_RECENT_LIMIT);

    let articles = state
        .services
        .article_queries
        .recent_articles(RecentArticlesQuery { limit })
        .await
        .into_http()?;

    Ok(Json(ArticlesEnvelope { articles }))
}
