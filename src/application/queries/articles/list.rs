use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleQueryOptions,
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub order_by: Option<String>,
    pub limit: Option<i32>,
    pub skip: Option<i32>,
}

impl ArticleQueryService {
    /// List articles. Ordering, page size and offset are forwarded to the
    /// content store untouched; it enforces its own bounds.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let options = ArticleQueryOptions {
            order_by: query.order_by.clone(),
            first: query.limit,
            skip: query.skip,
        };

        let articles = self.repo.get_all(options).await.inspect_err(|err| {
            tracing::error!(
                error = %err,
                order_by = ?query.order_by,
                limit = ?query.limit,
                skip = ?query.skip,
                "listing articles failed"
            );
        })?;

        Ok(articles.into_iter().map(Into::into).collect())
    }
}
