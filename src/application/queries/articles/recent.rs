use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub const MAX_RECENT_LIMIT: i32 = 50;

#[derive(Debug, Clone, Copy)]
pub struct RecentArticlesQuery {
    pub limit: i32,
}

impl ArticleQueryService {
    /// The most recently published articles, newest first. The limit must
    /// stay within [1, 50]; out-of-range values are rejected before any
    /// upstream call is made.
    pub async fn recent_articles(
        &self,
        query: RecentArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let limit = query.limit;
        if limit <= 0 || limit > MAX_RECENT_LIMIT {
            let err = ApplicationError::validation("limit must be between 1 and 50");
            tracing::error!(error = %err, limit, "recent articles rejected");
            return Err(err);
        }

        let articles = self.repo.get_recent(limit).await.inspect_err(|err| {
            tracing::error!(error = %err, limit, "fetching recent articles failed");
        })?;

        Ok(articles.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{Article, ArticleQueryOptions, ArticleRepository};
    use crate::domain::errors::DomainResult;
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Repository stub that panics on contact, proving validation fires
    /// before any upstream call.
    struct UnreachableRepo;

    #[async_trait]
    impl ArticleRepository for UnreachableRepo {
        async fn get_all(&self, _options: ArticleQueryOptions) -> DomainResult<Vec<Article>> {
            panic!("repository must not be reached");
        }

        async fn get_by_slug(&self, _slug: &str) -> DomainResult<Option<Article>> {
            panic!("repository must not be reached");
        }

        async fn get_recent(&self, _limit: i32) -> DomainResult<Vec<Article>> {
            panic!("repository must not be reached");
        }
    }

    struct EmptyRepo;

    #[async_trait]
    impl ArticleRepository for EmptyRepo {
        async fn get_all(&self, _options: ArticleQueryOptions) -> DomainResult<Vec<Article>> {
            Ok(Vec::new())
        }

        async fn get_by_slug(&self, _slug: &str) -> DomainResult<Option<Article>> {
            Ok(None)
        }

        async fn get_recent(&self, _limit: i32) -> DomainResult<Vec<Article>> {
            Ok(Vec::new())
        }
    }

    fn service() -> ArticleQueryService {
        ArticleQueryService::new(Arc::new(UnreachableRepo))
    }

    #[tokio::test]
    async fn rejects_zero_and_negative_limits() {
        for limit in [0, -1, -50] {
            let err = service()
                .recent_articles(RecentArticlesQuery { limit })
                .await
                .unwrap_err();
            assert!(matches!(err, ApplicationError::Validation(_)), "limit {limit}");
        }
    }

    #[tokio::test]
    async fn rejects_limits_above_fifty() {
        for limit in [51, 100, i32::MAX] {
            let err = service()
                .recent_articles(RecentArticlesQuery { limit })
                .await
                .unwrap_err();
            assert!(matches!(err, ApplicationError::Validation(_)), "limit {limit}");
        }
    }

    #[tokio::test]
    async fn accepts_the_inclusive_bounds() {
        let service = ArticleQueryService::new(Arc::new(EmptyRepo));
        for limit in [1, 5, 50] {
            let articles = service
                .recent_articles(RecentArticlesQuery { limit })
                .await
                .unwrap();
            assert!(articles.is_empty());
        }
    }
}
