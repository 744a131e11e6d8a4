use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

#[derive(Debug, Clone)]
pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Fetch a single article by its slug. An empty slug is a caller error;
    /// an absent slug is reported as not-found so the HTTP layer can answer
    /// with a 404.
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = query.slug;
        if slug.trim().is_empty() {
            let err =
                ApplicationError::validation("slug parameter is required and cannot be empty");
            tracing::error!(error = %err, "get article by slug rejected");
            return Err(err);
        }

        let article = self.repo.get_by_slug(&slug).await.inspect_err(|err| {
            tracing::error!(error = %err, slug = %slug, "fetching article by slug failed");
        })?;

        match article {
            Some(article) => Ok(article.into()),
            None => {
                // A normal outcome, logged as a warning rather than an error.
                tracing::warn!(slug = %slug, "article not found");
                Err(ApplicationError::not_found(format!(
                    "article with slug '{slug}' not found"
                )))
            }
        }
    }
}
