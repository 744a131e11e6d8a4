use std::sync::Arc;

use crate::{
    application::queries::articles::ArticleQueryService, domain::article::ArticleRepository,
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(article_repo));
        Self { article_queries }
    }
}
