mod get_by_slug;
mod list;
mod recent;
mod service;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use recent::RecentArticlesQuery;
pub use service::ArticleQueryService;
