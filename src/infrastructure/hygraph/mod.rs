pub mod client;
pub mod repository;

pub use client::{GraphqlExecutor, HygraphClient};
pub use repository::HygraphArticleRepository;
