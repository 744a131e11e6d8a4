use crate::domain::article::{Article, Author, FeaturedImage};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stable wire shape of an article. Optional fields are omitted rather than
/// serialised as null so projections that never fetched them stay compact.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub slug: String,
    pub published_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<FeaturedImageDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedImageDto {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<AvatarDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvatarDto {
    pub url: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            excerpt: article.excerpt,
            slug: article.slug,
            published_at: article.published_at,
            updated_at: article.updated_at,
            featured_image: article.featured_image.map(Into::into),
            author: article.author.map(Into::into),
        }
    }
}

impl From<FeaturedImage> for FeaturedImageDto {
    fn from(image: FeaturedImage) -> Self {
        Self {
            url: image.url,
            alt: image.alt,
        }
    }
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            name: author.name,
            avatar: author.avatar_url.map(|url| AvatarDto { url }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Article {
        Article {
            id: "ckadqdbhk00go0148zzxh4bbq".into(),
            title: "Union Types and Sortable Relations".into(),
            content: None,
            excerpt: Some("A look at unions.".into()),
            slug: "union-types".into(),
            published_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            updated_at: None,
            featured_image: Some(FeaturedImage {
                url: "https://media.example/cover.png".into(),
                alt: None,
            }),
            author: Some(Author {
                name: "Ada".into(),
                avatar_url: Some("https://media.example/ada.png".into()),
            }),
        }
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let json = serde_json::to_value(ArticleDto::from(sample())).unwrap();

        assert_eq!(json["slug"], "union-types");
        assert_eq!(json["publishedAt"], "2024-03-01T09:00:00Z");
        assert!(json.get("content").is_none());
        assert!(json.get("updatedAt").is_none());
        assert!(json["featuredImage"].get("alt").is_none());
        assert_eq!(json["author"]["avatar"]["url"], "https://media.example/ada.png");
    }
}
