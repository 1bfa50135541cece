//! Article library: categories and articles.

use super::ack;
use crate::client::ApiClient;
use crate::request::{path_segment, RequestSpec};
use haven_shared::library::{Article, Category, Library, NewArticle};
use haven_shared::{ApiError, ApiResponse, Outcome};
use tokio_util::sync::CancellationToken;

impl ApiClient {
    pub async fn list_categories(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Outcome<Vec<Category>>, ApiError> {
        self.execute(
            RequestSpec::get("categories")
                .cancel_on(cancel)
                .fallback("Categories loaded"),
        )
        .await
    }

    pub async fn list_articles(
        &self,
        category: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Outcome<Vec<Article>>, ApiError> {
        self.execute(
            RequestSpec::get("articles")
                .query_opt("category", category)
                .cancel_on(cancel)
                .fallback("Articles loaded"),
        )
        .await
    }

    pub async fn get_article(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<Outcome<Article>, ApiError> {
        self.execute(
            RequestSpec::get(format!("articles/{}", path_segment(id)?))
                .cancel_on(cancel)
                .fallback("Article loaded"),
        )
        .await
    }

    pub async fn create_article(
        &self,
        article: &NewArticle,
        cancel: &CancellationToken,
    ) -> Result<Outcome<Article>, ApiError> {
        let spec = RequestSpec::post("articles")
            .json(article)?
            .cancel_on(cancel)
            .fallback("Article created");
        self.execute(spec).await
    }

    pub async fn delete_article(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<Outcome<()>, ApiError> {
        let spec = RequestSpec::delete(format!("articles/{}", path_segment(id)?))
            .cancel_on(cancel)
            .fallback("Article deleted");
        ack(self.execute(spec).await)
    }

    /// Categories and articles fetched concurrently under one token.
    ///
    /// Cancelled if the token fired; otherwise the first failure (categories
    /// before articles) is returned.
    pub async fn load_library(
        &self,
        category: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Outcome<Library>, ApiError> {
        let (categories, articles) = tokio::join!(
            self.list_categories(cancel),
            self.list_articles(category, cancel)
        );

        if cancel.is_cancelled() {
            return Ok(Outcome::Cancelled);
        }

        match (categories?, articles?) {
            (Outcome::Success(categories), Outcome::Success(articles)) => {
                Ok(Outcome::Success(ApiResponse::new(
                    articles.code,
                    articles.message,
                    Library {
                        categories: categories.data,
                        articles: articles.data,
                    },
                )))
            }
            // A partial library is never shown; either leg cancelling
            // cancels the whole load.
            (Outcome::Cancelled, Outcome::Success(_))
            | (Outcome::Success(_), Outcome::Cancelled)
            | (Outcome::Cancelled, Outcome::Cancelled) => Ok(Outcome::Cancelled),
        }
    }
}
