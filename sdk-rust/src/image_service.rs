use crate::{
    CachedUrl, CareerSuggestions, CareersRequest, GeneratedImage, ImageRequest,
    ImageServiceResult, PageQuery, UrlPage,
};

/// Production deployment of the image service.
pub const DEFAULT_BASE_URL: &str =
    "https://matchtonavenir-api-bxd2h0dnd3h9d2de.francecentral-01.azurewebsites.net/api";

/// Environment variable overriding the base url for every service built
/// without an explicit one.
pub const API_URL_ENV: &str = "AVENIR_API_URL";

/// Resolve the base url from an explicit option, the environment, or the
/// production default, with any trailing slash removed.
pub(crate) fn resolve_base_url(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var(API_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

#[async_trait::async_trait]
pub trait ImageService: Send + Sync {
    fn provider(&self) -> &'static str;
    /// Generate one avatar image from a prompt. The returned artifact has
    /// its identifier already normalized.
    async fn generate_image(&self, request: ImageRequest) -> ImageServiceResult<GeneratedImage>;
    /// Ask the service for career suggestions matching the user's answers.
    async fn suggest_careers(
        &self,
        request: CareersRequest,
    ) -> ImageServiceResult<CareerSuggestions>;
    /// Fetch one page of the cursor-paginated url listing.
    async fn fetch_urls_page(&self, query: PageQuery) -> ImageServiceResult<UrlPage>;
    /// Fetch the legacy, non-paginated url listing.
    async fn fetch_urls_legacy(&self) -> ImageServiceResult<Vec<CachedUrl>>;
}
