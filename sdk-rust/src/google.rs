use std::collections::HashMap;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};

use crate::{
    api::{map_careers_response, map_image_response},
    client_utils,
    image_service::resolve_base_url,
    urls, CachedUrl, CareerSuggestions, CareersRequest, CareersResponse, GeneratedImage,
    ImageRequest, ImageResponse, ImageService, ImageServiceError, ImageServiceResult, PageQuery,
    UrlPage,
};

const PROVIDER: &str = "google";

/// Client for the Google-backed endpoint family (`{base}/image/google`).
/// Its careers endpoint derives suggestions from the full image prompt.
pub struct GoogleImageService {
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct GoogleImageServiceOptions {
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl GoogleImageService {
    #[must_use]
    pub fn new(options: GoogleImageServiceOptions) -> Self {
        let GoogleImageServiceOptions {
            base_url,
            headers,
            client,
        } = options;

        Self {
            base_url: resolve_base_url(base_url),
            client: client.unwrap_or_else(Client::new),
            headers: headers.unwrap_or_default(),
        }
    }

    fn request_headers(&self) -> ImageServiceResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                ImageServiceError::InvalidInput(format!(
                    "Invalid Google header name '{key}': {error}"
                ))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                ImageServiceError::InvalidInput(format!(
                    "Invalid Google header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

impl Default for GoogleImageService {
    fn default() -> Self {
        Self::new(GoogleImageServiceOptions::default())
    }
}

#[async_trait::async_trait]
impl ImageService for GoogleImageService {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn generate_image(&self, request: ImageRequest) -> ImageServiceResult<GeneratedImage> {
        let url = format!("{}/image/google", self.base_url);
        let headers = self.request_headers()?;

        tracing::debug!(provider = PROVIDER, "submitting image generation request");
        let response: ImageResponse =
            client_utils::post_json(&self.client, &url, &request, headers).await?;

        map_image_response(PROVIDER, response)
    }

    async fn suggest_careers(
        &self,
        request: CareersRequest,
    ) -> ImageServiceResult<CareerSuggestions> {
        let url = format!("{}/image/google/careers", self.base_url);
        let headers = self.request_headers()?;

        let response: CareersResponse =
            client_utils::post_json(&self.client, &url, &request, headers).await?;

        Ok(map_careers_response(response))
    }

    async fn fetch_urls_page(&self, query: PageQuery) -> ImageServiceResult<UrlPage> {
        let headers = self.request_headers()?;
        urls::fetch_urls_page(PROVIDER, &self.client, &self.base_url, headers, query).await
    }

    async fn fetch_urls_legacy(&self) -> ImageServiceResult<Vec<CachedUrl>> {
        let headers = self.request_headers()?;
        urls::fetch_urls_legacy(PROVIDER, &self.client, &self.base_url, headers).await
    }
}
