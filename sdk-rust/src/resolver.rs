use crate::{
    gallery::{DEFAULT_MAX_PAGES, WALK_PAGE_SIZE},
    CachedUrl, ImageService, ImageServiceError, ImageServiceResult, PageQuery,
};

#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub page_size: usize,
    pub max_pages: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            page_size: WALK_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Resolve a single generated image to its url.
///
/// Local sources are consulted before the network: `latest` is the
/// `(id, url)` of the most recently generated artifact, then comes the
/// accumulated gallery cache. Only then does
/// the resolver walk the listing from the start, stopping as soon as the id
/// is found, the service reports no more pages, the cursor fails to advance,
/// a page comes back empty, or the page ceiling is reached. Exhausting the
/// walk yields [`ImageServiceError::NotFound`]; transport and protocol
/// failures surface as themselves.
pub async fn resolve_image_url(
    service: &dyn ImageService,
    id: &str,
    latest: Option<(&str, &str)>,
    cache: &[CachedUrl],
    options: &ResolveOptions,
) -> ImageServiceResult<String> {
    if let Some((latest_id, latest_url)) = latest {
        if latest_id == id {
            return Ok(latest_url.to_string());
        }
    }

    if let Some(hit) = cache.iter().find(|item| item.id == id) {
        return Ok(hit.url.clone());
    }

    let mut after_id = 0;
    let mut pages = 0;
    while pages < options.max_pages {
        let page = service
            .fetch_urls_page(PageQuery {
                after_id,
                limit: options.page_size,
                include_url: true,
            })
            .await?;

        if let Some(hit) = page.items.iter().find(|item| item.id == id) {
            return Ok(hit.url.clone());
        }

        if page.items.is_empty() || !page.has_more || page.next_after_id <= after_id {
            break;
        }
        after_id = page.next_after_id;
        pages += 1;
    }

    tracing::debug!(id, pages, "image id not found within page-walk budget");
    Err(ImageServiceError::NotFound(id.to_string()))
}
