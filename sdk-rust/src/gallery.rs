use std::collections::HashSet;
use std::sync::Arc;

use crate::{CachedUrl, ImageService, ImageServiceError, ImageServiceResult};

/// Page size for interactive paging.
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Page size for full-gallery and lookup walks.
pub const WALK_PAGE_SIZE: usize = 100;
/// Hard ceiling on pages fetched by one walk, so a server that never stops
/// reporting `hasMore` cannot loop us forever.
pub const DEFAULT_MAX_PAGES: usize = 500;

/// Opaque-to-the-client pagination watermark plus continuation flag, both
/// supplied by the service. Successive pages must use a strictly increasing
/// `after_id` or pagination is considered exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    pub after_id: u64,
    pub has_more: bool,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self {
            after_id: 0,
            has_more: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryPagerOptions {
    pub page_size: usize,
    pub walk_page_size: usize,
    pub max_pages: usize,
    pub include_url: bool,
}

impl Default for GalleryPagerOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            walk_page_size: WALK_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            include_url: true,
        }
    }
}

/// Pages through the url listing, de-duplicating items by id (or by url when
/// an item has no id) while preserving first-seen order.
///
/// Load operations take `&mut self`, so a second fetch cannot start while one
/// is outstanding.
pub struct GalleryPager {
    service: Arc<dyn ImageService>,
    options: GalleryPagerOptions,
    items: Vec<CachedUrl>,
    seen: HashSet<String>,
    cursor: PaginationCursor,
}

impl GalleryPager {
    #[must_use]
    pub fn new(service: Arc<dyn ImageService>) -> Self {
        Self::with_options(service, GalleryPagerOptions::default())
    }

    #[must_use]
    pub fn with_options(service: Arc<dyn ImageService>, options: GalleryPagerOptions) -> Self {
        Self {
            service,
            options,
            items: Vec::new(),
            seen: HashSet::new(),
            cursor: PaginationCursor::default(),
        }
    }

    /// The accumulated, de-duplicated collection, in first-seen order.
    #[must_use]
    pub fn items(&self) -> &[CachedUrl] {
        &self.items
    }

    #[must_use]
    pub fn cursor(&self) -> PaginationCursor {
        self.cursor
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor.has_more
    }

    /// Drop everything accumulated and rewind the cursor to the start.
    pub fn reset(&mut self) {
        self.items.clear();
        self.seen.clear();
        self.cursor = PaginationCursor::default();
    }

    fn merge(&mut self, incoming: Vec<CachedUrl>) -> usize {
        let mut added = 0;
        for item in incoming {
            let key = if item.id.is_empty() {
                item.url.clone()
            } else {
                item.id.clone()
            };
            if !self.seen.insert(key) {
                continue;
            }
            self.items.push(item);
            added += 1;
        }
        added
    }

    /// Fetch and merge one page at the current cursor, using `page_size`.
    /// Returns the number of new items. A no-op once pagination is exhausted.
    pub async fn load_next_page(&mut self) -> ImageServiceResult<usize> {
        if !self.cursor.has_more {
            return Ok(0);
        }
        self.fetch_and_advance(self.options.page_size).await
    }

    async fn fetch_and_advance(&mut self, limit: usize) -> ImageServiceResult<usize> {
        let query = crate::PageQuery {
            after_id: self.cursor.after_id,
            limit,
            include_url: self.options.include_url,
        };
        let page = self.service.fetch_urls_page(query).await?;
        let empty_page = page.items.is_empty();
        let added = self.merge(page.items);

        // A cursor that fails to strictly advance, or an empty page, ends
        // pagination no matter what the continuation flag claims.
        if page.next_after_id <= self.cursor.after_id || empty_page {
            self.cursor.has_more = false;
        } else {
            self.cursor.after_id = page.next_after_id;
            self.cursor.has_more = page.has_more;
        }
        Ok(added)
    }

    /// Walk the whole listing from the start with `walk_page_size`, bounded
    /// by `max_pages`. Errors when the walk ends with nothing accumulated.
    pub async fn load_all(&mut self) -> ImageServiceResult<&[CachedUrl]> {
        self.reset();

        let mut pages = 0;
        while self.cursor.has_more && pages < self.options.max_pages {
            self.fetch_and_advance(self.options.walk_page_size).await?;
            pages += 1;
        }

        if self.items.is_empty() {
            return Err(ImageServiceError::Invariant(
                self.service.provider(),
                "La réponse ne contient pas de liste d'URL.".to_string(),
            ));
        }
        Ok(&self.items)
    }
}
