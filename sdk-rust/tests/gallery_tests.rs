use std::sync::Arc;

use avenir_sdk::{
    avenir_sdk_test::MockImageService, CachedUrl, GalleryPager, GalleryPagerOptions,
    ImageServiceError, UrlPage,
};

fn item(id: u64) -> CachedUrl {
    CachedUrl {
        id: id.to_string(),
        url: format!("https://cdn/img-{id}.png"),
    }
}

fn page(ids: &[u64], has_more: bool, next_after_id: u64) -> UrlPage {
    UrlPage {
        items: ids.iter().copied().map(item).collect(),
        has_more,
        next_after_id,
    }
}

#[tokio::test]
async fn stops_when_the_cursor_does_not_advance() {
    let service = Arc::new(MockImageService::new());
    // A misbehaving server: items, hasMore=true, but a cursor stuck at 0.
    service.enqueue_page(Ok(page(&[1, 2], true, 0)));
    service.enqueue_page(Ok(page(&[1, 2], true, 0)));

    let mut pager = GalleryPager::new(service.clone());
    let added = pager.load_next_page().await.unwrap();
    assert_eq!(added, 2);
    assert!(!pager.has_more());

    // Further loads are no-ops; the second enqueued page stays unconsumed.
    let added = pager.load_next_page().await.unwrap();
    assert_eq!(added, 0);
    assert_eq!(service.page_fetch_count(), 1);
}

#[tokio::test]
async fn full_walk_respects_the_page_ceiling() {
    let service = Arc::new(MockImageService::new());
    for n in 0..5u64 {
        service.enqueue_page(Ok(page(&[n + 1], true, n + 1)));
    }

    let mut pager = GalleryPager::with_options(
        service.clone(),
        GalleryPagerOptions {
            max_pages: 3,
            ..GalleryPagerOptions::default()
        },
    );
    let items = pager.load_all().await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(service.page_fetch_count(), 3);
}

#[tokio::test]
async fn pages_sharing_an_id_are_deduplicated() {
    let service = Arc::new(MockImageService::new());
    service.enqueue_page(Ok(page(&[1, 2, 3], true, 3)));
    service.enqueue_page(Ok(page(&[3, 4], false, 5)));

    let mut pager = GalleryPager::new(service);
    pager.load_next_page().await.unwrap();
    pager.load_next_page().await.unwrap();

    let ids: Vec<&str> = pager.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn items_without_an_id_deduplicate_by_url() {
    let service = Arc::new(MockImageService::new());
    let unkeyed = CachedUrl {
        id: String::new(),
        url: "https://cdn/legacy.png".to_string(),
    };
    service.enqueue_page(Ok(UrlPage {
        items: vec![unkeyed.clone(), unkeyed],
        has_more: false,
        next_after_id: 1,
    }));

    let mut pager = GalleryPager::new(service);
    pager.load_next_page().await.unwrap();
    assert_eq!(pager.items().len(), 1);
}

#[tokio::test]
async fn an_empty_page_ends_pagination() {
    let service = Arc::new(MockImageService::new());
    let first: Vec<u64> = (1..=12).collect();
    service.enqueue_page(Ok(page(&first, true, 12)));
    service.enqueue_page(Ok(page(&[], true, 13)));

    let mut pager = GalleryPager::new(service.clone());
    pager.load_next_page().await.unwrap();
    pager.load_next_page().await.unwrap();

    assert_eq!(pager.items().len(), 12);
    assert!(!pager.has_more());
    assert_eq!(service.page_fetch_count(), 2);
}

#[tokio::test]
async fn full_walk_with_nothing_accumulated_is_an_error() {
    let service = Arc::new(MockImageService::new());
    service.enqueue_page(Ok(page(&[], false, 0)));

    let mut pager = GalleryPager::new(service);
    let error = pager.load_all().await.unwrap_err();
    assert!(matches!(error, ImageServiceError::Invariant(..)));
}

#[tokio::test]
async fn load_next_page_passes_the_cursor_along() {
    let service = Arc::new(MockImageService::new());
    service.enqueue_page(Ok(page(&[1, 2], true, 2)));
    service.enqueue_page(Ok(page(&[3], false, 3)));

    let mut pager = GalleryPager::new(service.clone());
    pager.load_next_page().await.unwrap();
    pager.load_next_page().await.unwrap();

    let queries = service.tracked_page_queries();
    assert_eq!(queries[0].after_id, 0);
    assert_eq!(queries[1].after_id, 2);
}
