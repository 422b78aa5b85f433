//! Url-listing fetches shared by every provider. Both endpoint families
//! serve `{base}/image/urls/stream` and the legacy `{base}/image/urls`.

use reqwest::{header::HeaderMap, Client};
use serde_json::Value;

use crate::{client_utils, normalize, CachedUrl, ImageServiceResult, PageQuery, UrlPage};

pub(crate) async fn fetch_urls_page(
    provider: &'static str,
    client: &Client,
    base_url: &str,
    headers: HeaderMap,
    query: PageQuery,
) -> ImageServiceResult<UrlPage> {
    let url = format!(
        "{base_url}/image/urls/stream?afterId={}&limit={}&includeUrl={}",
        query.after_id, query.limit, query.include_url
    );

    let data: Value = client_utils::get_json(client, &url, headers).await?;
    let page = normalize::normalize_url_page(provider, &data, query.after_id, query.limit)?;

    tracing::info!(
        after_id = query.after_id,
        limit = query.limit,
        received = page.items.len(),
        next_after_id = page.next_after_id,
        has_more = page.has_more,
        "image/urls/stream page fetched"
    );

    Ok(page)
}

pub(crate) async fn fetch_urls_legacy(
    provider: &'static str,
    client: &Client,
    base_url: &str,
    headers: HeaderMap,
) -> ImageServiceResult<Vec<CachedUrl>> {
    let url = format!("{base_url}/image/urls");
    let data: Value = client_utils::get_json(client, &url, headers).await?;
    let page = normalize::normalize_url_page(provider, &data, 0, usize::MAX)?;
    Ok(page.items)
}
