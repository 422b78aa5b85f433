//! Tolerant parsing for the url-listing endpoints.
//!
//! The service has shipped several envelope shapes for the same conceptual
//! list (a bare array, or an object exposing the array under one of several
//! field names) and two item shapes (bare url strings, `{id, url}` objects).
//! Everything funnels through [`normalize_url_page`] so call sites never
//! branch on shape.

use serde_json::Value;

use crate::{CachedUrl, ImageServiceError, ImageServiceResult, UrlPage};

/// Field names that may carry the item array, in priority order.
const ARRAY_FIELDS: [&str; 5] = ["urls", "items", "data", "results", "value"];

fn pick_array(data: &Value) -> Option<&Vec<Value>> {
    if let Value::Array(items) = data {
        return Some(items);
    }
    ARRAY_FIELDS
        .iter()
        .find_map(|field| data.get(*field).and_then(Value::as_array))
}

fn as_number(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Normalize one item. Bare strings get their index as a synthetic id;
/// objects keep their own id (stringified) or fall back to the index.
/// Items without a usable url are dropped.
fn normalize_item(item: &Value, index: usize) -> Option<CachedUrl> {
    match item {
        Value::String(url) => Some(CachedUrl {
            id: index.to_string(),
            url: url.clone(),
        }),
        Value::Object(fields) => {
            let url = fields.get("url").and_then(Value::as_str)?;
            if url.is_empty() {
                return None;
            }
            let id = match fields.get("id") {
                Some(Value::String(id)) => id.clone(),
                Some(Value::Number(id)) => id.to_string(),
                _ => index.to_string(),
            };
            Some(CachedUrl {
                id,
                url: url.to_string(),
            })
        }
        _ => None,
    }
}

/// The next cursor comes from an explicit `nextAfterId` field when the
/// service sends one, otherwise from the maximum numeric id observed in the
/// page, falling back to the input cursor when neither yields more.
fn extract_next_after_id(data: &Value, after_id: u64, items: &[CachedUrl]) -> u64 {
    if let Some(explicit) = as_number(data.get("nextAfterId")) {
        return explicit;
    }
    items
        .iter()
        .filter_map(|item| item.id.trim().parse().ok())
        .fold(after_id, u64::max)
}

fn extract_has_more(data: &Value) -> Option<bool> {
    data.get("hasMore")
        .or_else(|| data.get("hasNext"))
        .and_then(Value::as_bool)
}

/// Normalize a raw listing response into a [`UrlPage`].
///
/// Without an explicit continuation flag, a full page (at least `limit`
/// items) is taken to mean more are likely available.
pub(crate) fn normalize_url_page(
    provider: &'static str,
    data: &Value,
    after_id: u64,
    limit: usize,
) -> ImageServiceResult<UrlPage> {
    let raw_items = pick_array(data).ok_or_else(|| {
        ImageServiceError::Invariant(
            provider,
            "La réponse ne contient pas de liste d'URL.".to_string(),
        )
    })?;

    let items: Vec<CachedUrl> = raw_items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| normalize_item(item, index))
        .collect();

    let next_after_id = extract_next_after_id(data, after_id, &items);
    let has_more = extract_has_more(data)
        .unwrap_or_else(|| !items.is_empty() && items.len() >= limit);

    Ok(UrlPage {
        items,
        has_more,
        next_after_id,
    })
}
