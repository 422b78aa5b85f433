use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ImageServiceError, ImageServiceResult};

/// Body for the avatar generation endpoints (`POST {base}/image` and
/// `POST {base}/image/google`).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub prompt: String,
    /// Careers to surface as pictograms around the avatar. Omitted from the
    /// body entirely when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_careers: Option<Vec<String>>,
}

impl ImageRequest {
    #[must_use]
    pub fn new(prompt: impl Into<String>, suggested_careers: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            suggested_careers: if suggested_careers.is_empty() {
                None
            } else {
                Some(suggested_careers)
            },
        }
    }
}

/// Raw success body of the generation endpoints. The `id` is sent as either
/// a string or a number depending on the service revision, hence the loose
/// type.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_careers: Option<Vec<Value>>,
}

/// Body for the career suggestion endpoints. The two product variants send
/// different shapes; the enum serializes to whichever the service expects.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum CareersRequest {
    /// The service derives careers from the full image prompt.
    Prompt { prompt: String },
    /// The service derives careers from the raw job and interest answers.
    #[serde(rename_all = "camelCase")]
    Profile {
        metiers: Vec<String>,
        centres_interet: Vec<String>,
    },
}

/// Raw success body of the career suggestion endpoints. Every field is
/// optional; normalization fills in the gaps.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CareersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_careers: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enriched_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fallback: Option<bool>,
}

/// The outcome of a successful generation call, with the identifier already
/// normalized: an explicit `id` field wins, otherwise the `img-<id>.png`
/// filename segment of the url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
    pub revised_prompt: Option<String>,
    pub id: Option<String>,
    pub suggested_careers: Vec<String>,
}

/// Normalized career suggestions: careers filtered to strings. The enriched
/// prompt is `None` when the service did not send a usable one; callers fall
/// back to the prompt they submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerSuggestions {
    pub careers: Vec<String>,
    pub enriched_prompt: Option<String>,
    pub is_fallback: bool,
}

/// One previously generated image as known to the gallery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CachedUrl {
    pub id: String,
    pub url: String,
}

/// One normalized page of the cursor-paginated url listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPage {
    pub items: Vec<CachedUrl>,
    pub has_more: bool,
    pub next_after_id: u64,
}

/// Query for `GET {base}/image/urls/stream`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub after_id: u64,
    pub limit: usize,
    pub include_url: bool,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            after_id: 0,
            limit: 12,
            include_url: true,
        }
    }
}

/// Extract the identifier out of an `img-<id>.png` filename segment,
/// case-insensitively. The id never spans a `/` or `?`.
#[must_use]
pub fn extract_image_id(url: &str) -> Option<String> {
    let lower = url.to_ascii_lowercase();
    let mut search_from = 0;
    while let Some(found) = lower[search_from..].find("/img-") {
        let start = search_from + found + "/img-".len();
        let run_end = lower[start..]
            .find(['/', '?'])
            .map_or(lower.len(), |offset| start + offset);
        if let Some(suffix) = lower[start..run_end].rfind(".png") {
            if suffix > 0 {
                return Some(url[start..start + suffix].to_string());
            }
        }
        search_from = start;
    }
    None
}

fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn string_values(values: Option<Vec<Value>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            Value::String(career) => Some(career),
            _ => None,
        })
        .collect()
}

/// Normalize a 2xx generation response. A missing `url` field is an error in
/// its own right even though the status was OK.
pub(crate) fn map_image_response(
    provider: &'static str,
    response: ImageResponse,
) -> ImageServiceResult<GeneratedImage> {
    let url = response
        .url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            ImageServiceError::Invariant(
                provider,
                "La réponse ne contient pas de champ \"url\".".to_string(),
            )
        })?;

    let id = response
        .id
        .as_ref()
        .and_then(value_to_id)
        .or_else(|| extract_image_id(&url));

    Ok(GeneratedImage {
        id,
        revised_prompt: response.revised_prompt,
        suggested_careers: string_values(response.suggested_careers),
        url,
    })
}

/// Normalize a 2xx career suggestion response.
pub(crate) fn map_careers_response(response: CareersResponse) -> CareerSuggestions {
    CareerSuggestions {
        careers: string_values(response.suggested_careers),
        enriched_prompt: response.enriched_prompt.filter(|prompt| !prompt.is_empty()),
        is_fallback: response.is_fallback.unwrap_or(false),
    }
}
