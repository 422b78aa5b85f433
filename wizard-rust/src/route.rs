use serde::{Deserialize, Serialize};

/// Path segment under which single images live: `/image-generee/<id>`.
pub const IMAGE_ROUTE_SEGMENT: &str = "image-generee";

/// The client-side views, derivable from `location.pathname` at any time so
/// browser back/forward navigation just re-parses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Form,
    Image {
        id: String,
    },
}

impl Route {
    /// Parse a pathname. Anything unrecognized falls back to the form.
    #[must_use]
    pub fn parse(pathname: &str) -> Self {
        let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [segment, id] if *segment == IMAGE_ROUTE_SEGMENT && !id.is_empty() => Self::Image {
                id: (*id).to_string(),
            },
            _ => Self::Form,
        }
    }

    /// The pathname to push for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Form => "/".to_string(),
            Self::Image { id } => format!("/{IMAGE_ROUTE_SEGMENT}/{id}"),
        }
    }
}
