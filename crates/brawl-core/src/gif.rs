//! GIF search DTOs.

use serde::{Deserialize, Serialize};

/// Query value that selects the trending feed instead of a search.
const TRENDING: &str = "trending";

/// What to ask the GIF upstream for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GifQuery {
    /// The trending feed.
    Trending,
    /// A free-text search.
    Search(String),
}

impl GifQuery {
    /// Resolve the optional `q` parameter of an inbound request.
    ///
    /// Missing, empty, and `trending` (any case) all select the trending feed.
    #[must_use]
    pub fn from_param(q: Option<&str>) -> Self {
        match q {
            None => Self::Trending,
            Some(q) if q.is_empty() || q.eq_ignore_ascii_case(TRENDING) => Self::Trending,
            Some(q) => Self::Search(q.to_string()),
        }
    }
}

/// One GIF as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifResult {
    /// Upstream GIF id
    pub id: String,
    /// Small fixed-width rendition, for thumbnails
    pub preview: String,
    /// Original rendition
    pub full: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_selection() {
        assert_eq!(GifQuery::from_param(None), GifQuery::Trending);
        assert_eq!(GifQuery::from_param(Some("")), GifQuery::Trending);
        assert_eq!(GifQuery::from_param(Some("trending")), GifQuery::Trending);
        assert_eq!(GifQuery::from_param(Some("TrEnDiNg")), GifQuery::Trending);
    }

    #[test]
    fn test_search_keeps_query_verbatim() {
        assert_eq!(
            GifQuery::from_param(Some("Spike wins")),
            GifQuery::Search("Spike wins".to_string())
        );
        assert_eq!(
            GifQuery::from_param(Some("trending now")),
            GifQuery::Search("trending now".to_string())
        );
    }

    #[test]
    fn test_gif_result_serializes_three_keys() {
        let gif = GifResult {
            id: "abc".to_string(),
            preview: "https://media.example/small.gif".to_string(),
            full: "https://media.example/original.gif".to_string(),
        };
        let value = serde_json::to_value(&gif).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(value["id"], "abc");
        assert_eq!(value["preview"], "https://media.example/small.gif");
        assert_eq!(value["full"], "https://media.example/original.gif");
    }
}
