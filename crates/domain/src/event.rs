use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Synthetic event delivered to listeners when a media query is activated.
///
/// Mirrors the shape application code expects from the host environment:
/// `matches` reports the query's new state and `media` carries the query
/// string verbatim. The query string is never parsed or normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaQueryEvent {
    /// Whether the query now matches. Always `true` for events produced by
    /// `activate`, since only one query is considered matching at a time.
    pub matches: bool,

    /// The media query string, verbatim (Arc for cheap cloning).
    pub media: Arc<str>,
}

impl MediaQueryEvent {
    /// Event for a query that just became matching.
    pub fn now_matching(media: impl Into<Arc<str>>) -> Self {
        Self {
            matches: true,
            media: media.into(),
        }
    }

    pub fn media(&self) -> &str {
        &self.media
    }
}
