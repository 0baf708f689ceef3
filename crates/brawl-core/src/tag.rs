//! Player and club tag normalization.
//!
//! Tags are shown to players as `#2PP0JQ8Q`, but callers send them in every
//! shape: with or without the `#`, upper or lower case. The game-stats API
//! only accepts the canonical form, with the `#` percent-encoded in the path.

use std::fmt;

/// Percent-encoded `#`, used as the tag prefix in upstream paths.
pub const ENCODED_HASH: &str = "%23";

/// A canonical player or club tag.
///
/// Holds the tag body without the leading `#`, uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerTag(String);

impl PlayerTag {
    /// Normalize a raw tag as received from a caller.
    ///
    /// Strips one leading `#` if present and uppercases the rest.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let body = raw.strip_prefix('#').unwrap_or(raw);
        Self(body.to_uppercase())
    }

    /// The tag body without any prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tag as it appears in an upstream URL path (`%23ABC123`).
    ///
    /// The body is percent-encoded, so a `#`, `/` or `?` left in it stays
    /// inside the segment.
    #[must_use]
    pub fn to_path_segment(&self) -> String {
        format!("{ENCODED_HASH}{}", urlencoding::encode(&self.0))
    }
}

impl fmt::Display for PlayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
