//! Upstream paths on the game-stats API.
//!
//! Every relayed route maps onto exactly one of these. Paths are relative to
//! the configured API base (which already carries the `/v1` version prefix).
//!
//! Caller-supplied ids are kept as-is but percent-encoded, so `/`, `?`, `#`
//! and `%` cannot escape their segment. An id of exactly `.` or `..` is still
//! resolved as a dot segment when the URL is parsed; with no `/` available it
//! can only climb to the route's parent under the API base.

use crate::tag::PlayerTag;

/// Global player leaderboard.
pub const PLAYER_RANKINGS: &str = "/rankings/global/players";

/// Full brawler catalog.
pub const BRAWLERS: &str = "/brawlers";

/// Available game modes.
pub const GAME_MODES: &str = "/gamemodes";

/// Current event rotation.
pub const EVENT_ROTATION: &str = "/events/rotation";

/// Player profile.
#[must_use]
pub fn player(tag: &PlayerTag) -> String {
    format!("/players/{}", tag.to_path_segment())
}

/// Recent battles of a player.
#[must_use]
pub fn battlelog(tag: &PlayerTag) -> String {
    format!("/players/{}/battlelog", tag.to_path_segment())
}

/// Club profile.
#[must_use]
pub fn club(tag: &PlayerTag) -> String {
    format!("/clubs/{}", tag.to_path_segment())
}

/// Global leaderboard for one brawler.
#[must_use]
pub fn brawler_rankings(brawler_id: &str) -> String {
    format!("/rankings/global/brawlers/{}", urlencoding::encode(brawler_id))
}

/// A single brawler.
#[must_use]
pub fn brawler(brawler_id: &str) -> String {
    format!("/brawlers/{}", urlencoding::encode(brawler_id))
}
