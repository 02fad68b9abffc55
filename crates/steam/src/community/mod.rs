//! Permissive parsers for public Steam Community XML documents.
//!
//! The community pages are not a stable API. Parsing is best-effort text
//! matching over repeated blocks: anything that cannot be read is skipped
//! and never turned into an error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::http::SteamHttp;
use crate::models::{CommunityAchievement, OwnedGame, SteamIdentity};

lazy_static! {
    /// `<achievement>` or `<achievement closed="1">`, but not `<achievements>`.
    static ref ACHIEVEMENT_BLOCK: Regex =
        Regex::new(r"(?is)<achievement(?:\s[^>]*)?>(.*?)</achievement>").expect("Invalid regex pattern");
    static ref CLOSED_ATTR: Regex =
        Regex::new(r#"(?i)<achievement\s[^>]*closed\s*=\s*["']?(\d+)"#).expect("Invalid regex pattern");
    static ref GAME_BLOCK: Regex =
        Regex::new(r"(?is)<game>(.*?)</game>").expect("Invalid regex pattern");
    static ref APINAME: Regex = tag_regex("apiname");
    static ref NAME: Regex = tag_regex("name");
    static ref DESCRIPTION: Regex = tag_regex("description");
    static ref ACHIEVED: Regex =
        Regex::new(r"(?i)<achieved>\s*(\d+)\s*</achieved>").expect("Invalid regex pattern");
    static ref UNLOCK_TIMESTAMP: Regex =
        Regex::new(r"(?i)<unlockTimestamp>\s*(\d+)\s*</unlockTimestamp>").expect("Invalid regex pattern");
    static ref APP_ID: Regex =
        Regex::new(r"(?i)<appID>\s*(\d+)\s*</appID>").expect("Invalid regex pattern");
}

fn tag_regex(tag: &str) -> Regex {
    Regex::new(&format!(r"(?is)<{tag}>(.*?)</{tag}>")).expect("Invalid regex pattern")
}

/// Public stats XML page for one game on a profile.
pub fn stats_url(http: &SteamHttp, identity: &SteamIdentity, app_id: u32) -> String {
    http.community_url(&format!("/{}/stats/{}", identity.profile_path(), app_id))
}

/// Query string for [`stats_url`].
pub fn stats_params() -> [(&'static str, String); 2] {
    [("xml", "1".to_string()), ("l", "english".to_string())]
}

/// Parse a `/stats/<appid>?xml=1` document into achievement blocks.
///
/// Blocks without an `apiname` (or, failing that, a `name`) are skipped.
/// `achieved` comes from an `<achieved>` element, else the `closed`
/// attribute, else defaults to `0`.
pub fn parse_stats_document(xml: &str) -> Vec<CommunityAchievement> {
    ACHIEVEMENT_BLOCK
        .captures_iter(xml)
        .filter_map(|caps| {
            let whole = caps.get(0)?.as_str();
            let block = caps.get(1)?.as_str();

            let display_name = tag_text(&NAME, block);
            let api_name = tag_text(&APINAME, block).or_else(|| display_name.clone())?;

            let achieved = capture_number(&ACHIEVED, block)
                .or_else(|| capture_number(&CLOSED_ATTR, whole))
                .unwrap_or(0);

            Some(CommunityAchievement {
                api_name,
                display_name,
                description: tag_text(&DESCRIPTION, block),
                achieved,
                unlock_time: capture_number(&UNLOCK_TIMESTAMP, block),
            })
        })
        .collect()
}

/// Parse a `/games?tab=all&xml=1` document into library entries.
pub fn parse_games_document(xml: &str) -> Vec<OwnedGame> {
    GAME_BLOCK
        .captures_iter(xml)
        .filter_map(|caps| {
            let block = caps.get(1)?.as_str();
            let app_id = capture_number(&APP_ID, block)
                .and_then(|id| u32::try_from(id).ok())?;
            OwnedGame::from_parts(app_id, tag_text(&NAME, block))
        })
        .collect()
}

fn capture_number(pattern: &Regex, haystack: &str) -> Option<i64> {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Text content of the first `pattern` match, with CDATA and entities unwrapped.
fn tag_text(pattern: &Regex, block: &str) -> Option<String> {
    let raw = pattern.captures(block)?.get(1)?.as_str().trim();
    let text = raw
        .strip_prefix("<![CDATA[")
        .and_then(|s| s.strip_suffix("]]>"))
        .map(str::to_string)
        .unwrap_or_else(|| decode_entities(raw));
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
