use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of a SteamID64.
const STEAM_ID64_LEN: usize = 17;

/// Player handle: either a SteamID64 or a vanity alias.
///
/// Vanity aliases are kept as-is when resolution fails, so every consumer
/// must accept both forms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SteamIdentity(String);

impl SteamIdentity {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for exactly 17 ASCII digits.
    pub fn is_steam_id64(&self) -> bool {
        self.0.len() == STEAM_ID64_LEN && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Path segment of the public community profile.
    ///
    /// SteamID64s live under `profiles/`, vanity aliases under `id/`.
    pub fn profile_path(&self) -> String {
        if self.is_steam_id64() {
            format!("profiles/{}", self.0)
        } else {
            format!("id/{}", urlencoding::encode(&self.0))
        }
    }
}

impl fmt::Display for SteamIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SteamIdentity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SteamIdentity {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
