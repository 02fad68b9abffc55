//! Steam data models
//!
//! - `identity` - Player handle (SteamID64 or vanity alias)
//! - `achievement` - Schema entries, normalized player state, community blocks
//! - `game` - Library entries

mod achievement;
mod game;
mod identity;

pub use achievement::{CommunityAchievement, PlayerAchievementState, SchemaAchievement};
pub use game::OwnedGame;
pub use identity::SteamIdentity;
