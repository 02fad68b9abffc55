//! Player achievement-state sources.
//!
//! Three tiers, tried in this order by the chain:
//! 1. [`PlayerAchievementsSource`] - authenticated, can report a private profile
//! 2. [`UserStatsSource`] - authenticated, alternate response shape
//! 3. [`CommunityStatsSource`] - public XML page, no key
//!
//! Every source returns the same normalized [`PlayerAchievementState`] list.
//!
//! [`PlayerAchievementState`]: crate::models::PlayerAchievementState

mod community_stats;
mod player_achievements;
mod traits;
mod user_stats;

pub use community_stats::CommunityStatsSource;
pub use player_achievements::PlayerAchievementsSource;
pub use traits::{PlayerStateSource, SourceRequest};
pub use user_stats::UserStatsSource;
