//! Nesta Steam Crate
//!
//! Steam Web API and Steam Community access for the Nesta achievement
//! picker.
//!
//! # Overview
//!
//! - Identity handling: SteamID64 vs. vanity alias
//! - Catalog lookups: vanity resolution, owned games, achievement schema
//! - Player-state sources with a strict fallback order
//! - Permissive parsing of public community XML for keyless use
//!
//! # Architecture
//!
//! ```text
//!                   +--------------------+
//!                   |    SourceChain     |  (first non-empty wins)
//!                   +--------------------+
//!                     |        |       |
//!                     v        v       v
//!       +------------------+ +------------+ +-----------------+
//!       | PlayerAchievements| | UserStats | | CommunityStats  |
//!       |  (key, privacy)   | |   (key)   | |  (public XML)   |
//!       +------------------+ +------------+ +-----------------+
//!                     \         |         /
//!                      v        v        v
//!                   +--------------------+
//!                   |     SteamHttp      |  (shared client, 10s timeout)
//!                   +--------------------+
//! ```
//!
//! # Core Types
//!
//! - [`SteamIdentity`] - Player handle, numeric or vanity
//! - [`SchemaAchievement`] - Achievement definition
//! - [`PlayerAchievementState`] - Per-player unlock state
//! - [`OwnedGame`] - Library entry
//! - [`SteamError`] - Error with fallback classification

pub mod catalog;
pub mod chain;
pub mod community;
pub mod errors;
pub mod http;
pub mod models;
pub mod source;

pub use models::{
    CommunityAchievement, OwnedGame, PlayerAchievementState, SchemaAchievement, SteamIdentity,
};

pub use catalog::{CommunityCatalog, GuestCatalog, SteamCatalog, SteamWebApi};
pub use chain::{FetchDiagnostics, SourceChain};
pub use errors::{FallbackClass, SteamError};
pub use http::SteamHttp;
pub use source::{PlayerStateSource, SourceRequest};
