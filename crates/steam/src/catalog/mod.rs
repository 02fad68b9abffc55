//! Game library and achievement-definition lookups.

mod community;
mod traits;
mod web_api;

pub use community::CommunityCatalog;
pub use traits::{GuestCatalog, SteamCatalog};
pub use web_api::SteamWebApi;
