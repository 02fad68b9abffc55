//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "nesta",
    version,
    about = "Pick the next Steam achievement to chase",
    after_help = "Examples:\n  nesta config steam.steamId 7656119...\n  nesta pick --game \"Hades\"\n  nesta pick --random"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Suggest the next achievement
    Pick(PickArgs),
    /// Show pick history
    History,
    /// Get or set configuration
    Config {
        /// steam.steamId, steam.apiKey or openrouter.apiKey
        key: Option<String>,
        value: Option<String>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct PickArgs {
    /// Only consider games whose name contains this text
    #[arg(short, long)]
    pub game: Option<String>,
    /// Shuffle games and pick any outstanding achievement
    #[arg(long)]
    pub random: bool,
    /// List every achievement of the first matching game instead of picking
    #[arg(long)]
    pub browse: bool,
}

/// A settable config entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    SteamId,
    ApiKey,
    OpenRouterApiKey,
}

impl ConfigKey {
    /// Accepts the dotted names and the bare field names.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "steam.steamId" | "steamId" => Some(Self::SteamId),
            "steam.apiKey" | "apiKey" => Some(Self::ApiKey),
            "openrouter.apiKey" | "openRouterApiKey" => Some(Self::OpenRouterApiKey),
            _ => None,
        }
    }

    /// Key for writes; anything unrecognised sets the Steam id.
    pub fn for_write(key: &str) -> Self {
        Self::parse(key).unwrap_or(Self::SteamId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_flags() {
        let cli = Cli::parse_from(["nesta", "pick", "-g", "Hades", "--random"]);
        match cli.command {
            Some(Command::Pick(args)) => {
                assert_eq!(args.game.as_deref(), Some("Hades"));
                assert!(args.random);
                assert!(!args.browse);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_config_without_value() {
        let cli = Cli::parse_from(["nesta", "config", "steam.apiKey"]);
        match cli.command {
            Some(Command::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("steam.apiKey"));
                assert_eq!(value, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_parses() {
        assert!(Cli::parse_from(["nesta"]).command.is_none());
    }

    #[test]
    fn test_config_key_mapping() {
        assert_eq!(ConfigKey::parse("steam.steamId"), Some(ConfigKey::SteamId));
        assert_eq!(ConfigKey::parse("steam.apiKey"), Some(ConfigKey::ApiKey));
        assert_eq!(
            ConfigKey::parse("openrouter.apiKey"),
            Some(ConfigKey::OpenRouterApiKey)
        );
        assert_eq!(ConfigKey::parse("nope"), None);
        assert_eq!(ConfigKey::for_write("nope"), ConfigKey::SteamId);
    }
}
