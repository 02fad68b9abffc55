//! Merging achievement definitions with a player's unlock state.

use std::collections::HashMap;

use nesta_steam::{PlayerAchievementState, SchemaAchievement};

use super::achievements_model::Achievement;

/// Merge a game's schema with the player's state into one list.
///
/// Schema entries come first, in schema order, starting out locked. Each
/// player entry then overwrites the unlock state of its schema entry, or is
/// appended (named after its api name) when the schema does not know it.
/// When the player list repeats an api name, the last entry wins.
pub fn merge_schema_and_player_achievements(
    schema: &[SchemaAchievement],
    player: &[PlayerAchievementState],
    game_app_id: u32,
) -> Vec<Achievement> {
    let mut merged: Vec<Achievement> = Vec::with_capacity(schema.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(schema.len());

    for entry in schema {
        let achievement = Achievement::locked(
            game_app_id,
            entry.name.as_str(),
            entry.display_name.as_deref().unwrap_or(&entry.name),
            entry.description.as_deref().unwrap_or_default(),
        );
        match index.get(&entry.name) {
            // repeated schema names keep their first position
            Some(&pos) => merged[pos] = achievement,
            None => {
                index.insert(entry.name.clone(), merged.len());
                merged.push(achievement);
            }
        }
    }

    for state in player {
        let pos = match index.get(&state.api_name) {
            Some(&pos) => pos,
            None => {
                index.insert(state.api_name.clone(), merged.len());
                merged.push(Achievement::locked(
                    game_app_id,
                    state.api_name.as_str(),
                    state.api_name.as_str(),
                    "",
                ));
                merged.len() - 1
            }
        };
        merged[pos].apply_unlock(state.achieved, state.unlock_time);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn schema(name: &str, display: Option<&str>) -> SchemaAchievement {
        SchemaAchievement {
            name: name.to_string(),
            display_name: display.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn test_schema_only_is_locked() {
        let merged = merge_schema_and_player_achievements(&[schema("A", Some("Alpha"))], &[], 440);

        assert_eq!(merged, vec![Achievement::locked(440, "A", "Alpha", "")]);
    }

    #[test]
    fn test_player_state_overlays_schema() {
        let merged = merge_schema_and_player_achievements(
            &[schema("X", None), schema("Y", None)],
            &[PlayerAchievementState::new("X", 1, Some(1700000000))],
            440,
        );

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].api_name, "X");
        assert!(merged[0].achieved);
        assert_eq!(
            merged[0].unlocked_at.map(|t| t.timestamp()),
            Some(1700000000)
        );
        assert_eq!(merged[0].display_name, "X");
        assert_eq!(merged[1].api_name, "Y");
        assert!(!merged[1].achieved);
        assert_eq!(merged[1].unlocked_at, None);
    }

    #[test]
    fn test_player_only_entries_are_synthesized() {
        let merged = merge_schema_and_player_achievements(
            &[],
            &[PlayerAchievementState::new("Z", 0, None)],
            620,
        );

        assert_eq!(merged, vec![Achievement::locked(620, "Z", "Z", "")]);
    }

    #[test]
    fn test_last_duplicate_player_entry_wins() {
        let merged = merge_schema_and_player_achievements(
            &[schema("A", None)],
            &[
                PlayerAchievementState::new("A", 1, Some(100)),
                PlayerAchievementState::new("A", 0, None),
            ],
            440,
        );

        assert_eq!(merged.len(), 1);
        assert!(!merged[0].achieved);
    }

    fn api_name() -> impl Strategy<Value = String> {
        "[A-E]"
    }

    proptest! {
        #[test]
        fn prop_merge_keeps_each_key_once(
            schema_names in prop::collection::vec(api_name(), 0..6),
            player in prop::collection::vec((api_name(), 0i64..3, prop::option::of(-5i64..2_000_000_000)), 0..8),
        ) {
            let schema: Vec<SchemaAchievement> = schema_names.iter().map(|n| SchemaAchievement::new(n.as_str())).collect();
            let player: Vec<PlayerAchievementState> = player
                .into_iter()
                .map(|(n, a, t)| PlayerAchievementState::new(n, a, t))
                .collect();

            let merged = merge_schema_and_player_achievements(&schema, &player, 1);

            let expected: HashSet<&str> = schema
                .iter()
                .map(|s| s.name.as_str())
                .chain(player.iter().map(|p| p.api_name.as_str()))
                .collect();
            let keys: Vec<&str> = merged.iter().map(|a| a.api_name.as_str()).collect();
            let unique: HashSet<&str> = keys.iter().copied().collect();

            prop_assert_eq!(keys.len(), unique.len());
            prop_assert_eq!(unique, expected);
        }

        #[test]
        fn prop_unlock_time_implies_achieved(
            player in prop::collection::vec((api_name(), 0i64..3, prop::option::of(-5i64..2_000_000_000)), 0..8),
        ) {
            let player: Vec<PlayerAchievementState> = player
                .into_iter()
                .map(|(n, a, t)| PlayerAchievementState::new(n, a, t))
                .collect();

            for a in merge_schema_and_player_achievements(&[], &player, 1) {
                if let Some(at) = a.unlocked_at {
                    prop_assert!(a.achieved);
                    prop_assert!(at.timestamp() > 0);
                }
            }
        }

        #[test]
        fn prop_schema_order_is_preserved(
            schema_names in prop::collection::hash_set(api_name(), 0..5),
            player in prop::collection::vec((api_name(), 0i64..2), 0..8),
        ) {
            let schema_names: Vec<String> = schema_names.into_iter().collect();
            let schema: Vec<SchemaAchievement> = schema_names.iter().map(|n| SchemaAchievement::new(n.as_str())).collect();
            let player: Vec<PlayerAchievementState> = player
                .into_iter()
                .map(|(n, a)| PlayerAchievementState::new(n, a, None))
                .collect();

            let merged = merge_schema_and_player_achievements(&schema, &player, 1);
            let prefix: Vec<&str> = merged.iter().take(schema_names.len()).map(|a| a.api_name.as_str()).collect();
            let names: Vec<&str> = schema_names.iter().map(String::as_str).collect();

            prop_assert_eq!(prefix, names);
        }
    }
}
