#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::SoundEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Currency, EntityId, SimTime};

    #[test]
    fn test_game_mode_wire_names() {
        assert_eq!(serde_json::to_string(&GameMode::Practice).unwrap(), "\"Practice\"");
        assert_eq!(serde_json::to_string(&GameMode::Duel).unwrap(), "\"1v1\"");
        let back: GameMode = serde_json::from_str("\"1v1\"").unwrap();
        assert_eq!(back, GameMode::Duel);
    }

    #[test]
    fn test_player_command_tagged_serde() {
        let cmd = PlayerCommand::SetMode {
            mode: GameMode::Duel,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SetMode\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
        assert_eq!(back, PlayerCommand::Fire);
    }

    #[test]
    fn test_sound_event_tagged_serde() {
        let json = serde_json::to_string(&SoundEvent::Success).unwrap();
        assert_eq!(json, r#"{"type":"Success"}"#);
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Fps.toggled(), ViewMode::Tps);
        assert_eq!(ViewMode::Tps.toggled(), ViewMode::Fps);
        assert_eq!(ViewMode::default(), ViewMode::Fps);
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(CollectibleKind::Coin.storage_key(), "coins");
        assert_eq!(CollectibleKind::Gem.storage_key(), "gems");
    }

    #[test]
    fn test_currency_add_returns_total() {
        let mut currency = Currency::default();
        assert_eq!(currency.add(CollectibleKind::Gem, 5), 5);
        assert_eq!(currency.add(CollectibleKind::Gem, 5), 10);
        assert_eq!(currency.add(CollectibleKind::Coin, 1), 1);
        assert_eq!(currency.get(CollectibleKind::Gem), 10);
        assert_eq!(currency.get(CollectibleKind::Coin), 1);
    }

    #[test]
    fn test_currency_saturates() {
        let mut currency = Currency {
            coins: u64::MAX,
            gems: 0,
        };
        assert_eq!(currency.add(CollectibleKind::Coin, 10), u64::MAX);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..8 {
            time.advance(0.125);
        }
        assert_eq!(time.tick, 8);
        assert_eq!(time.elapsed_secs, 1.0);
        assert_eq!(time.elapsed_ms(), 1000);
    }

    #[test]
    fn test_entity_id_orders_by_allocation() {
        let mut ids = vec![EntityId(7), EntityId(2), EntityId(5)];
        ids.sort();
        assert_eq!(ids, vec![EntityId(2), EntityId(5), EntityId(7)]);
        assert_eq!(EntityId(3).to_string(), "#3");
    }

    #[test]
    fn test_default_snapshot_is_menu() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.phase, GamePhase::Menu);
        assert!(snap.enemies.is_empty());
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
