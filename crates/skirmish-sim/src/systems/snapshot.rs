//! Snapshot system: reads the store and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the store.

use skirmish_core::enums::GamePhase;
use skirmish_core::state::*;
use skirmish_core::types::SimTime;

use crate::store::{EntityStore, PlayerState};

/// Build a complete GameStateSnapshot from the current store.
pub fn build_snapshot(
    store: &EntityStore,
    time: &SimTime,
    phase: GamePhase,
    pending_respawns: usize,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        player: build_player(&store.player),
        bullets: build_bullets(store),
        enemies: build_enemies(store),
        collectibles: build_collectibles(store),
        pending_respawns: pending_respawns as u32,
    }
}

fn build_player(player: &PlayerState) -> PlayerView {
    PlayerView {
        position: player.position,
        forward: player.forward,
        health: player.health,
        max_health: player.max_health,
        ammo: player.magazine.ammo(),
        max_ammo: player.magazine.max_ammo(),
        is_reloading: player.magazine.is_reloading(),
        reload_remaining_secs: player.magazine.reload_remaining_secs(),
        score: player.score,
        currency: player.currency,
        game_mode: player.game_mode,
        view_mode: player.view_mode,
        selected_weapon: player.selected_weapon.clone(),
    }
}

fn build_bullets(store: &EntityStore) -> Vec<BulletView> {
    store
        .bullets()
        .into_iter()
        .map(|(id, position, bullet)| BulletView {
            id,
            position,
            direction: bullet.direction,
            owner: bullet.owner,
        })
        .collect()
}

fn build_enemies(store: &EntityStore) -> Vec<EnemyView> {
    store
        .enemies()
        .into_iter()
        .map(|(id, position, enemy)| EnemyView {
            id,
            position,
            facing: enemy.facing,
            health: enemy.health,
            max_health: enemy.max_health,
            can_shoot: enemy.can_shoot,
        })
        .collect()
}

fn build_collectibles(store: &EntityStore) -> Vec<CollectibleView> {
    store
        .collectibles()
        .into_iter()
        .map(|(id, position, collectible)| CollectibleView {
            id,
            position,
            kind: collectible.kind,
            value: collectible.value,
        })
        .collect()
}
