//! Entity Store: the single owner of every entity and of the player's
//! combat attributes.
//!
//! Entities live in a hecs world; each carries an `EntityId` and a per-kind
//! index maps ids to hecs handles. Removal goes through the index, so
//! removing an id that is gone (or never existed) is a no-op. Listing
//! functions return entities in ascending id order, which is insertion order.

use std::collections::HashMap;

use glam::Vec3;
use hecs::{Entity, World};

use skirmish_core::components::{Bullet, Collectible, Enemy, Position};
use skirmish_core::constants::DEFAULT_WEAPON;
use skirmish_core::enums::{CollectibleKind, GameMode, ViewMode};
use skirmish_core::types::{Currency, EntityId};

use skirmish_enemy_ai::profiles::get_profile;

use crate::magazine::Magazine;

/// Values the player is restored to on reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerDefaults {
    pub max_health: i32,
    pub max_ammo: u32,
    pub reload_secs: f32,
}

/// Player scalars. Position and forward are driven by the input collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    /// Unit camera forward vector.
    pub forward: Vec3,
    pub health: i32,
    pub max_health: i32,
    pub magazine: Magazine,
    pub score: u64,
    pub currency: Currency,
    pub game_mode: GameMode,
    pub view_mode: ViewMode,
    pub selected_weapon: String,
}

impl PlayerState {
    fn new(defaults: PlayerDefaults, mode: GameMode, currency: Currency, weapon: String) -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            health: defaults.max_health,
            max_health: defaults.max_health,
            magazine: Magazine::new(defaults.max_ammo, defaults.reload_secs),
            score: 0,
            currency,
            game_mode: mode,
            view_mode: ViewMode::default(),
            selected_weapon: weapon,
        }
    }
}

pub struct EntityStore {
    world: World,
    bullets: HashMap<EntityId, Entity>,
    enemies: HashMap<EntityId, Entity>,
    collectibles: HashMap<EntityId, Entity>,
    next_id: u64,
    defaults: PlayerDefaults,
    pub player: PlayerState,
}

impl EntityStore {
    pub fn new(defaults: PlayerDefaults, currency: Currency) -> Self {
        Self {
            world: World::new(),
            bullets: HashMap::new(),
            enemies: HashMap::new(),
            collectibles: HashMap::new(),
            next_id: 0,
            defaults,
            player: PlayerState::new(
                defaults,
                GameMode::default(),
                currency,
                DEFAULT_WEAPON.to_string(),
            ),
        }
    }

    /// Read-only access to the underlying world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for systems. Never spawn or despawn through it:
    /// that would bypass the id indices.
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    // --- Bullets ---

    pub fn add_bullet(&mut self, position: Vec3, bullet: Bullet) -> EntityId {
        let id = self.allocate_id();
        let entity = self.world.spawn((id, Position(position), bullet));
        self.bullets.insert(id, entity);
        id
    }

    pub fn remove_bullet(&mut self, id: EntityId) {
        if let Some(entity) = self.bullets.remove(&id) {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn bullet(&self, id: EntityId) -> Option<(Vec3, Bullet)> {
        let entity = *self.bullets.get(&id)?;
        get_pair(&self.world, entity)
    }

    pub fn bullets(&self) -> Vec<(EntityId, Vec3, Bullet)> {
        list_sorted(&self.world)
    }

    pub fn bullet_count(&self) -> usize {
        self.bullets.len()
    }

    // --- Enemies ---

    pub fn add_enemy(&mut self, position: Vec3, enemy: Enemy) -> EntityId {
        let id = self.allocate_id();
        let entity = self.world.spawn((id, Position(position), enemy));
        self.enemies.insert(id, entity);
        id
    }

    pub fn remove_enemy(&mut self, id: EntityId) {
        if let Some(entity) = self.enemies.remove(&id) {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn contains_enemy(&self, id: EntityId) -> bool {
        self.enemies.contains_key(&id)
    }

    pub fn enemy(&self, id: EntityId) -> Option<(Vec3, Enemy)> {
        let entity = *self.enemies.get(&id)?;
        get_pair(&self.world, entity)
    }

    pub fn enemies(&self) -> Vec<(EntityId, Vec3, Enemy)> {
        list_sorted(&self.world)
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    /// Overwrite an enemy's position and state. No-op for a missing id.
    pub fn update_enemy(&mut self, id: EntityId, position: Vec3, enemy: Enemy) {
        let Some(&entity) = self.enemies.get(&id) else {
            return;
        };
        if let Ok((pos, current)) = self
            .world
            .query_one_mut::<(&mut Position, &mut Enemy)>(entity)
        {
            pos.0 = position;
            *current = enemy;
        }
    }

    /// Subtract `amount` from an enemy's health, clamping at zero.
    /// Returns the remaining health, or `None` if the enemy is gone.
    pub fn damage_enemy(&mut self, id: EntityId, amount: i32) -> Option<i32> {
        let entity = *self.enemies.get(&id)?;
        let mut enemy = self.world.get::<&mut Enemy>(entity).ok()?;
        enemy.health = enemy.health.saturating_sub(amount.max(0)).max(0);
        Some(enemy.health)
    }

    // --- Collectibles ---

    pub fn add_collectible(&mut self, position: Vec3, collectible: Collectible) -> EntityId {
        let id = self.allocate_id();
        let entity = self.world.spawn((id, Position(position), collectible));
        self.collectibles.insert(id, entity);
        id
    }

    pub fn remove_collectible(&mut self, id: EntityId) {
        if let Some(entity) = self.collectibles.remove(&id) {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn collectible(&self, id: EntityId) -> Option<(Vec3, Collectible)> {
        let entity = *self.collectibles.get(&id)?;
        get_pair(&self.world, entity)
    }

    pub fn collectibles(&self) -> Vec<(EntityId, Vec3, Collectible)> {
        list_sorted(&self.world)
    }

    pub fn collectible_count(&self) -> usize {
        self.collectibles.len()
    }

    // --- Player ---

    pub fn set_player_pose(&mut self, position: Vec3, forward: Vec3) {
        self.player.position = position;
        if let Some(forward) = forward.try_normalize() {
            self.player.forward = forward;
        }
    }

    /// Subtract health, clamping at zero.
    pub fn damage_player(&mut self, amount: i32) {
        let player = &mut self.player;
        player.health = player.health.saturating_sub(amount.max(0)).max(0);
    }

    pub fn add_score(&mut self, amount: u64) {
        self.player.score = self.player.score.saturating_add(amount);
    }

    /// Credit a currency counter, returning the new total.
    pub fn add_currency(&mut self, kind: CollectibleKind, amount: u64) -> u64 {
        self.player.currency.add(kind, amount)
    }

    /// Spend one round. False when empty or reloading.
    pub fn reduce_ammo(&mut self) -> bool {
        self.player.magazine.try_fire()
    }

    /// Begin a reload. False when full or already reloading.
    pub fn reload_ammo(&mut self) -> bool {
        self.player.magazine.begin_reload()
    }

    pub fn toggle_view_mode(&mut self) {
        self.player.view_mode = self.player.view_mode.toggled();
    }

    /// Switch mode. Live enemies take the new mode's firing rule, so only
    /// 1v1 enemies ever shoot.
    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.player.game_mode = mode;
        let can_shoot = get_profile(mode).can_shoot;
        for (_entity, enemy) in self.world.query_mut::<&mut Enemy>() {
            enemy.can_shoot = can_shoot;
        }
    }

    /// Select a weapon. Empty names are ignored.
    pub fn set_weapon(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.player.selected_weapon = name.to_string();
        }
    }

    /// Drop every entity and restore player defaults for `mode`.
    ///
    /// Currency, pose and weapon choice survive. Ids keep counting up so a
    /// stale id from before the reset can never address a new entity.
    pub fn reset(&mut self, mode: GameMode) {
        self.world = World::new();
        self.bullets.clear();
        self.enemies.clear();
        self.collectibles.clear();

        let previous = &self.player;
        let mut player = PlayerState::new(
            self.defaults,
            mode,
            previous.currency,
            previous.selected_weapon.clone(),
        );
        player.position = previous.position;
        player.forward = previous.forward;
        self.player = player;
        self.set_game_mode(mode);
    }
}

fn get_pair<T>(world: &World, entity: Entity) -> Option<(Vec3, T)>
where
    T: hecs::Component + Copy,
{
    let position = world.get::<&Position>(entity).ok()?.0;
    let component = *world.get::<&T>(entity).ok()?;
    Some((position, component))
}

fn list_sorted<T>(world: &World) -> Vec<(EntityId, Vec3, T)>
where
    T: hecs::Component + Copy,
{
    let mut items: Vec<(EntityId, Vec3, T)> = world
        .query::<(&EntityId, &Position, &T)>()
        .iter()
        .map(|(_, (id, pos, component))| (*id, pos.0, *component))
        .collect();
    items.sort_by_key(|(id, _, _)| *id);
    items
}
