//! World items: spawning, fall/bounce physics and pickup resolution.

use bevy::prelude::*;
use crate::shared::*;

/// Monotonic counter handed to every new world item.
#[derive(Resource, Debug, Default)]
pub struct DropCounter(pub u64);

impl DropCounter {
    pub fn next(&mut self) -> u64 {
        let serial = self.0;
        self.0 += 1;
        serial
    }
}

impl EnvironmentItem {
    /// Items placed at or below their rest line start settled.
    pub fn new(kind: ItemKind, y: f32, source: Option<Entity>, serial: u64) -> Self {
        Self {
            kind,
            velocity: 0.0,
            on_ground: y >= Self::rest_y(kind),
            source,
            serial,
        }
    }

    pub fn rest_y(kind: ItemKind) -> f32 {
        GROUND_Y + kind.ground_offset()
    }

    /// One tick of fall physics on the item's y.
    ///
    /// A rebound too weak to outlast one tick of gravity settles the item,
    /// otherwise low-restitution items would hop at the rest line forever.
    pub fn fall(&mut self, y: &mut f32) {
        let accel = self.kind.drop_accel();
        let rest = Self::rest_y(self.kind);
        if !self.on_ground {
            self.velocity += accel;
            *y += self.velocity;
        }
        if *y >= rest {
            let rebound = self.velocity * self.kind.bounce();
            if self.velocity < accel / 10.0 || rebound < accel {
                self.velocity = 0.0;
                self.on_ground = true;
            } else {
                self.velocity = -rebound;
            }
            *y = rest;
        }
    }
}

/// Picks the item the player would grab: horizontally nearest among those
/// in range, earliest drop on ties.
pub fn nearest_pickup<'a, I>(player: &PlayerState, candidates: I) -> Option<Entity>
where
    I: IntoIterator<Item = (Entity, Vec2, &'a EnvironmentItem)>,
{
    let mut best: Option<(f32, u64, Entity)> = None;
    for (entity, pos, item) in candidates {
        if !in_pickup_range(player, pos, item.kind.size().x) {
            continue;
        }
        let distance = (pos.x - player.position.x).abs();
        let better = match best {
            None => true,
            Some((d, serial, _)) => distance < d || (distance == d && item.serial < serial),
        };
        if better {
            best = Some((distance, item.serial, entity));
        }
    }
    best.map(|(_, _, entity)| entity)
}

// ═══════════════════════════════════════════════════════════════════════════
// Systems
// ═══════════════════════════════════════════════════════════════════════════

pub fn spawn_dropped_items(
    mut commands: Commands,
    mut events: EventReader<ItemDropEvent>,
    mut counter: ResMut<DropCounter>,
) {
    for event in events.read() {
        let item = EnvironmentItem::new(event.kind, event.position.y, event.source, counter.next());
        let size = event.kind.size();
        commands.spawn((
            item,
            MapPosition(event.position),
            ScreenX::default(),
            Footprint {
                width: size.x,
                height: size.y,
            },
        ));
    }
}

pub fn update_item_physics(mut items: Query<(&mut EnvironmentItem, &mut MapPosition)>) {
    for (mut item, mut pos) in &mut items {
        if item.on_ground {
            continue;
        }
        item.fall(&mut pos.0.y);
    }
}

/// Resolves the pick animation's reach frame against the items nearby.
pub fn resolve_pickups(
    mut commands: Commands,
    mut events: EventReader<PickupEvent>,
    mut player: ResMut<PlayerState>,
    mut inventory: ResMut<Inventory>,
    items: Query<(Entity, &MapPosition, &EnvironmentItem)>,
    mut plants: Query<&mut Plant>,
) {
    for _ in events.read() {
        let candidates = items.iter().map(|(e, pos, item)| (e, pos.0, item));
        let Some(entity) = nearest_pickup(&player, candidates) else {
            continue;
        };
        let Ok((_, _, item)) = items.get(entity) else {
            continue;
        };
        if !give_item(&mut player, &mut inventory, item.kind) {
            debug!("[Player] Too heavy to pick up {}", item.kind.display_name());
            continue;
        }
        if let Some(source) = item.source {
            if let Ok(mut plant) = plants.get_mut(source) {
                plant.live_drops = plant.live_drops.saturating_sub(1);
            }
        }
        commands.entity(entity).despawn();
    }
}
