//! Plants: drop timers that scatter items around their base.

use bevy::prelude::*;
use rand::Rng;
use crate::shared::*;

/// Fraction of the plant's height that drops fall from.
const DROP_HEIGHT: f32 = 0.7;

/// Static per-kind behaviour of a plant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantProfile {
    pub drop_period: i32,
    pub drop_spread: i32,
    pub max_drops: u32,
    pub size: Vec2,
    /// How far the sprite sits below the ground line.
    pub sink: f32,
}

impl PlantKind {
    pub fn profile(self) -> PlantProfile {
        match self {
            PlantKind::Pine => PlantProfile {
                drop_period: 1350,
                drop_spread: 420,
                max_drops: 3,
                size: Vec2::new(170.0, 360.0),
                sink: 4.0,
            },
            PlantKind::Birch => PlantProfile {
                drop_period: 1500,
                drop_spread: 510,
                max_drops: 2,
                size: Vec2::new(150.0, 340.0),
                sink: 0.0,
            },
            PlantKind::Cotton => PlantProfile {
                drop_period: 4800,
                drop_spread: 1200,
                max_drops: 2,
                size: Vec2::new(70.0, 80.0),
                sink: 0.0,
            },
            PlantKind::PortaPotty => PlantProfile {
                drop_period: 0,
                drop_spread: 0,
                max_drops: 0,
                size: Vec2::new(90.0, 170.0),
                sink: 0.0,
            },
        }
    }

    pub fn drops_items(self) -> bool {
        self != PlantKind::PortaPotty
    }
}

/// Rolls the item a plant of this kind drops next.
pub fn choose_drop(kind: PlantKind, rng: &mut impl Rng) -> Option<ItemKind> {
    match kind {
        PlantKind::Pine => {
            let roll = rng.gen_range(0..10);
            Some(if roll < 6 {
                ItemKind::Stick
            } else if roll < 9 {
                ItemKind::Leaf
            } else {
                ItemKind::Log
            })
        }
        PlantKind::Birch => Some(if rng.gen_bool(0.5) {
            ItemKind::Stick
        } else {
            ItemKind::BirchBark
        }),
        PlantKind::Cotton => Some(ItemKind::CottonBall),
        PlantKind::PortaPotty => None,
    }
}

impl Plant {
    /// A fresh plant drops on its first tick.
    pub fn new(kind: PlantKind, mirrored: bool) -> Self {
        Self {
            kind,
            mirrored,
            live_drops: 0,
            drop_timer: 0,
        }
    }

    /// Counts down the drop timer. When it expires (and the plant is under
    /// its cap) returns the dropped kind and its spawn point around `base`.
    pub fn tick(&mut self, base: Vec2, rng: &mut impl Rng) -> Option<(ItemKind, Vec2)> {
        let profile = self.kind.profile();
        if !self.kind.drops_items() || self.live_drops >= profile.max_drops {
            return None;
        }
        if self.drop_timer > 0 {
            self.drop_timer -= 1;
            return None;
        }

        let kind = choose_drop(self.kind, rng)?;
        let width = profile.size.x as i32;
        let x = base.x + rng.gen_range(0..width) as f32 - profile.size.x / 2.0;
        let y = base.y - profile.size.y * DROP_HEIGHT;

        self.live_drops += 1;
        self.drop_timer = profile.drop_period + rng.gen_range(0..2 * profile.drop_spread)
            - profile.drop_spread;
        Some((kind, Vec2::new(x, y)))
    }
}

/// Ticks every plant, requesting a world item for each drop.
pub fn tick_plants(
    mut plants: Query<(Entity, &mut Plant, &MapPosition)>,
    mut rng: ResMut<SimRng>,
    mut drops: EventWriter<ItemDropEvent>,
) {
    for (entity, mut plant, pos) in &mut plants {
        if let Some((kind, position)) = plant.tick(pos.0, &mut rng.0) {
            drops.send(ItemDropEvent {
                kind,
                position,
                source: Some(entity),
            });
        }
    }
}
