use bevy::prelude::*;
use bevy::sprite::Anchor;
use rand::Rng;
use crate::shared::*;

/// Held items scatter up to this far either side of where the player fell.
pub const RESPAWN_SCATTER: i32 = 150;

/// Spawn the player's render entity. Runs on `OnEnter(GameState::Playing)`.
pub fn spawn_player(mut commands: Commands, existing: Query<Entity, With<Player>>) {
    // Guard: don't double-spawn when returning from the pause screen.
    if !existing.is_empty() {
        return;
    }

    commands.spawn((
        Player,
        Sprite {
            color: Color::srgb(0.2, 0.45, 0.8),
            custom_size: Some(Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)),
            anchor: Anchor::BottomCenter,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        Visibility::default(),
    ));
}

/// Sends the player back to the spawn point after being knocked out.
///
/// Every held unit is scattered around the fall position; the returned
/// list holds the kind and landing point of each. Pools are refilled and
/// every action flag is cleared, except that the player keeps walking if a
/// direction key is still held.
pub fn respawn(
    player: &mut PlayerState,
    inventory: &mut Inventory,
    rng: &mut impl Rng,
) -> Vec<(ItemKind, Vec2)> {
    let origin = player.position;
    let drop_y = origin.y - PLAYER_HEIGHT * 3.0 / 4.0;
    let scattered = inventory
        .drain_units()
        .into_iter()
        .map(|kind| {
            let dx = 2 * rng.gen_range(0..RESPAWN_SCATTER) - RESPAWN_SCATTER;
            (kind, Vec2::new(origin.x + dx as f32, drop_y))
        })
        .collect();

    let keys = player.keys;
    *player = PlayerState {
        keys,
        motion: MotionFlags {
            walking: keys.left || keys.right,
            ..Default::default()
        },
        ..Default::default()
    };
    scattered
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_respawn_clears_and_scatters_inventory() {
        let mut player = PlayerState {
            position: Vec2::new(3000.0, GROUND_Y),
            health: -2,
            stamina: 3,
            on_ground: true,
            ..Default::default()
        };
        player.motion.swatting = true;
        let mut inventory = Inventory::default();
        inventory.try_add(ItemKind::Stick);
        inventory.try_add(ItemKind::Stick);
        inventory.try_add(ItemKind::Racket);
        inventory.select(1);

        let mut rng = StdRng::seed_from_u64(7);
        let scattered = respawn(&mut player, &mut inventory, &mut rng);

        assert_eq!(scattered.len(), 3);
        for (_, pos) in &scattered {
            assert!(pos.x >= 3000.0 - 150.0 && pos.x < 3000.0 + 150.0);
            assert_eq!(pos.y, GROUND_Y - 105.0);
        }
        assert!(inventory.is_empty());
        assert_eq!(inventory.selected, None);
        assert_eq!(inventory.current_burden(), 0);
        assert_eq!(player.position, PLAYER_SPAWN);
        assert_eq!(player.health, MAX_HEALTH);
        assert_eq!(player.stamina, MAX_STAMINA);
        assert!(player.facing_right);
        assert_eq!(player.motion, MotionFlags::default());
    }

    #[test]
    fn test_respawn_keeps_walking_when_key_held() {
        let mut player = PlayerState::default();
        player.keys.right = true;
        player.motion.jumping = true;
        let mut rng = StdRng::seed_from_u64(1);
        respawn(&mut player, &mut Inventory::default(), &mut rng);
        assert!(player.motion.walking);
        assert!(!player.motion.jumping);
    }
}
