use bevy::prelude::*;
use crate::shared::*;

/// Camera offset that keeps the player at the horizontal screen centre.
pub fn camera_shift_for(player_x: f32) -> f32 {
    PLAYER_REL_X - player_x
}

/// Whether something `width` wide centred at `screen_x` is visible at all.
pub fn is_on_screen(screen_x: f32, width: f32) -> bool {
    screen_x + width / 2.0 >= 0.0 && screen_x - width / 2.0 <= SCREEN_WIDTH
}

/// Recomputes every entity's screen x after the player moved.
pub fn reposition_camera(
    player: Res<PlayerState>,
    mut camera: ResMut<CameraShift>,
    mut query: Query<(&MapPosition, &mut ScreenX)>,
) {
    if !camera.dirty {
        return;
    }
    camera.shift = camera_shift_for(player.position.x);
    camera.dirty = false;
    for (pos, mut screen_x) in &mut query {
        screen_x.0 = camera.to_screen(pos.0.x);
    }
}

/// Places newly spawned entities with the current shift.
pub fn place_new_entities(
    camera: Res<CameraShift>,
    mut query: Query<(&MapPosition, &mut ScreenX), Added<ScreenX>>,
) {
    for (pos, mut screen_x) in &mut query {
        screen_x.0 = camera.to_screen(pos.0.x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_maps_to_screen_centre() {
        let shift = camera_shift_for(800.0);
        assert_eq!(800.0 + shift, PLAYER_REL_X);
        assert_eq!(1200.0 + shift, PLAYER_REL_X + 400.0);
    }

    #[test]
    fn test_culling_keeps_partially_visible_entities() {
        assert!(is_on_screen(-10.0, 40.0));
        assert!(!is_on_screen(-30.0, 40.0));
        assert!(is_on_screen(SCREEN_WIDTH + 10.0, 40.0));
        assert!(!is_on_screen(SCREEN_WIDTH + 30.0, 40.0));
    }
}
