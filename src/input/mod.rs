use bevy::prelude::*;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            (
                read_gameplay_input.run_if(in_state(GameState::Playing)),
                manage_game_state,
            )
                .chain(),
        );
    }
}

const SLOT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Appends this frame's key edges to the pending input. Nothing is reset
/// here: the player tick drains the buffer, so edges arriving between two
/// ticks are all kept.
pub fn gather_input(keys: &ButtonInput<KeyCode>, bindings: &KeyBindings, input: &mut PlayerInput) {
    let held = [
        (bindings.move_left, HeldKey::Left),
        (bindings.move_right, HeldKey::Right),
        (bindings.jump, HeldKey::Jump),
        (bindings.swat, HeldKey::Swat),
    ];
    for (code, key) in held {
        if keys.just_pressed(code) {
            input.transitions.push((key, true));
        }
        if keys.just_released(code) {
            input.transitions.push((key, false));
        }
    }

    let sprint = [bindings.sprint, bindings.sprint_alt];
    if keys.any_just_pressed(sprint) {
        input.transitions.push((HeldKey::Sprint, true));
    }
    if keys.any_just_released(sprint) && !keys.any_pressed(sprint) {
        input.transitions.push((HeldKey::Sprint, false));
    }

    input.interact |= keys.just_pressed(bindings.interact);
    input.drop |= keys.just_pressed(bindings.drop);
    input.quest_advance |= keys.just_pressed(bindings.quest_advance);

    if let Some(slot) = SLOT_KEYS.iter().position(|k| keys.just_pressed(*k)) {
        input.slot = Some(slot);
    }
}

fn read_gameplay_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<PlayerInput>,
) {
    gather_input(&keys, &bindings, &mut input);
}

/// Start from the menu and toggle pause.
fn manage_game_state(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    match state.get() {
        GameState::MainMenu if keys.just_pressed(bindings.start) => {
            info!("[Player] Heading into camp");
            next_state.set(GameState::Playing);
        }
        GameState::Playing if keys.just_pressed(bindings.pause) => {
            next_state.set(GameState::Paused);
        }
        GameState::Paused if keys.just_pressed(bindings.pause) => {
            next_state.set(GameState::Playing);
        }
        _ => {}
    }
}
