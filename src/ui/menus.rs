use bevy::prelude::*;

use crate::save::leaderboard::{ScoreCategory, ScoreLedger};

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct MainMenuRoot;

#[derive(Component)]
pub struct PauseMenuRoot;

fn overlay_node() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(24.0),
        ..default()
    }
}

fn title_text(text: &str, size: f32) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.9, 0.75)),
    )
}

/// One leaderboard column as display lines, best first.
pub fn leaderboard_lines(ledger: &ScoreLedger, category: ScoreCategory) -> Vec<String> {
    let board = ledger.board(category);
    if board.is_empty() {
        return vec![String::from("(no scores yet)")];
    }
    board
        .iter()
        .enumerate()
        .map(|(rank, score)| {
            format!(
                "{}. {}  {}",
                rank + 1,
                score.name,
                category.format_value(score.value)
            )
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// MAIN MENU
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_main_menu(mut commands: Commands) {
    commands
        .spawn((
            MainMenuRoot,
            overlay_node(),
            BackgroundColor(Color::srgb(0.08, 0.12, 0.1)),
        ))
        .with_children(|parent| {
            parent.spawn(title_text("Camp Haliburton", 56.0));
            parent.spawn(title_text("Press Enter to start", 22.0));
            parent.spawn(title_text(
                "A/D move   Space jump   K swat   L interact   Q drop   Shift sprint   P pause",
                14.0,
            ));
        });
}

pub fn despawn_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PAUSE SCREEN
// ═══════════════════════════════════════════════════════════════════════

/// Runs after the pause save, so the boards already include this session.
pub fn spawn_pause_menu(mut commands: Commands, ledger: Res<ScoreLedger>) {
    commands
        .spawn((
            PauseMenuRoot,
            overlay_node(),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent.spawn(title_text("Paused", 40.0));
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(48.0),
                    ..default()
                })
                .with_children(|columns| {
                    for category in ScoreCategory::ALL {
                        columns
                            .spawn(Node {
                                flex_direction: FlexDirection::Column,
                                row_gap: Val::Px(6.0),
                                ..default()
                            })
                            .with_children(|column| {
                                column.spawn(title_text(category.title(), 22.0));
                                for line in leaderboard_lines(&ledger, category) {
                                    column.spawn(title_text(&line, 16.0));
                                }
                            });
                    }
                });
            parent.spawn(title_text("Press P to resume", 18.0));
        });
}

pub fn despawn_pause_menu(mut commands: Commands, query: Query<Entity, With<PauseMenuRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}
