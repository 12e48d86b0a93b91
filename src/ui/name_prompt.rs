use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::core::config::EditorConfig;
use crate::net::sync::{SaveKind, SaveRequest};

const PROMPT_BG: Color = Color::srgba(0.02, 0.02, 0.05, 0.92);

pub struct NamePromptPlugin;

impl Plugin for NamePromptPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NamePrompt>().add_systems(
            Update,
            (prompt_keyboard, prompt_ui_sync, prompt_buffer_display).chain(),
        );
    }
}

/// Modal name entry for the two save actions. Enter confirms with the typed
/// name; Escape or an empty buffer fall back to the configured default name.
/// Either way the save proceeds, mirroring `prompt() || default`.
#[derive(Resource, Default, Debug)]
pub struct NamePrompt {
    pub active: Option<SaveKind>,
    pub buffer: String,
}

impl NamePrompt {
    pub fn open(&mut self, kind: SaveKind) {
        self.active = Some(kind);
        self.buffer.clear();
    }
}

#[derive(Component)]
struct PromptRoot;
#[derive(Component)]
struct PromptBufferText;

fn prompt_keyboard(
    mut prompt: ResMut<NamePrompt>,
    mut keys: EventReader<KeyboardInput>,
    cfg: Res<EditorConfig>,
    mut saves: EventWriter<SaveRequest>,
) {
    let Some(kind) = prompt.active else {
        keys.clear();
        return;
    };
    for ev in keys.read() {
        if !ev.state.is_pressed() {
            continue;
        }
        match &ev.logical_key {
            Key::Enter | Key::Escape => {
                let cancelled = matches!(ev.logical_key, Key::Escape);
                let typed = prompt.buffer.trim();
                let name = if cancelled || typed.is_empty() {
                    match kind {
                        SaveKind::Formation => cfg.strings.default_formation_name.clone(),
                        SaveKind::Team => cfg.strings.default_team_name.clone(),
                    }
                } else {
                    typed.to_string()
                };
                saves.write(SaveRequest { kind, name });
                prompt.active = None;
                prompt.buffer.clear();
                break;
            }
            Key::Backspace => {
                prompt.buffer.pop();
            }
            Key::Space => {
                prompt.buffer.push(' ');
            }
            Key::Character(text) => {
                prompt.buffer.push_str(text);
            }
            _ => {}
        }
    }
}

/// Spawn the modal box when a prompt opens, tear it down when it closes.
fn prompt_ui_sync(
    mut commands: Commands,
    prompt: Res<NamePrompt>,
    cfg: Res<EditorConfig>,
    roots: Query<Entity, With<PromptRoot>>,
) {
    if !prompt.is_changed() {
        return;
    }
    match (prompt.active, roots.single()) {
        (Some(kind), Err(_)) => {
            let text = match kind {
                SaveKind::Formation => cfg.strings.formation_prompt.clone(),
                SaveKind::Team => cfg.strings.team_prompt.clone(),
            };
            commands
                .spawn((
                    PromptRoot,
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Percent(25.0),
                        right: Val::Percent(25.0),
                        top: Val::Percent(40.0),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(14.0)),
                        row_gap: Val::Px(8.0),
                        ..default()
                    },
                    BackgroundColor(PROMPT_BG),
                ))
                .with_children(|root| {
                    root.spawn((
                        Text::new(text),
                        TextFont {
                            font_size: 14.0,
                            ..Default::default()
                        },
                        TextColor(Color::WHITE),
                    ));
                    root.spawn((
                        PromptBufferText,
                        Text::new("_"),
                        TextFont {
                            font_size: 14.0,
                            ..Default::default()
                        },
                        TextColor(Color::srgb(0.75, 0.85, 0.95)),
                    ));
                });
        }
        (None, Ok(root)) => {
            commands.entity(root).despawn();
        }
        _ => {}
    }
}

fn prompt_buffer_display(
    prompt: Res<NamePrompt>,
    mut texts: Query<&mut Text, With<PromptBufferText>>,
) {
    if prompt.active.is_none() || !prompt.is_changed() {
        return;
    }
    if let Ok(mut text) = texts.single_mut() {
        let shown = format!("{}_", prompt.buffer);
        if text.as_str() != shown {
            *text = Text::new(shown);
        }
    }
}
