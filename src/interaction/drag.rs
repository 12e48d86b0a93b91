use bevy::prelude::*;

use crate::core::config::EditorConfig;
use crate::core::scene::Scene;
use crate::ui::name_prompt::NamePrompt;

pub struct DragPlugin;

impl Plugin for DragPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(DragState::default())
            .init_resource::<NamePrompt>()
            .add_systems(Update, (begin_or_end_drag, apply_drag).chain());
    }
}

/// What the pointer currently holds. At most one entity drags at a time;
/// the ball and players are distinct targets and never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Ball,
    Player(usize),
}

/// Idle (`target: None`) or Dragging. `grab_offset` is press position minus
/// entity center, in court space; moves preserve it so the entity keeps the
/// grabbed point under the pointer instead of snapping its center there.
#[derive(Resource, Default, Debug)]
pub struct DragState {
    pub target: Option<DragTarget>,
    pub grab_offset: Vec2,
    /// Last pointer position processed, court space. Moves are edge
    /// triggered: a held-still pointer mutates nothing.
    pub last_pointer: Option<Vec2>,
}

/// Hit test at `pos` (court space): ball first, then players in list order,
/// first match wins. Returns the target and its grab offset.
pub fn pick_target(
    scene: &Scene,
    pos: Vec2,
    ball_radius: f32,
    player_radius: f32,
) -> Option<(DragTarget, Vec2)> {
    if let Some(ball) = scene.ball {
        if ball.distance(pos) < ball_radius {
            return Some((DragTarget::Ball, pos - ball));
        }
    }
    for (i, player) in scene.players.iter().enumerate() {
        if player.pos.distance(pos) < player_radius {
            return Some((DragTarget::Player(i), pos - player.pos));
        }
    }
    None
}

/// New entity center for a pointer at `pointer` given the press-time offset.
pub fn drag_position(pointer: Vec2, grab_offset: Vec2) -> Vec2 {
    pointer - grab_offset
}

fn cursor_world_pos(
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// First touch point wins; otherwise the mouse cursor.
fn primary_pointer_world_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    if let Some(touch) = touches.iter().next() {
        return cursor_world_pos(camera_q, touch.position());
    }
    let cursor = window.cursor_position()?;
    cursor_world_pos(camera_q, cursor)
}

fn begin_or_end_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut drag: ResMut<DragState>,
    scene: Res<Scene>,
    cfg: Res<EditorConfig>,
    prompt: Res<NamePrompt>,
) {
    let released = buttons.just_released(MouseButton::Left)
        || touches.iter_just_released().next().is_some()
        || touches.iter_just_canceled().next().is_some();
    if released {
        // Unconditional, regardless of position; an OS-cancelled touch ends
        // the drag the same as a lifted finger.
        drag.target = None;
        drag.last_pointer = None;
    }
    let pressed =
        buttons.just_pressed(MouseButton::Left) || touches.iter_just_pressed().next().is_some();
    if drag.target.is_none() && pressed && prompt.active.is_none() {
        let Ok(window) = windows_q.single() else {
            return;
        };
        let Some(world_pos) = primary_pointer_world_pos(window, &touches, &camera_q) else {
            return;
        };
        let court_pos = cfg.court.world_to_court(world_pos);
        if let Some((target, offset)) = pick_target(
            &scene,
            court_pos,
            cfg.interaction.ball_grab_radius,
            cfg.interaction.player_grab_radius,
        ) {
            debug!(target: "editor", "drag start {:?} offset {:?}", target, offset);
            drag.target = Some(target);
            drag.grab_offset = offset;
            drag.last_pointer = Some(court_pos);
        }
    }
}

fn apply_drag(
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut drag: ResMut<DragState>,
    mut scene: ResMut<Scene>,
    cfg: Res<EditorConfig>,
) {
    let Some(target) = drag.target else {
        return;
    };
    let Ok(window) = windows_q.single() else {
        return;
    };
    let Some(world_pos) = primary_pointer_world_pos(window, &touches, &camera_q) else {
        return;
    };
    let pointer = cfg.court.world_to_court(world_pos);
    if drag.last_pointer == Some(pointer) {
        return;
    }
    drag.last_pointer = Some(pointer);
    let pos = drag_position(pointer, drag.grab_offset);
    match target {
        DragTarget::Ball => {
            scene.ball = Some(pos);
            // Dragging the ball near a marker re-applies that formation in
            // full, overwriting the position just computed above. The drag
            // stays active with its original grab offset (matches the
            // original tool, even though the next move fights the snap).
            if let Some(i) = scene.snap_index(pos, cfg.interaction.snap_radius) {
                info!(target: "editor", "snap to formation {} ('{}')", i, scene.formations[i].name);
                scene.apply_formation(i);
            }
        }
        DragTarget::Player(i) => {
            if let Some(player) = scene.players.get_mut(i) {
                player.pos = pos;
            }
        }
    }
}
