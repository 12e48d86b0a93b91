use bevy::prelude::*;
use tactic_board::interaction::drag::{drag_position, pick_target, DragTarget};
use tactic_board::{PlayerState, Scene};

const BALL_R: f32 = 15.0;
const PLAYER_R: f32 = 20.0;

fn scene_with(ball: Option<Vec2>, players: &[(f32, f32)]) -> Scene {
    Scene {
        ball,
        players: players
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| PlayerState {
                pos: Vec2::new(x, y),
                name: format!("P{}", i + 1),
            })
            .collect(),
        ..Default::default()
    }
}

#[test]
fn ball_wins_over_overlapping_player() {
    // Press is within 15 of the ball and within 20 of the player.
    let scene = scene_with(Some(Vec2::new(50.0, 50.0)), &[(55.0, 50.0)]);
    let (target, _) = pick_target(&scene, Vec2::new(52.0, 50.0), BALL_R, PLAYER_R).unwrap();
    assert_eq!(target, DragTarget::Ball);
}

#[test]
fn player_selected_outside_ball_radius() {
    // 16 units from the ball (outside 15), 11 from the player (inside 20).
    let scene = scene_with(Some(Vec2::new(50.0, 50.0)), &[(55.0, 50.0)]);
    let (target, _) = pick_target(&scene, Vec2::new(66.0, 50.0), BALL_R, PLAYER_R).unwrap();
    assert_eq!(target, DragTarget::Player(0));
}

#[test]
fn first_player_in_list_order_wins_on_overlap() {
    let scene = scene_with(None, &[(50.0, 50.0), (52.0, 50.0)]);
    let (target, _) = pick_target(&scene, Vec2::new(51.0, 50.0), BALL_R, PLAYER_R).unwrap();
    assert_eq!(target, DragTarget::Player(0));
}

#[test]
fn miss_keeps_idle() {
    let scene = scene_with(Some(Vec2::new(50.0, 50.0)), &[(100.0, 100.0)]);
    assert!(pick_target(&scene, Vec2::new(200.0, 200.0), BALL_R, PLAYER_R).is_none());
}

#[test]
fn hit_radius_is_exclusive() {
    let scene = scene_with(Some(Vec2::new(0.0, 0.0)), &[]);
    assert!(pick_target(&scene, Vec2::new(15.0, 0.0), BALL_R, PLAYER_R).is_none());
    assert!(pick_target(&scene, Vec2::new(14.9, 0.0), BALL_R, PLAYER_R).is_some());
}

#[test]
fn grab_offset_is_preserved_across_moves() {
    let scene = scene_with(None, &[(50.0, 50.0)]);
    // Press 4 right, 3 up of the player's center.
    let press = Vec2::new(54.0, 47.0);
    let (target, offset) = pick_target(&scene, press, BALL_R, PLAYER_R).unwrap();
    assert_eq!(target, DragTarget::Player(0));
    assert_eq!(offset, Vec2::new(4.0, -3.0));
    // Every later move keeps the grabbed point under the pointer.
    for pointer in [Vec2::new(100.0, 100.0), Vec2::new(12.5, 301.0)] {
        assert_eq!(drag_position(pointer, offset), pointer - Vec2::new(4.0, -3.0));
    }
}
