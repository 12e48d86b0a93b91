use bevy::prelude::*;

use super::model::{synthesized_player_name, FormationDoc, TeamDoc};

/// One player on the court. Positions are court-local (top-left origin,
/// y down), matching the persisted coordinate system.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub pos: Vec2,
    pub name: String,
}

/// The whole editor state: everything the renderer and the pointer
/// controller read from, and everything load/apply/drag mutate. Kept as one
/// explicit resource instead of scattered globals.
#[derive(Debug, Resource, Clone, Default)]
pub struct Scene {
    pub players: Vec<PlayerState>,
    pub ball: Option<Vec2>,
    /// One marker per loaded formation, at that formation's ball position.
    /// Derived, never persisted; index-aligned with `formations`.
    pub markers: Vec<Vec2>,
    pub formations: Vec<FormationDoc>,
    pub teams: Vec<TeamDoc>,
}

impl Scene {
    /// Replace the loaded lists wholesale (a load cycle). Rebuilds markers
    /// and applies the first formation if any exist; otherwise the court is
    /// left empty.
    pub fn load(&mut self, formations: Vec<FormationDoc>, teams: Vec<TeamDoc>) {
        self.formations = formations;
        self.teams = teams;
        self.rebuild_markers();
        if self.formations.is_empty() {
            self.players.clear();
            self.ball = None;
        } else {
            self.apply_formation(0);
        }
    }

    pub fn rebuild_markers(&mut self) {
        self.markers = self
            .formations
            .iter()
            .map(|f| Vec2::from(f.ball))
            .collect();
    }

    /// Apply formation `index` in full: ball := formation ball, players are
    /// rebuilt from the stored offsets, names come from the formation or are
    /// synthesized ("P1", "P2", ...).
    pub fn apply_formation(&mut self, index: usize) {
        let Some(doc) = self.formations.get(index) else {
            warn!(target: "editor", "apply_formation: index {index} out of range");
            return;
        };
        let ball = Vec2::from(doc.ball);
        self.players = doc
            .offsets
            .iter()
            .enumerate()
            .map(|(i, off)| PlayerState {
                pos: ball + Vec2::from(*off),
                name: doc
                    .names
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| synthesized_player_name(i)),
            })
            .collect();
        self.ball = Some(ball);
    }

    /// Apply team `index`: overwrite player names positionally up to the
    /// shorter of the two lists. Positions and player count are untouched.
    pub fn apply_team(&mut self, index: usize) {
        let Some(doc) = self.teams.get(index) else {
            warn!(target: "editor", "apply_team: index {index} out of range");
            return;
        };
        for (player, name) in self.players.iter_mut().zip(doc.player_names.iter()) {
            player.name = name.clone();
        }
    }

    /// First marker within `radius` of `pos`, in list order.
    pub fn snap_index(&self, pos: Vec2, radius: f32) -> Option<usize> {
        self.markers
            .iter()
            .position(|m| m.distance(pos) < radius)
    }

    /// Serialize the current layout as a formation document. Offsets are
    /// relative to the ball, so `None` without a ball on the court.
    pub fn formation_doc(&self, name: String) -> Option<FormationDoc> {
        let ball = self.ball?;
        Some(FormationDoc {
            name,
            ball: ball.into(),
            offsets: self
                .players
                .iter()
                .map(|p| (p.pos - ball).into())
                .collect(),
            names: self.players.iter().map(|p| p.name.clone()).collect(),
        })
    }

    /// Serialize the current player names as a team document.
    pub fn team_doc(&self, name: String) -> TeamDoc {
        TeamDoc {
            name,
            player_names: self.players.iter().map(|p| p.name.clone()).collect(),
        }
    }
}
