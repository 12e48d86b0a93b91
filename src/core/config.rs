use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 640.0,
            title: "Taktikboard".into(),
        }
    }
}

/// Court geometry in pixels. Defaults derive from a 9x18 m volleyball court
/// at 30 px/m; the net sits at mid-height.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CourtConfig {
    pub width: f32,
    pub height: f32,
}
impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            width: 270.0,
            height: 540.0,
        }
    }
}
impl CourtConfig {
    pub fn net_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Court space (top-left origin, y down, matching the persisted data)
    /// to Bevy world space (court centered on the origin, y up).
    pub fn court_to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }

    pub fn world_to_court(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x + self.width / 2.0, self.height / 2.0 - p.y)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}
impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".into(),
        }
    }
}

/// Hit radii for the pointer controller, in court units.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    pub ball_grab_radius: f32,
    pub player_grab_radius: f32,
    pub snap_radius: f32,
}
impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            ball_grab_radius: 15.0,
            player_grab_radius: 20.0,
            snap_radius: 15.0,
        }
    }
}

/// User-facing strings. The original UI is German; everything here is data,
/// not behavior, and can be overridden from the config file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StringsConfig {
    pub formations_heading: String,
    pub teams_heading: String,
    pub save_formation_label: String,
    pub save_team_label: String,
    pub formation_prompt: String,
    pub team_prompt: String,
    pub default_formation_name: String,
    pub default_team_name: String,
}
impl Default for StringsConfig {
    fn default() -> Self {
        Self {
            formations_heading: "Aufstellungen".into(),
            teams_heading: "Teams".into(),
            save_formation_label: "Aufstellung speichern".into(),
            save_team_label: "Team speichern".into(),
            formation_prompt: "Geben Sie einen Namen für die Aufstellung ein:".into(),
            team_prompt: "Geben Sie einen Namen für das Team ein:".into(),
            default_formation_name: "Neue Aufstellung".into(),
            default_team_name: "Neues Team".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    pub window: WindowConfig,
    pub court: CourtConfig,
    pub api: ApiConfig,
    pub interaction: InteractionConfig,
    pub strings: StringsConfig,
}

impl EditorConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Non-fatal sanity pass; each entry is logged as a warning at startup.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.court.width <= 0.0 || self.court.height <= 0.0 {
            w.push("court dimensions must be > 0".into());
        }
        if self.court.width > self.window.width || self.court.height > self.window.height {
            w.push(format!(
                "court {}x{} larger than window {}x{}; edges will be clipped",
                self.court.width, self.court.height, self.window.width, self.window.height
            ));
        }
        if self.api.base_url.trim().is_empty() {
            w.push("api.base_url is empty; load and save will fail".into());
        }
        if self.api.base_url.ends_with('/') {
            w.push("api.base_url has a trailing slash; request paths will double it".into());
        }
        let ia = &self.interaction;
        if ia.ball_grab_radius <= 0.0 {
            w.push("interaction.ball_grab_radius must be > 0".into());
        }
        if ia.player_grab_radius <= 0.0 {
            w.push("interaction.player_grab_radius must be > 0".into());
        }
        if ia.snap_radius <= 0.0 {
            w.push("interaction.snap_radius must be > 0".into());
        }
        if ia.ball_grab_radius > ia.player_grab_radius {
            w.push(format!(
                "ball_grab_radius {} exceeds player_grab_radius {}; ball priority zone swallows player grabs",
                ia.ball_grab_radius, ia.player_grab_radius
            ));
        }
        w
    }
}
