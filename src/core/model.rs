use serde::{Deserialize, Serialize};

/// Persisted formation: ball anchor plus player positions stored as offsets
/// relative to the ball. `names` may be absent on the wire; missing entries
/// get synthesized names on apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationDoc {
    pub name: String,
    pub ball: [f32; 2],
    pub offsets: Vec<[f32; 2]>,
    #[serde(default)]
    pub names: Vec<String>,
}

/// Persisted team: display names applied positionally over the current
/// player set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDoc {
    pub name: String,
    pub player_names: Vec<String>,
}

/// Default display name for player `index` when the formation carries none.
pub fn synthesized_player_name(index: usize) -> String {
    format!("P{}", index + 1)
}
