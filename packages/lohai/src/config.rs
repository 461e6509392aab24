//! Round configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::rules::SpecialPointPolicy;
use crate::domain::state::PlayerId;

/// Knobs for starting a round.
///
/// All fields are optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Shuffle seed. `None` shuffles from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// How special cards are valued when one is turned as the trump card.
    pub special_points: SpecialPointPolicy,

    /// Seat that leads the first trick.
    pub first_player: PlayerId,
}

impl RoundConfig {
    /// Build a config from optional JSON, falling back to defaults when the
    /// value is missing or malformed.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_default(),
            None => Self::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_special_points(mut self, policy: SpecialPointPolicy) -> Self {
        self.special_points = policy;
        self
    }

    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }
}
