//! Mini-game models

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// `data` of `GET /game/rule`
#[derive(Debug, Clone, Deserialize)]
pub struct GameRule {
    #[serde(default)]
    pub game_count: i64,
}

/// Server-issued game identifier (string or number on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GameId(pub serde_json::Value);

impl<'de> Deserialize<'de> for GameId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(_) | serde_json::Value::Number(_) => Ok(GameId(value)),
            other => Err(serde::de::Error::custom(format!(
                "game_id must be a string or number, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// `data` of `GET /game/play`
#[derive(Debug, Clone, Deserialize)]
pub struct GamePlay {
    pub game_id: GameId,
}

/// Body of `POST /game/claim`
#[derive(Debug, Clone, Serialize)]
pub struct GameClaimRequest {
    pub game_id: GameId,
    pub point: u32,
}
