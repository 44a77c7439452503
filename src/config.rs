// Game configuration. Defaults can be overridden by a JSON block in index.html:
// <script id="tycoon-config" type="application/json">{ "tick_interval_ms": 1000 }</script>
use serde::{Deserialize, Serialize};

use crate::util::clog;

pub const CONFIG_ELEMENT_ID: &str = "tycoon-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Period of the income tick.
    pub tick_interval_ms: u32,
    pub starting_money: i64,
    /// How many seats (from seat 1) are already claimed when the game opens.
    pub initial_active_seats: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 2000,
            starting_money: 2000,
            initial_active_seats: 2,
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: GameConfig = serde_json::from_str(raw)?;
        // a zero period would spin the browser
        if cfg.tick_interval_ms == 0 {
            cfg.tick_interval_ms = Self::default().tick_interval_ms;
        }
        Ok(cfg)
    }

    /// Read the inline config block, falling back to defaults when it is
    /// missing or malformed.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(cfg) => cfg,
                Err(err) => {
                    clog(&format!("Ignoring malformed {}: {}", CONFIG_ELEMENT_ID, err));
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_session() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.tick_interval_ms, 2000);
        assert_eq!(cfg.starting_money, 2000);
        assert_eq!(cfg.initial_active_seats, 2);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = GameConfig::from_json(r#"{ "starting_money": 5000 }"#).unwrap();
        assert_eq!(cfg.starting_money, 5000);
        assert_eq!(cfg.tick_interval_ms, 2000);
        assert_eq!(cfg.initial_active_seats, 2);
    }

    #[test]
    fn zero_interval_falls_back() {
        let cfg = GameConfig::from_json(r#"{ "tick_interval_ms": 0 }"#).unwrap();
        assert_eq!(cfg.tick_interval_ms, 2000);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GameConfig::from_json("{ starting_money: }").is_err());
        assert!(GameConfig::from_json(r#"{ "starting_money": "lots" }"#).is_err());
    }

    #[test]
    fn seeds_roster_from_config() {
        let cfg = GameConfig::from_json(r#"{ "starting_money": 300, "initial_active_seats": 0 }"#).unwrap();
        let gs = crate::model::GameState::with_config(&cfg);
        assert_eq!(gs.active_count(), 0);
        assert!(gs.players.iter().all(|p| p.money == 300));
    }
}
