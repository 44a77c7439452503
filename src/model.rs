//! Core data models for the tycoon game.
//! The roster, the building catalog and the reducer that drives them.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::config::GameConfig;
use crate::util::clog;

/// Number of seats on the roster. Fixed for the lifetime of a game.
pub const ROSTER_SIZE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingKind {
    Factory,
    Mill,
    Plant,
    Mine,
    Refinery,
}

impl BuildingKind {
    pub fn label(self) -> &'static str {
        match self {
            BuildingKind::Factory => "Factory",
            BuildingKind::Mill => "Mill",
            BuildingKind::Plant => "Plant",
            BuildingKind::Mine => "Mine",
            BuildingKind::Refinery => "Refinery",
        }
    }
}

/// Immutable catalog entry. Economics are per level 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BuildingTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: BuildingKind,
    pub icon: &'static str,
    /// Units per minute at level 1 (display only, not used for income).
    pub production: u32,
    pub cost: i64,
    /// Money credited per tick at level 1.
    pub income: i64,
}

pub static BUILDING_CATALOG: [BuildingTemplate; 5] = [
    BuildingTemplate {
        id: "steel_mill",
        name: "Steel Mill",
        kind: BuildingKind::Mill,
        icon: "🏭",
        production: 50,
        cost: 1000,
        income: 25,
    },
    BuildingTemplate {
        id: "oil_refinery",
        name: "Oil Refinery",
        kind: BuildingKind::Refinery,
        icon: "🛢️",
        production: 75,
        cost: 2500,
        income: 45,
    },
    BuildingTemplate {
        id: "auto_factory",
        name: "Auto Factory",
        kind: BuildingKind::Factory,
        icon: "🚗",
        production: 30,
        cost: 5000,
        income: 80,
    },
    BuildingTemplate {
        id: "tech_plant",
        name: "Tech Complex",
        kind: BuildingKind::Plant,
        icon: "💻",
        production: 100,
        cost: 10000,
        income: 120,
    },
    BuildingTemplate {
        id: "mining_complex",
        name: "Mining Complex",
        kind: BuildingKind::Mine,
        icon: "⛏️",
        production: 40,
        cost: 3000,
        income: 35,
    },
];

#[cfg(test)]
pub fn find_template(id: &str) -> Option<&'static BuildingTemplate> {
    BUILDING_CATALOG.iter().find(|t| t.id == id)
}

/// A player's copy of a template plus its progression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedBuilding {
    pub id: String,
    pub name: String,
    pub kind: BuildingKind,
    pub icon: String,
    pub production: u32,
    pub cost: i64,
    /// Starts at 1 and only ever goes up.
    pub level: u32,
    /// Cumulative: each upgrade adds the template's base income.
    pub income: i64,
}

impl OwnedBuilding {
    fn acquire(template: &BuildingTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            name: template.name.to_string(),
            kind: template.kind,
            icon: template.icon.to_string(),
            production: template.production,
            cost: template.cost,
            level: 1,
            income: template.income,
        }
    }

    /// Production per minute at the current level.
    pub fn output(&self) -> u64 {
        self.production as u64 * self.level as u64
    }

    pub fn efficiency_percent(&self) -> u32 {
        self.level.saturating_mul(10).min(100)
    }

    /// Raw progress value (level out of 10). Callers clamp for rendering.
    pub fn progress_percent(&self) -> f64 {
        self.level as f64 / 10.0 * 100.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    Orange,
    Turquoise,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    const SEATS: [PlayerColor; ROSTER_SIZE] = [
        PlayerColor::Orange,
        PlayerColor::Turquoise,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
    ];

    pub fn for_seat(index: usize) -> Self {
        Self::SEATS[index % ROSTER_SIZE]
    }

    pub fn css(self) -> &'static str {
        match self {
            PlayerColor::Orange => "#f97316",
            PlayerColor::Turquoise => "#2dd4bf",
            PlayerColor::Blue => "#3b82f6",
            PlayerColor::Green => "#22c55e",
            PlayerColor::Yellow => "#facc15",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub money: i64,
    /// Purchase order; at most one entry per template id.
    pub buildings: Vec<OwnedBuilding>,
    pub active: bool,
    pub color: PlayerColor,
}

impl Player {
    fn seat_name(id: u32) -> String {
        format!("Player {}", id)
    }

    pub fn owned(&self, template_id: &str) -> Option<&OwnedBuilding> {
        self.buildings.iter().find(|b| b.id == template_id)
    }

    /// Cost of the next build: base cost when new, base cost x level when owned.
    pub fn required_cost(&self, template: &BuildingTemplate) -> i64 {
        match self.owned(template.id) {
            Some(b) => template.cost.saturating_mul(b.level as i64),
            None => template.cost,
        }
    }

    pub fn can_afford(&self, template: &BuildingTemplate) -> bool {
        self.money >= self.required_cost(template)
    }

    pub fn income_per_tick(&self) -> i64 {
        self.buildings.iter().map(|b| b.income).sum()
    }
}

/// What a build request did. Every variant other than `Built`/`Upgraded`
/// leaves the state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    Built,
    Upgraded { level: u32 },
    InsufficientFunds { required: i64, available: i64 },
    UnknownPlayer,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
    /// Number of ticks applied since the game started.
    pub elapsed_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        let players = (0..ROSTER_SIZE)
            .map(|i| {
                let id = i as u32 + 1;
                Player {
                    id,
                    name: Player::seat_name(id),
                    money: config.starting_money,
                    buildings: Vec::new(),
                    active: i < config.initial_active_seats,
                    color: PlayerColor::for_seat(i),
                }
            })
            .collect();
        Self {
            players,
            elapsed_ticks: 0,
        }
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn player_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.active).count()
    }

    /// Credit every player with the income of everything they own.
    pub fn advance_tick(&mut self) {
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
        for p in &mut self.players {
            let income = p.income_per_tick();
            p.money = p.money.saturating_add(income);
        }
    }

    /// Claim a seat. Re-joining resets the name to the seat default.
    pub fn join_game(&mut self, player_id: u32) {
        if let Some(p) = self.player_mut(player_id) {
            p.active = true;
            p.name = Player::seat_name(player_id);
        }
    }

    pub fn build_or_upgrade(&mut self, player_id: u32, template: &BuildingTemplate) -> BuildOutcome {
        let Some(p) = self.player_mut(player_id) else {
            return BuildOutcome::UnknownPlayer;
        };
        let required = p.required_cost(template);
        if p.money < required {
            return BuildOutcome::InsufficientFunds {
                required,
                available: p.money,
            };
        }
        p.money -= required;
        match p.buildings.iter_mut().find(|b| b.id == template.id) {
            Some(b) => {
                b.level = b.level.saturating_add(1);
                b.income = b.income.saturating_add(template.income);
                BuildOutcome::Upgraded { level: b.level }
            }
            None => {
                p.buildings.push(OwnedBuilding::acquire(template));
                BuildOutcome::Built
            }
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    Tick, // fired by the ticker every tick_interval_ms
    Join { player_id: u32 },
    Build {
        player_id: u32,
        template: &'static BuildingTemplate,
    },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Tick => new.advance_tick(),
            Join { player_id } => {
                new.join_game(player_id);
                clog(&format!("Join player={}", player_id));
            }
            Build {
                player_id,
                template,
            } => {
                let outcome = new.build_or_upgrade(player_id, template);
                clog(&format!(
                    "Build player={} building={} -> {:?}",
                    player_id, template.id, outcome
                ));
                if !matches!(outcome, BuildOutcome::Built | BuildOutcome::Upgraded { .. }) {
                    return self;
                }
            }
        }
        Rc::new(new)
    }
}
