use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::RecordError;

/// Game description stamped on every record. Variants are not detected.
pub const GAME_TYPE: &str = "No Limit Texas Hold'em";

/// Represents a betting street in Texas Hold'em poker.
/// Ordered so that a later street compares greater than an earlier one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    /// Moves the cursor to `target` if it lies ahead; never moves back.
    ///
    /// ```rust
    /// use handlog_engine::record::Street;
    ///
    /// assert_eq!(Street::Preflop.advance_to(Street::Flop), Street::Flop);
    /// assert_eq!(Street::Turn.advance_to(Street::Flop), Street::Turn);
    /// ```
    pub fn advance_to(self, target: Street) -> Street {
        self.max(target)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }
}

/// Seat position, assigned from the order of the player stacks line.
///
/// Serialized as `"SB"`, `"BB"` or `"UTG+n"`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Position {
    SmallBlind,
    BigBlind,
    /// `UTG+n` with `n >= 1`
    Utg(u32),
}

impl Position {
    /// Position of the seat listed at zero-based `index` in the stacks line.
    pub fn from_seat_index(index: usize) -> Position {
        match index {
            0 => Position::SmallBlind,
            1 => Position::BigBlind,
            n => Position::Utg(u32::try_from(n - 1).unwrap_or(u32::MAX)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::SmallBlind => write!(f, "SB"),
            Position::BigBlind => write!(f, "BB"),
            Position::Utg(n) => write!(f, "UTG+{}", n),
        }
    }
}

impl FromStr for Position {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SB" => Ok(Position::SmallBlind),
            "BB" => Ok(Position::BigBlind),
            other => other
                .strip_prefix("UTG+")
                .and_then(|n| n.parse::<u32>().ok())
                .filter(|n| *n >= 1)
                .map(Position::Utg)
                .ok_or_else(|| RecordError::InvalidPosition(other.to_string())),
        }
    }
}

impl From<Position> for String {
    fn from(p: Position) -> Self {
        p.to_string()
    }
}

impl TryFrom<String> for Position {
    type Error = RecordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    PostsSmallBlind,
    PostsBigBlind,
    Raises,
    Bets,
    Calls,
    Folds,
    Checks,
}

impl ActionKind {
    /// True for the actions that count toward VPIP.
    pub fn is_voluntary(&self) -> bool {
        matches!(self, ActionKind::Calls | ActionKind::Raises)
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// A single player action. `amount` is only present for chip-moving
/// actions and `all_in` only when set.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub player: String,
    pub action: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub all_in: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub name: String,
    pub position: Option<Position>,
    pub stack_bb: Option<f64>,
    pub hole_cards: Option<Vec<String>>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub stack_size: u64,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Blinds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_blind: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub big_blind: Option<u64>,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    pub dealer: Option<String>,
    pub players: Vec<Player>,
    pub blinds: Blinds,
}

/// Board cards dealt on a postflop street and the actions taken on it.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreetRecord {
    pub board: Vec<String>,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actions {
    pub preflop: Vec<Action>,
    pub flop: StreetRecord,
    pub turn: StreetRecord,
    pub river: StreetRecord,
}

impl Actions {
    pub(crate) fn on_mut(&mut self, street: Street) -> &mut Vec<Action> {
        match street {
            Street::Preflop => &mut self.preflop,
            Street::Flop => &mut self.flop.actions,
            Street::Turn => &mut self.turn.actions,
            Street::River => &mut self.river.actions,
        }
    }

    /// Total number of actions across all streets.
    pub fn len(&self) -> usize {
        self.preflop.len()
            + self.flop.actions.len()
            + self.turn.actions.len()
            + self.river.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowdownEntry {
    pub player: String,
    pub hole_cards: Vec<String>,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Winner {
    pub player: String,
    pub amount: u64,
    pub hand: String,
    pub combo: Vec<String>,
}

/// Structured record of one played hand, assembled from its log lines.
/// Serialized as one element of the top-level JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandRecord {
    /// Identifier from the hand start line
    pub hand_id: Option<String>,
    /// First ISO-8601 timestamp seen in the hand
    pub timestamp: Option<String>,
    pub game_type: String,
    pub run_it_twice: bool,
    pub hero: Hero,
    pub table: Table,
    /// Stack of every seated player in big-blind units
    pub stacks_bb: BTreeMap<String, f64>,
    pub actions: Actions,
    pub showdown: Vec<ShowdownEntry>,
    pub winners: Vec<Winner>,
}

impl Default for HandRecord {
    fn default() -> Self {
        Self {
            hand_id: None,
            timestamp: None,
            game_type: GAME_TYPE.to_string(),
            run_it_twice: false,
            hero: Hero::default(),
            table: Table::default(),
            stacks_bb: BTreeMap::new(),
            actions: Actions::default(),
            showdown: Vec::new(),
            winners: Vec::new(),
        }
    }
}

impl HandRecord {
    /// An empty record whose hero is `hero`.
    pub fn for_hero(hero: &str) -> Self {
        Self {
            hero: Hero {
                name: hero.to_string(),
                ..Hero::default()
            },
            ..Self::default()
        }
    }
}

/// Rounds to two fractional digits, the precision used for bb stacks and
/// percentages.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
