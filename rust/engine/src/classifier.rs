//! Line classification for dealer session logs.
//!
//! [`classify`] runs every matcher in [`MATCHERS`] against one raw log line
//! and returns all the events found, in table order. Matchers are
//! independent and stateless; set-once rules (timestamp, hand id) belong to
//! the [`HandBuilder`](crate::builder::HandBuilder).
//!
//! Lines may come straight from the CSV export, where quotes around names
//! are doubled (`"""Alice @ x1"" calls 20"`), or be plain text
//! (`"Alice" calls 20`). Name captures accept one or more quotes on each
//! side and are always passed through [`normalize_name`].

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::cards::split_card_list;
use crate::names::normalize_name;
use crate::record::{Action, ActionKind, ShowdownEntry, Street, Winner};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Blind {
    Small,
    Big,
}

/// One seat from a player stacks line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SeatStack {
    /// Zero-based place in the listing; drives the position.
    pub index: usize,
    pub name: String,
    pub stack: u64,
}

/// A typed extraction from one log line.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    HandStart { hand_id: String },
    Timestamp(String),
    Dealer(String),
    /// A blind post; `action` is the matching preflop entry.
    BlindPost { blind: Blind, action: Action },
    /// Every seat of a stacks line, in listed order.
    PlayerStacks(Vec<SeatStack>),
    /// `board` already holds what the street keeps: all three flop cards,
    /// or only the newest card for turn and river. `None` when the line
    /// carries no bracketed card list.
    StreetMarker {
        street: Street,
        board: Option<Vec<String>>,
    },
    Action(Action),
    HoleCards([String; 2]),
    Showdown(ShowdownEntry),
    PotWin(Winner),
    RunItTwice,
}

type Matcher = fn(&str) -> Option<Event>;

/// Matchers in application order.
pub const MATCHERS: &[(&str, Matcher)] = &[
    ("hand_start", match_hand_start),
    ("timestamp", match_timestamp),
    ("dealer", match_dealer),
    ("blind_post", match_blind_post),
    ("player_stacks", match_player_stacks),
    ("street_marker", match_street_marker),
    ("action", match_action),
    ("hole_cards", match_hole_cards),
    ("showdown", match_showdown),
    ("pot_win", match_pot_win),
    ("run_it_twice", match_run_it_twice),
];

/// Classifies one raw log line. Unrecognized lines yield no events.
///
/// ```rust
/// use handlog_engine::classifier::{classify, Event};
///
/// let events = classify(r#""Alice" folds"#);
/// assert!(matches!(&events[..], [Event::Action(a)] if a.player == "Alice"));
/// assert!(classify("some chat message").is_empty());
/// ```
pub fn classify(line: &str) -> Vec<Event> {
    MATCHERS.iter().filter_map(|(_, m)| m(line)).collect()
}

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($re).expect(concat!("valid ", stringify!($name), " regex")))
        }
    };
}

pattern!(hand_start_re, r"hand #\d+ \(id: (\w+)\)");
pattern!(timestamp_re, r"(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}.\d+Z)");
pattern!(dealer_re, r#"dealer: "+([^"]+)"+"#);
pattern!(blind_re, r#""+([^"]+)"+ posts a (small|big) blind of (\d+)"#);
pattern!(seat_re, r#"#\d+ "+([^"]+)"+ \((\d+)\)"#);
pattern!(bracket_re, r"\[(.*?)\]");
pattern!(chip_action_re, r#""+([^"]+)"+ (raises to|bets|calls) (\d+)"#);
pattern!(bare_action_re, r#""+([^"]+)"+ (folds|checks)"#);
pattern!(hole_cards_re, r#"Your hand is ([^,"]+), ([^,"]+)"#);
pattern!(showdown_re, r#""+([^"]+)"+ shows a ([^".]+)"#);
pattern!(
    pot_win_re,
    r#""+([^"]+)"+ collected (\d+) from pot with (.+?) \(combination: ([^)]+)\)"#
);

fn amount(caps: &Captures<'_>, idx: usize) -> Option<u64> {
    caps.get(idx)?.as_str().parse().ok()
}

fn match_hand_start(line: &str) -> Option<Event> {
    if !line.contains("starting hand") {
        return None;
    }
    let caps = hand_start_re().captures(line)?;
    Some(Event::HandStart {
        hand_id: caps[1].to_string(),
    })
}

fn match_timestamp(line: &str) -> Option<Event> {
    let caps = timestamp_re().captures(line)?;
    Some(Event::Timestamp(caps[1].to_string()))
}

fn match_dealer(line: &str) -> Option<Event> {
    if !line.contains("dealer:") {
        return None;
    }
    let caps = dealer_re().captures(line)?;
    Some(Event::Dealer(normalize_name(&caps[1])))
}

fn match_blind_post(line: &str) -> Option<Event> {
    let caps = blind_re().captures(line)?;
    let (blind, kind) = match &caps[2] {
        "small" => (Blind::Small, ActionKind::PostsSmallBlind),
        _ => (Blind::Big, ActionKind::PostsBigBlind),
    };
    Some(Event::BlindPost {
        blind,
        action: Action {
            player: normalize_name(&caps[1]),
            action: kind,
            amount: Some(amount(&caps, 3)?),
            all_in: false,
        },
    })
}

fn match_player_stacks(line: &str) -> Option<Event> {
    if !line.contains("Player stacks") {
        return None;
    }
    let seats = seat_re()
        .captures_iter(line)
        .enumerate()
        .filter_map(|(index, caps)| {
            Some(SeatStack {
                index,
                name: normalize_name(&caps[1]),
                stack: amount(&caps, 2)?,
            })
        })
        .collect();
    Some(Event::PlayerStacks(seats))
}

fn match_street_marker(line: &str) -> Option<Event> {
    let street = if line.contains("Flop:") {
        Street::Flop
    } else if line.contains("Turn:") {
        Street::Turn
    } else if line.contains("River:") {
        Street::River
    } else {
        return None;
    };
    let board = bracket_re().captures(line).map(|caps| {
        let mut cards = split_card_list(&caps[1]);
        // Turn and river lines render the cumulative board; keep the new card.
        if street != Street::Flop && cards.len() > 1 {
            cards = cards.split_off(cards.len() - 1);
        }
        cards
    });
    Some(Event::StreetMarker { street, board })
}

/// The amount-bearing shape is tried before the bare shape.
fn match_action(line: &str) -> Option<Event> {
    if let Some(caps) = chip_action_re().captures(line) {
        let kind = match &caps[2] {
            "raises to" => ActionKind::Raises,
            "bets" => ActionKind::Bets,
            _ => ActionKind::Calls,
        };
        return Some(Event::Action(Action {
            player: normalize_name(&caps[1]),
            action: kind,
            amount: Some(amount(&caps, 3)?),
            all_in: line.contains("all in"),
        }));
    }
    let caps = bare_action_re().captures(line)?;
    let kind = match &caps[2] {
        "folds" => ActionKind::Folds,
        _ => ActionKind::Checks,
    };
    Some(Event::Action(Action {
        player: normalize_name(&caps[1]),
        action: kind,
        amount: None,
        all_in: false,
    }))
}

fn match_hole_cards(line: &str) -> Option<Event> {
    if !line.contains("Your hand") {
        return None;
    }
    let caps = hole_cards_re().captures(line)?;
    Some(Event::HoleCards([
        caps[1].trim().to_string(),
        caps[2].trim().to_string(),
    ]))
}

fn match_showdown(line: &str) -> Option<Event> {
    let caps = showdown_re().captures(line)?;
    Some(Event::Showdown(ShowdownEntry {
        player: normalize_name(&caps[1]),
        hole_cards: split_card_list(&caps[2]),
    }))
}

fn match_pot_win(line: &str) -> Option<Event> {
    let caps = pot_win_re().captures(line)?;
    Some(Event::PotWin(Winner {
        player: normalize_name(&caps[1]),
        amount: amount(&caps, 2)?,
        hand: caps[3].to_string(),
        combo: split_card_list(&caps[4]),
    }))
}

fn match_run_it_twice(line: &str) -> Option<Event> {
    line.contains("run it twice").then_some(Event::RunItTwice)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(line: &str) -> Event {
        let mut events = classify(line);
        assert_eq!(events.len(), 1, "expected one event for {line:?}: {events:?}");
        events.remove(0)
    }

    #[test]
    fn hand_start_line_carries_id_timestamp_and_dealer() {
        let line = r#""-- starting hand #12 (id: k3xq9zz1) (No Limit Texas Hold'em) (dealer: ""Alice @ a1"") --",2025-04-09T20:00:00.123Z,174422880012300"#;
        let events = classify(line);
        assert_eq!(
            events,
            vec![
                Event::HandStart {
                    hand_id: "k3xq9zz1".into()
                },
                Event::Timestamp("2025-04-09T20:00:00.123Z".into()),
                Event::Dealer("Alice".into()),
            ]
        );
    }

    #[test]
    fn blind_post_in_plain_quotes() {
        match only(r#""Player1" posts a small blind of 20"#) {
            Event::BlindPost { blind, action } => {
                assert_eq!(blind, Blind::Small);
                assert_eq!(action.player, "Player1");
                assert_eq!(action.action, ActionKind::PostsSmallBlind);
                assert_eq!(action.amount, Some(20));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn blind_post_in_csv_quotes() {
        match only(r#""""Bob @ zz"" posts a big blind of 40""#) {
            Event::BlindPost { blind, action } => {
                assert_eq!(blind, Blind::Big);
                assert_eq!(action.player, "Bob");
                assert_eq!(action.amount, Some(40));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn stacks_line_lists_every_seat() {
        let line = r#""Player stacks: #1 ""Alice @ a1"" (1000) | #3 ""Bob @ b2"" (2000) | #7 ""Carol @ c3"" (1500)""#;
        match only(line) {
            Event::PlayerStacks(seats) => {
                let names: Vec<_> = seats.iter().map(|s| s.name.as_str()).collect();
                assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
                assert_eq!(seats[1].stack, 2000);
                assert_eq!(seats[2].index, 2);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn overflowing_stack_keeps_listed_index() {
        let line = r#"Player stacks: #1 "A" (1000) | #2 "B" (99999999999999999999999) | #3 "Hero" (500)"#;
        match only(line) {
            Event::PlayerStacks(seats) => {
                let listed: Vec<_> = seats.iter().map(|s| (s.index, s.name.as_str())).collect();
                assert_eq!(listed, vec![(0, "A"), (2, "Hero")]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn marker_without_card_list_has_no_board() {
        assert_eq!(
            only("Flop: (redeal)"),
            Event::StreetMarker {
                street: Street::Flop,
                board: None,
            }
        );
    }

    #[test]
    fn flop_keeps_all_cards() {
        assert_eq!(
            only("Flop:  [2h, 7h, 9c]"),
            Event::StreetMarker {
                street: Street::Flop,
                board: Some(vec!["2h".into(), "7h".into(), "9c".into()]),
            }
        );
    }

    #[test]
    fn turn_and_river_keep_only_newest_card() {
        assert_eq!(
            only("Turn: 2h, 7h, 9c [Qs]"),
            Event::StreetMarker {
                street: Street::Turn,
                board: Some(vec!["Qs".into()]),
            }
        );
        assert_eq!(
            only("River: [2h, 7h, 9c, Qs, 3d]"),
            Event::StreetMarker {
                street: Street::River,
                board: Some(vec!["3d".into()]),
            }
        );
    }

    #[test]
    fn second_run_board_is_not_a_marker() {
        assert!(classify("Flop (second run): [2h, 7h, 9c]").is_empty());
    }

    #[test]
    fn raise_is_normalized_and_all_in_flagged() {
        match only(r#""Bob" raises to 900 and go all in"#) {
            Event::Action(a) => {
                assert_eq!(a.action, ActionKind::Raises);
                assert_eq!(a.amount, Some(900));
                assert!(a.all_in);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn bare_actions_have_no_amount() {
        for (line, kind) in [
            (r#""Bob" folds"#, ActionKind::Folds),
            (r#""Bob" checks"#, ActionKind::Checks),
        ] {
            match only(line) {
                Event::Action(a) => {
                    assert_eq!(a.action, kind);
                    assert_eq!(a.amount, None);
                    assert!(!a.all_in);
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn hole_cards_from_csv_line() {
        assert_eq!(
            only(r#""Your hand is A♥, K♥""#),
            Event::HoleCards(["A♥".into(), "K♥".into()])
        );
    }

    #[test]
    fn showdown_cards_stop_at_sentence_end() {
        assert_eq!(
            only(r#""""Bob @ b2"" shows a 7♠, 7♥.""#),
            Event::Showdown(ShowdownEntry {
                player: "Bob".into(),
                hole_cards: vec!["7♠".into(), "7♥".into()],
            })
        );
    }

    #[test]
    fn pot_win_with_combination() {
        let line = r#""Bob" collected 800 from pot with Pair, 7's (combination: 7♠, 7♥, A♦, K♣, Q♥)"#;
        assert_eq!(
            only(line),
            Event::PotWin(Winner {
                player: "Bob".into(),
                amount: 800,
                hand: "Pair, 7's".into(),
                combo: vec![
                    "7♠".into(),
                    "7♥".into(),
                    "A♦".into(),
                    "K♣".into(),
                    "Q♥".into()
                ],
            })
        );
    }

    #[test]
    fn run_it_twice_marker() {
        assert_eq!(
            only("All players in hand choose to run it twice."),
            Event::RunItTwice
        );
    }

    #[test]
    fn overflowing_amount_yields_nothing() {
        assert!(classify(r#""Bob" calls 99999999999999999999999"#).is_empty());
    }
}
