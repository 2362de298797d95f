//! Hand record assembly.
//!
//! A [`HandBuilder`] consumes the chronologically ordered lines of one hand
//! and threads a forward-only [`Street`] cursor through them. Lines that no
//! matcher recognizes are skipped; building never fails.

use crate::classifier::{classify, Blind, Event, SeatStack};
use crate::record::{round2, HandRecord, Player, Position, Street};
use crate::session::ParseOptions;

/// Incremental builder for one [`HandRecord`].
#[derive(Debug)]
pub struct HandBuilder<'a> {
    options: &'a ParseOptions,
    record: HandRecord,
    street: Street,
    hero_stack: Option<u64>,
    skipped: usize,
}

impl<'a> HandBuilder<'a> {
    pub fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            record: HandRecord::for_hero(options.hero()),
            street: Street::Preflop,
            hero_stack: None,
            skipped: 0,
        }
    }

    /// The street new actions are currently routed to.
    pub fn street(&self) -> Street {
        self.street
    }

    /// Classifies `line` and applies every event found.
    pub fn apply_line(&mut self, line: &str) {
        let events = classify(line);
        if events.is_empty() {
            self.skipped += 1;
            return;
        }
        for event in events {
            self.apply(event);
        }
    }

    pub fn apply(&mut self, event: Event) {
        let rec = &mut self.record;
        match event {
            Event::HandStart { hand_id } => {
                rec.hand_id.get_or_insert(hand_id);
            }
            Event::Timestamp(ts) => {
                rec.timestamp.get_or_insert(ts);
            }
            Event::Dealer(name) => {
                rec.table.dealer.get_or_insert(name);
            }
            Event::BlindPost { blind, action } => {
                let blinds = &mut rec.table.blinds;
                let slot = match blind {
                    Blind::Small => &mut blinds.small_blind,
                    Blind::Big => &mut blinds.big_blind,
                };
                if let Some(amount) = action.amount {
                    slot.get_or_insert(amount);
                }
                rec.actions.preflop.push(action);
            }
            Event::PlayerStacks(seats) => {
                for seat in seats {
                    self.seat_player(seat);
                }
            }
            Event::StreetMarker { street, board } => {
                self.street = self.street.advance_to(street);
                let Some(board) = board else {
                    return;
                };
                match street {
                    Street::Flop => rec.actions.flop.board = board,
                    Street::Turn => rec.actions.turn.board = board,
                    Street::River => rec.actions.river.board = board,
                    Street::Preflop => {}
                }
            }
            Event::Action(action) => {
                rec.actions.on_mut(self.street).push(action);
            }
            Event::HoleCards([a, b]) => {
                rec.hero.hole_cards.get_or_insert_with(|| vec![a, b]);
            }
            Event::Showdown(entry) => rec.showdown.push(entry),
            Event::PotWin(winner) => rec.winners.push(winner),
            Event::RunItTwice => rec.run_it_twice = true,
        }
    }

    fn seat_player(&mut self, seat: SeatStack) {
        let position = Position::from_seat_index(seat.index);
        let hero = self.options.hero();
        if !hero.is_empty() && self.hero_stack.is_none() && seat.name.contains(hero) {
            self.record.hero.position = Some(position);
            self.hero_stack = Some(seat.stack);
        }
        self.record.table.players.push(Player {
            name: seat.name,
            stack_size: seat.stack,
            position,
        });
    }

    /// Resolves big-blind units and returns the finished record.
    ///
    /// Stacks are listed before the blinds are posted, so conversion waits
    /// until the whole hand has been seen.
    pub fn finish(mut self) -> HandRecord {
        let big_blind = self
            .record
            .table
            .blinds
            .big_blind
            .filter(|bb| *bb > 0)
            .unwrap_or(self.options.default_big_blind());
        let to_bb = |chips: u64| round2(chips as f64 / big_blind as f64);

        for player in &self.record.table.players {
            self.record
                .stacks_bb
                .insert(player.name.clone(), to_bb(player.stack_size));
        }
        self.record.hero.stack_bb = self.hero_stack.map(to_bb);

        tracing::debug!(
            hand_id = self.record.hand_id.as_deref().unwrap_or("-"),
            street = self.street.as_str(),
            actions = self.record.actions.len(),
            skipped = self.skipped,
            "hand built"
        );
        self.record
    }
}

/// Builds one record from a chronologically ordered chunk.
pub fn build_hand<S: AsRef<str>>(lines: &[S], options: &ParseOptions) -> HandRecord {
    let mut builder = HandBuilder::new(options);
    for line in lines {
        builder.apply_line(line.as_ref());
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ActionKind;

    fn opts() -> ParseOptions {
        ParseOptions::new("Hero")
    }

    #[test]
    fn actions_route_by_street() {
        let o = opts();
        let mut b = HandBuilder::new(&o);
        b.apply_line(r#""Villain" calls 40"#);
        assert_eq!(b.street(), Street::Preflop);
        b.apply_line("Flop:  [2h, 7h, 9c]");
        assert_eq!(b.street(), Street::Flop);
        b.apply_line(r#""Villain" checks"#);
        b.apply_line("Turn: 2h, 7h, 9c [Qs]");
        b.apply_line(r#""Villain" bets 100"#);
        let rec = b.finish();
        assert_eq!(rec.actions.preflop.len(), 1);
        assert_eq!(rec.actions.flop.actions[0].action, ActionKind::Checks);
        assert_eq!(rec.actions.turn.actions[0].amount, Some(100));
        assert!(rec.actions.river.actions.is_empty());
    }

    #[test]
    fn stale_marker_does_not_regress_cursor() {
        let o = opts();
        let mut b = HandBuilder::new(&o);
        b.apply_line("Turn: 2h, 7h, 9c [Qs]");
        b.apply_line("Flop:  [2h, 7h, 9c]");
        assert_eq!(b.street(), Street::Turn);
        b.apply_line(r#""Villain" folds"#);
        let rec = b.finish();
        assert_eq!(rec.actions.turn.actions.len(), 1);
        assert_eq!(rec.actions.flop.board.len(), 3);
    }

    #[test]
    fn repeated_turn_marker_keeps_one_card() {
        let o = opts();
        let rec = build_hand(
            &["Flop: [2h, 7h, 9c]", "Turn: [2h, 7h, 9c, Qs]", "Turn: [2h, 7h, 9c, Qs]"],
            &o,
        );
        assert_eq!(rec.actions.turn.board, vec!["Qs"]);
    }

    #[test]
    fn bare_marker_keeps_recorded_board() {
        let o = opts();
        let rec = build_hand(&["Flop: [2h, 7h, 9c]", "Flop: (redeal)"], &o);
        assert_eq!(rec.actions.flop.board, vec!["2h", "7h", "9c"]);

        let rec = build_hand(&["Turn: (no card list)", r#""Villain" checks"#], &o);
        assert!(rec.actions.turn.board.is_empty());
        assert_eq!(rec.actions.turn.actions.len(), 1);
    }

    #[test]
    fn positions_follow_listed_order_per_stacks_line() {
        let o = opts();
        let rec = build_hand(
            &[
                r#"Player stacks: #1 "A" (1000) | #2 "B" (99999999999999999999999) | #3 "Hero" (500)"#,
                r#"Player stacks: #1 "C" (700) | #2 "D" (800)"#,
            ],
            &o,
        );
        let seats: Vec<_> = rec
            .table
            .players
            .iter()
            .map(|p| (p.name.as_str(), p.position.to_string()))
            .collect();
        assert_eq!(
            seats,
            vec![
                ("A", "SB".to_string()),
                ("Hero", "UTG+1".to_string()),
                ("C", "SB".to_string()),
                ("D", "BB".to_string()),
            ]
        );
        assert_eq!(rec.hero.position, Some(Position::Utg(1)));
    }

    #[test]
    fn set_once_fields_keep_first_value() {
        let o = opts();
        let rec = build_hand(
            &[
                "-- starting hand #1 (id: first) (dealer: \"A\") -- 2025-01-01T00:00:00.000Z",
                "-- starting hand #2 (id: second) (dealer: \"B\") -- 2025-01-02T00:00:00.000Z",
            ],
            &o,
        );
        assert_eq!(rec.hand_id.as_deref(), Some("first"));
        assert_eq!(rec.timestamp.as_deref(), Some("2025-01-01T00:00:00.000Z"));
        assert_eq!(rec.table.dealer.as_deref(), Some("A"));
    }

    #[test]
    fn stacks_use_posted_big_blind() {
        let o = opts();
        let rec = build_hand(
            &[
                r#"Player stacks: #1 "Villain" (1000) | #2 "Hero @ x" (2050)"#,
                r#""Villain" posts a small blind of 50"#,
                r#""Hero @ x" posts a big blind of 100"#,
            ],
            &o,
        );
        assert_eq!(rec.stacks_bb["Villain"], 10.0);
        assert_eq!(rec.stacks_bb["Hero"], 20.5);
        assert_eq!(rec.hero.position, Some(Position::BigBlind));
        assert_eq!(rec.hero.stack_bb, Some(20.5));
    }

    #[test]
    fn stacks_fall_back_to_default_big_blind() {
        let o = opts();
        let rec = build_hand(&[r#"Player stacks: #1 "Villain" (1000)"#], &o);
        assert_eq!(rec.stacks_bb["Villain"], 25.0);
        assert_eq!(rec.hero.position, None);
        assert_eq!(rec.hero.stack_bb, None);
    }

    #[test]
    fn empty_hero_never_matches() {
        let o = ParseOptions::new("");
        let rec = build_hand(&[r#"Player stacks: #1 "Villain" (1000)"#], &o);
        assert_eq!(rec.hero.position, None);
    }
}
