//! Hero statistics over parsed hand records.
//!
//! Both reducers select hands by hero identity (normalized on both sides),
//! return percentages rounded to two decimals, and return `0.0` instead of
//! dividing by zero.

use serde::{Deserialize, Serialize};

use crate::cards::{is_suited, suit_of};
use crate::names::normalize_name;
use crate::record::{round2, HandRecord};

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

fn is_hero_hand(hero: &str, record: &HandRecord) -> bool {
    normalize_name(&record.hero.name) == hero
}

/// True when the hero called or raised preflop at least once.
fn voluntarily_entered(hero: &str, record: &HandRecord) -> bool {
    record
        .actions
        .preflop
        .iter()
        .any(|a| a.action.is_voluntary() && normalize_name(&a.player) == hero)
}

/// Outcome of a hand for the flush-draw reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlushDraw {
    /// Hole cards missing or offsuit
    NotSuited,
    Suited { draw: bool },
}

fn flush_draw(record: &HandRecord) -> FlushDraw {
    let Some([a, b]) = record.hero.hole_cards.as_deref() else {
        return FlushDraw::NotSuited;
    };
    if !is_suited(a, b) {
        return FlushDraw::NotSuited;
    }
    let suit = suit_of(a);
    let matching = record
        .actions
        .flop
        .board
        .iter()
        .filter(|card| suit_of(card) == suit)
        .count();
    FlushDraw::Suited {
        draw: matching >= 2,
    }
}

/// VPIP percentage of `hero` across `records`.
///
/// ```rust
/// use handlog_engine::record::HandRecord;
/// use handlog_engine::stats::vpip;
///
/// assert_eq!(vpip("Hero", &[HandRecord::for_hero("Hero")]), 0.0);
/// assert_eq!(vpip("Hero", &[]), 0.0);
/// ```
pub fn vpip(hero: &str, records: &[HandRecord]) -> f64 {
    HeroReport::compute(hero, records).vpip
}

/// Share of suited hero hands whose flop carries two or more cards of the
/// hero's suit.
pub fn flush_draw_percent(hero: &str, records: &[HandRecord]) -> f64 {
    HeroReport::compute(hero, records).flush_draw
}

/// Counters and percentages for one hero over a record collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroReport {
    pub hero: String,
    /// Hands where the record's hero is this hero
    pub hands: u64,
    pub vpip_hands: u64,
    pub vpip: f64,
    pub suited_hands: u64,
    pub flush_draw_flops: u64,
    pub flush_draw: f64,
}

impl HeroReport {
    pub fn compute(hero: &str, records: &[HandRecord]) -> Self {
        let hero = normalize_name(hero);
        let mut hands = 0;
        let mut vpip_hands = 0;
        let mut suited_hands = 0;
        let mut flush_draw_flops = 0;

        for record in records.iter().filter(|r| is_hero_hand(&hero, r)) {
            hands += 1;
            if voluntarily_entered(&hero, record) {
                vpip_hands += 1;
            }
            if let FlushDraw::Suited { draw } = flush_draw(record) {
                suited_hands += 1;
                if draw {
                    flush_draw_flops += 1;
                }
            }
        }

        tracing::debug!(hero = %hero, hands, vpip_hands, suited_hands, "hero report computed");
        Self {
            hands,
            vpip_hands,
            vpip: percent(vpip_hands, hands),
            suited_hands,
            flush_draw_flops,
            flush_draw: percent(flush_draw_flops, suited_hands),
            hero,
        }
    }
}
