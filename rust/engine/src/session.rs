use crate::builder::build_hand;
use crate::names::normalize_name;
use crate::record::HandRecord;
use crate::segmenter::segment_hands;

/// Big blind assumed when a hand never shows a big blind post.
pub const DEFAULT_BIG_BLIND: u64 = 40;

/// Per-run parser settings. The hero identity is passed in explicitly; the
/// parser holds no global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    hero: String,
    default_big_blind: u64,
}

impl ParseOptions {
    /// Options for `hero`, normalized with the same rule as player names.
    pub fn new(hero: &str) -> Self {
        Self {
            hero: normalize_name(hero),
            default_big_blind: DEFAULT_BIG_BLIND,
        }
    }

    /// Overrides the fallback big blind. Zero is ignored.
    pub fn with_default_big_blind(mut self, bb: u64) -> Self {
        if bb > 0 {
            self.default_big_blind = bb;
        }
        self
    }

    pub fn hero(&self) -> &str {
        &self.hero
    }

    pub fn default_big_blind(&self) -> u64 {
        self.default_big_blind
    }
}

/// Parses a whole session log given in storage order.
///
/// Records come back in the order their chunks were found.
///
/// ```rust
/// use handlog_engine::session::{parse_session, ParseOptions};
///
/// let lines = [
///     r#""Hero" folds"#,
///     r#""Hero" posts a big blind of 40"#,
///     "-- starting hand #1 (id: abc123) --",
/// ];
/// let hands = parse_session(&lines, &ParseOptions::new("Hero"));
/// assert_eq!(hands.len(), 1);
/// assert_eq!(hands[0].hand_id.as_deref(), Some("abc123"));
/// assert_eq!(hands[0].actions.preflop.len(), 2);
/// ```
pub fn parse_session<S: AsRef<str>>(lines: &[S], options: &ParseOptions) -> Vec<HandRecord> {
    let hands: Vec<HandRecord> = segment_hands(lines)
        .iter()
        .map(|chunk| build_hand(chunk.as_slice(), options))
        .collect();
    tracing::info!(
        lines = lines.len(),
        hands = hands.len(),
        hero = options.hero(),
        "session parsed"
    );
    hands
}
