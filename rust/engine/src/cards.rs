//! Card token helpers.
//!
//! Cards stay in the textual form the dealer application renders them in
//! (`"Ah"`, `"10♥"`, `"K♠"`). The rank is everything before the last
//! character and the suit is the last character, whatever glyph is used.

/// Returns the suit character of a card token.
///
/// Tokens shorter than two characters carry no suit.
///
/// # Examples
///
/// ```rust
/// use handlog_engine::cards::suit_of;
///
/// assert_eq!(suit_of("Ah"), Some('h'));
/// assert_eq!(suit_of("10♥"), Some('♥'));
/// assert_eq!(suit_of("A"), None);
/// ```
pub fn suit_of(token: &str) -> Option<char> {
    let mut chars = token.chars();
    let suit = chars.next_back()?;
    chars.next()?;
    Some(suit)
}

/// True when both tokens have a suit and the suits are equal.
pub fn is_suited(a: &str, b: &str) -> bool {
    match (suit_of(a), suit_of(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Splits a comma separated card list such as `"2h, 7h, 9c"`.
///
/// Tokens are trimmed and empty pieces dropped, so `"Ah,Kh"` and
/// `"Ah, Kh"` split the same way.
pub fn split_card_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
