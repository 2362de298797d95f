//! Splits a session log into per-hand chunks.
//!
//! The dealer application stores each hand newest line first, so the hand
//! start marker is the last line of its hand in storage order. Lines are
//! buffered until a marker is seen, then the buffer is reversed and flushed
//! as one chronologically ordered chunk.

/// Substring that marks the first chronological line of a hand.
pub const HAND_BOUNDARY: &str = "-- starting hand";

pub fn is_hand_boundary(line: &str) -> bool {
    line.contains(HAND_BOUNDARY)
}

/// Segments `lines` (storage order) into chunks in chronological order.
///
/// Lines left over after the last marker still form a final chunk.
///
/// ```rust
/// use handlog_engine::segmenter::segment_hands;
///
/// let lines = ["b2", "b1", "-- starting hand #2 --", "a1", "-- starting hand #1 --"];
/// let chunks = segment_hands(&lines);
/// assert_eq!(chunks[0], vec!["-- starting hand #2 --", "b1", "b2"]);
/// assert_eq!(chunks[1], vec!["-- starting hand #1 --", "a1"]);
/// ```
pub fn segment_hands<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<&str>> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in lines {
        let line = line.as_ref();
        current.push(line);
        if is_hand_boundary(line) {
            current.reverse();
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tracing::debug!(
            lines = current.len(),
            "trailing lines without a hand start marker"
        );
        current.reverse();
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_chunks() {
        let lines: [&str; 0] = [];
        assert!(segment_hands(&lines).is_empty());
    }

    #[test]
    fn trailing_lines_form_a_reversed_chunk() {
        let lines = ["x2", "-- starting hand #9 --", "y2", "y1"];
        let chunks = segment_hands(&lines);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1], vec!["y1", "y2"]);
    }

    #[test]
    fn chunk_count_matches_markers() {
        let lines = [
            "-- starting hand #3 --",
            "-- starting hand #2 --",
            "-- starting hand #1 --",
        ];
        assert_eq!(segment_hands(&lines).len(), 3);
    }

    #[test]
    fn works_with_owned_lines() {
        let lines: Vec<String> = vec!["a".into(), "-- starting hand #1 --".into()];
        let chunks = segment_hands(&lines);
        assert_eq!(chunks, vec![vec!["-- starting hand #1 --", "a"]]);
    }
}
