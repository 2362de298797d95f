//! Text formatters for hero statistics.
//!
//! ## Example
//!
//! ```rust
//! use handlog_cli::formatters::{format_flush_draw, format_vpip};
//!
//! assert_eq!(format_vpip(23.5), "Hero VPIP: 23.50%");
//! assert_eq!(
//!     format_flush_draw(0.0),
//!     "Flush Draw on Flop (Suited Hands Only): 0.00%"
//! );
//! ```

use handlog_engine::stats::HeroReport;

pub fn format_vpip(vpip: f64) -> String {
    format!("Hero VPIP: {:.2}%", vpip)
}

pub fn format_flush_draw(percent: f64) -> String {
    format!("Flush Draw on Flop (Suited Hands Only): {:.2}%", percent)
}

/// Summary lines printed by `analyze`, counts included.
pub fn format_report(report: &HeroReport) -> Vec<String> {
    vec![
        format!("Hero: {} ({} hand(s))", report.hero, report.hands),
        format_vpip(report.vpip),
        format_flush_draw(report.flush_draw),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use handlog_engine::record::HandRecord;

    #[test]
    fn report_lines() {
        let report = HeroReport::compute("Hero", &[HandRecord::for_hero("Hero")]);
        let lines = format_report(&report);
        assert_eq!(lines[0], "Hero: Hero (1 hand(s))");
        assert_eq!(lines[1], "Hero VPIP: 0.00%");
        assert_eq!(lines[2], "Flush Draw on Flop (Suited Hands Only): 0.00%");
    }
}
