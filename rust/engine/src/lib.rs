//! # handlog-engine: Session Log Parser Core
//!
//! Turns the line-oriented session log exported by an online poker table
//! (one line per dealt card, blind, bet or table event, newest first within
//! each hand) into structured hand records, and computes hero statistics
//! over them.
//!
//! ## Core Modules
//!
//! - [`segmenter`] - Splits the log into per-hand chunks in chronological order
//! - [`classifier`] - Recognizes the event encoded by one log line
//! - [`builder`] - Street-aware state machine assembling one [`record::HandRecord`]
//! - [`session`] - Whole-log driver and [`session::ParseOptions`]
//! - [`record`] - Hand record data model and JSON shape
//! - [`stats`] - VPIP and flush-draw reducers
//! - [`store`] - Reading and writing record collections as JSON
//! - [`cards`] - Card token helpers
//! - [`names`] - Player name normalization
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use handlog_engine::session::{parse_session, ParseOptions};
//! use handlog_engine::stats::HeroReport;
//!
//! // Storage order: newest line first.
//! let log = [
//!     r#""Villain" folds"#,
//!     r#""Hero" raises to 120"#,
//!     r#""Your hand is Ah, Kh""#,
//!     r#""Hero" posts a big blind of 40"#,
//!     r#""Villain" posts a small blind of 20"#,
//!     r#"Player stacks: #1 "Villain" (2000) | #2 "Hero" (4000)"#,
//!     "-- starting hand #1 (id: h1) --",
//! ];
//!
//! let hands = parse_session(&log, &ParseOptions::new("Hero"));
//! let report = HeroReport::compute("Hero", &hands);
//! assert_eq!(report.hands, 1);
//! assert_eq!(report.vpip, 100.0);
//! assert_eq!(hands[0].hero.stack_bb, Some(100.0));
//! ```

pub mod builder;
pub mod cards;
pub mod classifier;
pub mod errors;
pub mod names;
pub mod record;
pub mod segmenter;
pub mod session;
pub mod stats;
pub mod store;
