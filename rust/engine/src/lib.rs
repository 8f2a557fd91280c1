//! # potsettle-engine: Six-Max Hand Settlement
//!
//! Settles recorded six-handed no-limit hold'em hands. Given a complete hand
//! record, the engine replays the betting against the rules, ranks the
//! showdown hands, splits the pot and any side pots, and renders the
//! canonical short line. It is pure and synchronous: no I/O, no shared state.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation, parsing and duplicate detection
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`record`] - Hand record types (streets, actions, board, hand)
//! - [`player`] - Seats, roles and action kinds
//! - [`rules`] - Per-action betting validation
//! - [`game`] - Betting replay state machine
//! - [`hand`] - Five-card evaluation and showdown ranking
//! - [`pot`] - Pot tiers, side pots and odd-chip distribution
//! - [`short_line`] - Canonical action/board summary
//! - [`engine`] - The [`settle`] entry point
//! - [`sample`] - Seeded sample hands
//! - [`errors`] - Settlement error types
//!
//! ## Quick Start
//!
//! ```rust
//! use potsettle_engine::cards::parse_cards;
//! use potsettle_engine::hand::{evaluate_hand, Category};
//!
//! let hole = parse_cards("Ah Kh").unwrap();
//! let board = parse_cards("Qh Jh Th 2c 3d").unwrap();
//! let strength = evaluate_hand(
//!     &[hole[0], hole[1]],
//!     &[board[0], board[1], board[2], board[3], board[4]],
//! );
//! assert_eq!(strength.category, Category::StraightFlush);
//! ```
//!
//! ## Settling a Hand
//!
//! ```rust
//! use potsettle_engine::{settle, sample::checked_down_hand};
//!
//! let hand = checked_down_hand(1, 40, 1000);
//! let result = settle(&hand).expect("sample hands are legal");
//! assert_eq!(result.net_total(), 0);
//! assert!(result.short_line.starts_with("Seat"));
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod pot;
pub mod record;
pub mod rules;
pub mod sample;
pub mod short_line;

pub use engine::{settle, SettlementResult};
pub use errors::SettlementError;
pub use record::Hand;
