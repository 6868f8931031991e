//! Turn rules.
//!
//! `TurnMachine` is the only code that mutates `GameState`:
//! - Which taps are accepted
//! - How a two-card turn resolves
//! - When delayed transitions are scheduled and cancelled
//!
//! Rejected taps are reported as `TapOutcome::Ignored`, never as errors.

pub mod turn;

pub use turn::{IgnoreReason, TapOutcome, TimerOutcome, TurnMachine, TurnPhase};
