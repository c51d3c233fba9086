//! Four Fold - an arithmetic puzzle with reverse-constructed goals
//!
//! Core modules:
//! - `game`: Deterministic puzzle core (operands, goal synthesis, endgame)
//! - `stats`: Session win/loss tally
//! - `settings`: Player preferences
//!
//! The core performs no I/O. The binary is the presentation layer: it renders
//! the board, reads moves, and maps outcomes to status messages.

pub mod game;
pub mod settings;
pub mod stats;

pub use settings::Settings;
pub use stats::Tally;

/// Game configuration constants
pub mod consts {
    /// Number of operand slots on the board
    pub const OPERAND_COUNT: usize = 4;

    /// Inclusive operand range
    pub const OPERAND_MIN: i64 = 1;
    pub const OPERAND_MAX: i64 = 10;
}
