//! Deterministic puzzle core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Every operation runs to completion in one call

pub mod endgame;
pub mod goal;
pub mod op;
pub mod operands;
pub mod session;

pub use endgame::{Outcome, check_endgame};
pub use goal::{DifficultyTier, FoldStep, fold_goal, synthesize_goal};
pub use op::Op;
pub use operands::generate_operands;
pub use session::{GameSession, MoveError};
