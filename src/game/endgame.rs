//! Endgame detection

use serde::{Deserialize, Serialize};

/// Result of an endgame check after a player move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The round goes on
    Continue,
    /// The latest result hit the goal
    Win,
    /// One value left and it is not the goal
    Lose,
}

/// Check whether the round is over.
///
/// Win beats Lose: the latest result is compared to the goal before the
/// remaining slots are counted, so a board reduced to a single matching
/// value is a Win, never a Lose.
pub fn check_endgame(latest: Option<i64>, remaining: &[Option<i64>], goal: i64) -> Outcome {
    if latest == Some(goal) {
        return Outcome::Win;
    }

    let mut filled = remaining.iter().flatten();
    if let (Some(&value), None) = (filled.next(), filled.next()) {
        if value != goal {
            return Outcome::Lose;
        }
    }

    Outcome::Continue
}
