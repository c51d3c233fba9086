//! Session win/loss tally
//!
//! Session-scoped only; resets when the program exits.

use serde::{Deserialize, Serialize};

/// Win/loss counters for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    /// Total finished rounds
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts() {
        let mut tally = Tally::new();
        assert_eq!(tally.games(), 0);

        tally.record_win();
        tally.record_win();
        tally.record_loss();
        assert_eq!(tally.wins, 2);
        assert_eq!(tally.losses, 1);
        assert_eq!(tally.games(), 3);
    }
}
