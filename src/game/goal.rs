//! Goal synthesis by reverse construction
//!
//! The goal is "reverse engineered" from the operands: pick a difficulty
//! tier, then fold the operand set down by repeatedly combining two randomly
//! chosen values with a random operator. The final value becomes the goal,
//! which guarantees at least one solution path exists - the one taken here.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::op::Op;

/// Difficulty tier: how many fold rounds build the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyTier {
    One,
    Two,
    Three,
}

impl DifficultyTier {
    /// Number of fold rounds for this tier
    pub fn rounds(self) -> usize {
        match self {
            DifficultyTier::One => 1,
            DifficultyTier::Two => 2,
            DifficultyTier::Three => 3,
        }
    }

    /// Map a chance draw in [1, 100] to a tier. The bands give 10% / 30% /
    /// 60%; the boundary value 10 belongs to tier One.
    pub fn from_chance(chance: u8) -> Self {
        debug_assert!((1..=100).contains(&chance));
        match chance {
            1..=10 => DifficultyTier::One,
            11..=40 => DifficultyTier::Two,
            _ => DifficultyTier::Three,
        }
    }

    /// Weighted random tier selection
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        Self::from_chance(rng.random_range(1..=100))
    }
}

/// One synthesis-time combination of two values into one
///
/// Recorded only when tracing is enabled; the trace doubles as the cheat
/// trail shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldStep {
    pub lhs: i64,
    pub op: Op,
    pub rhs: i64,
    pub result: i64,
}

impl fmt::Display for FoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.op, self.rhs, self.result)
    }
}

/// Synthesize a goal from `operands`: draw a tier, then fold.
///
/// Returns the goal and the trace of fold steps taken (empty unless
/// `trace_enabled`). The caller's operand set is never mutated.
pub fn synthesize_goal<R: Rng>(
    operands: &[i64],
    trace_enabled: bool,
    rng: &mut R,
) -> (i64, Vec<FoldStep>) {
    let tier = DifficultyTier::draw(rng);
    fold_goal(operands, tier, trace_enabled, rng)
}

/// Fold `operands` down for the tier's number of rounds.
///
/// Each round combines two distinct randomly chosen values with a random
/// operator, overwrites the second with the result, and removes the first.
/// Folding stops early if only one value remains. The last result is the
/// goal; it may be zero or negative.
pub fn fold_goal<R: Rng>(
    operands: &[i64],
    tier: DifficultyTier,
    trace_enabled: bool,
    rng: &mut R,
) -> (i64, Vec<FoldStep>) {
    assert!(
        operands.len() >= 2,
        "goal synthesis requires at least 2 operands"
    );

    // Private working copy; the caller keeps its operand set untouched.
    let mut nums = operands.to_vec();
    let mut trace = Vec::new();
    let mut result = 0;

    for _ in 0..tier.rounds() {
        if nums.len() < 2 {
            break;
        }

        let i1 = rng.random_range(0..nums.len());
        // Rejection-sample the second index until it differs from the first.
        let mut i2 = rng.random_range(0..nums.len());
        while i2 == i1 {
            i2 = rng.random_range(0..nums.len());
        }

        let op = Op::ALL[rng.random_range(0..Op::ALL.len())];
        result = op.apply(nums[i1], nums[i2]);

        if trace_enabled {
            trace.push(FoldStep {
                lhs: nums[i1],
                op,
                rhs: nums[i2],
                result,
            });
        }

        nums[i2] = result;
        nums.remove(i1);
    }

    (result, trace)
}
