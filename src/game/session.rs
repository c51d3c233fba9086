//! Round lifecycle and player-move validation
//!
//! `GameSession` is the state the front-end owns: board slots, goal, trace,
//! and the win/loss tally. It is rebuilt wholesale on `new_round`, never
//! shared, and deterministic for a given seed.

use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::endgame::{Outcome, check_endgame};
use super::goal::{FoldStep, synthesize_goal};
use super::op::Op;
use super::operands::generate_operands;
use crate::consts::OPERAND_COUNT;
use crate::stats::Tally;

/// Why a player move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The round already ended; start a new one
    RoundOver,
    /// Slot index outside the board
    SlotOutOfRange(usize),
    /// Slot has already been consumed
    SlotEmpty(usize),
    /// Both selections point at the same slot
    SameSlot,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::RoundOver => write!(f, "the round is over; start a new game"),
            MoveError::SlotOutOfRange(idx) => write!(f, "no such slot: {}", idx + 1),
            MoveError::SlotEmpty(idx) => write!(f, "slot {} is empty", idx + 1),
            MoveError::SameSlot => write!(f, "pick two different slots"),
        }
    }
}

impl std::error::Error for MoveError {}

/// One player's game session
#[derive(Debug, Clone)]
pub struct GameSession {
    rng: Pcg32,
    trace_enabled: bool,
    /// Operands as generated, kept for the duration of the round
    operands: [i64; OPERAND_COUNT],
    /// Board slots; emptied as the player folds values together
    board: [Option<i64>; OPERAND_COUNT],
    goal: i64,
    trace: Vec<FoldStep>,
    latest: Option<i64>,
    outcome: Outcome,
    tally: Tally,
}

impl GameSession {
    /// Create a session and deal the first round
    pub fn new(seed: u64, trace_enabled: bool) -> Self {
        let mut session = Self {
            rng: Pcg32::seed_from_u64(seed),
            trace_enabled,
            operands: [0; OPERAND_COUNT],
            board: [None; OPERAND_COUNT],
            goal: 0,
            trace: Vec::new(),
            latest: None,
            outcome: Outcome::Continue,
            tally: Tally::new(),
        };
        session.new_round();
        session
    }

    /// Deal a new round: fresh operands, goal, and trace. The trace flag is
    /// read here, not mid-round.
    pub fn new_round(&mut self) {
        self.operands = generate_operands(&mut self.rng);
        let (goal, trace) = synthesize_goal(&self.operands, self.trace_enabled, &mut self.rng);
        self.goal = goal;
        self.trace = trace;
        self.board = self.operands.map(Some);
        self.latest = None;
        self.outcome = Outcome::Continue;
        log::debug!(
            "new round: operands {:?}, goal {}, trace steps {}",
            self.operands,
            self.goal,
            self.trace.len()
        );
    }

    /// Apply a player move: combine the values in two distinct board slots.
    ///
    /// The result lands in the second slot and the first is emptied, then the
    /// endgame is re-checked and the tally updated on a terminal outcome.
    pub fn apply_operation(
        &mut self,
        first: usize,
        op: Op,
        second: usize,
    ) -> Result<i64, MoveError> {
        if self.outcome != Outcome::Continue {
            return Err(MoveError::RoundOver);
        }
        if first >= OPERAND_COUNT {
            return Err(MoveError::SlotOutOfRange(first));
        }
        if second >= OPERAND_COUNT {
            return Err(MoveError::SlotOutOfRange(second));
        }
        if first == second {
            return Err(MoveError::SameSlot);
        }

        let a = self.board[first].ok_or(MoveError::SlotEmpty(first))?;
        let b = self.board[second].ok_or(MoveError::SlotEmpty(second))?;

        let result = op.apply(a, b);
        self.board[second] = Some(result);
        self.board[first] = None;
        self.latest = Some(result);

        self.outcome = check_endgame(self.latest, &self.board, self.goal);
        match self.outcome {
            Outcome::Win => {
                self.tally.record_win();
                log::info!("round won: reached {} (tally {:?})", self.goal, self.tally);
            }
            Outcome::Lose => {
                self.tally.record_loss();
                log::info!("round lost: goal was {} (tally {:?})", self.goal, self.tally);
            }
            Outcome::Continue => {}
        }

        Ok(result)
    }

    /// Toggle trace (cheat) mode; takes effect on the next round
    pub fn set_trace_enabled(&mut self, enabled: bool) {
        self.trace_enabled = enabled;
    }

    pub fn trace_enabled(&self) -> bool {
        self.trace_enabled
    }

    /// The operands as originally dealt this round
    pub fn operands(&self) -> [i64; OPERAND_COUNT] {
        self.operands
    }

    /// Current board slots (None = consumed)
    pub fn board(&self) -> &[Option<i64>; OPERAND_COUNT] {
        &self.board
    }

    pub fn goal(&self) -> i64 {
        self.goal
    }

    /// Synthesis trace for this round (empty unless tracing was on at deal)
    pub fn trace(&self) -> &[FoldStep] {
        &self.trace
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }
}
