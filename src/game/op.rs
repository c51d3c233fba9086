//! Operator arithmetic shared by player moves and goal synthesis

use std::fmt;

use serde::{Deserialize, Serialize};

/// A pairwise arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Add,
    Sub,
    Mul,
}

impl Op {
    /// All operators, in synthesis draw order
    pub const ALL: [Op; 3] = [Op::Add, Op::Sub, Op::Mul];

    /// Apply the operator. The first argument is the left operand; order
    /// matters for subtraction.
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Op::Add),
            "-" | "\u{2212}" => Some(Op::Sub),
            "*" | "x" | "\u{d7}" => Some(Op::Mul),
            _ => None,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(Op::Add.apply(7, 3), 10);
        assert_eq!(Op::Sub.apply(7, 3), 4);
        assert_eq!(Op::Sub.apply(3, 7), -4);
        assert_eq!(Op::Mul.apply(4, 5), 20);
    }

    #[test]
    fn test_parse_display_round_trip() {
        for op in Op::ALL {
            assert_eq!(Op::from_str(op.as_str()), Some(op));
        }
        assert_eq!(Op::from_str("x"), Some(Op::Mul));
        assert_eq!(Op::from_str("\u{d7}"), Some(Op::Mul));
        assert_eq!(Op::from_str("/"), None);
        assert_eq!(Op::from_str(""), None);
    }
}
