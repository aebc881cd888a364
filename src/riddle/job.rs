//! Job records for the shouting riddle
//!
//! Every monkey either yells a literal number or the result of a binary
//! operation over two other monkeys' numbers.

use crate::core::error::{MonkeyError, Result};
use ahash::AHashMap;

/// Arithmetic operator, dispatched explicitly rather than through any
/// dynamic expression evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl MathOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// Apply the operator exactly
    ///
    /// Division must be exact: a remainder or zero divisor is an error
    /// rather than a silently truncated result.
    pub fn apply(&self, lhs: i64, rhs: i64, name: &str) -> Result<i64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div => {
                if rhs == 0 {
                    return Err(MonkeyError::DivisionByZero(name.to_string()));
                }
                if lhs % rhs != 0 {
                    return Err(MonkeyError::Remainder { lhs, rhs });
                }
                Ok(lhs / rhs)
            }
        }
    }
}

/// What one monkey yells
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Literal(i64),
    Binary {
        lhs: String,
        op: MathOp,
        rhs: String,
    },
}

/// All jobs keyed by monkey name; immutable once parsed
pub type JobTable = AHashMap<String, Job>;

/// The monkey whose number answers the riddle
pub const ROOT: &str = "root";

/// The free variable of the symbolic variant
pub const HUMN: &str = "humn";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_dispatch() {
        assert_eq!(MathOp::Add.apply(2, 3, "x").unwrap(), 5);
        assert_eq!(MathOp::Sub.apply(2, 3, "x").unwrap(), -1);
        assert_eq!(MathOp::Mul.apply(4, 3, "x").unwrap(), 12);
        assert_eq!(MathOp::Div.apply(12, 3, "x").unwrap(), 4);
    }

    #[test]
    fn test_inexact_division_is_an_error() {
        let err = MathOp::Div.apply(7, 2, "x").unwrap_err();
        assert!(matches!(err, MonkeyError::Remainder { lhs: 7, rhs: 2 }));
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        let err = MathOp::Div.apply(7, 0, "x").unwrap_err();
        assert!(matches!(err, MonkeyError::DivisionByZero(_)));
    }
}
