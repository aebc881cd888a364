use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonkeyError {
    #[error("Malformed input: {0}")]
    Parse(String),

    #[error("No monkey named {0:?}")]
    UnknownMonkey(String),

    #[error("Monkey {monkey} throws to monkey {target}, but the troop only has {count}")]
    TargetOutOfRange {
        monkey: usize,
        target: usize,
        count: usize,
    },

    #[error("Worry level {0} exceeds the representable range")]
    WorryOverflow(u128),

    #[error("Division by zero while resolving {0:?}")]
    DivisionByZero(String),

    #[error("Inexact division: {lhs} / {rhs} leaves a remainder")]
    Remainder { lhs: i64, rhs: i64 },

    #[error("Cyclic dependency through {0:?}")]
    Cycle(String),

    #[error("Constraint is not linear in the free variable: {0}")]
    NonLinear(String),

    #[error("Constraint is unsatisfiable: {0}")]
    Unsatisfiable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MonkeyError>;
