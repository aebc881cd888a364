//! Monkey records for the keep-away game

use crate::core::error::{MonkeyError, Result};
use crate::core::types::{MonkeyId, Worry};

/// Inspection operation a monkey applies to an item's worry level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add(Worry),
    Mul(Worry),
    /// `new = old * old`
    Square,
}

impl Op {
    /// Apply the operation, widened so that squaring cannot wrap
    pub fn apply(&self, worry: Worry) -> u128 {
        let w = worry as u128;
        match self {
            Self::Add(n) => w + *n as u128,
            Self::Mul(n) => w * *n as u128,
            Self::Square => w * w,
        }
    }
}

/// Worry-relief function applied after each inspection
///
/// The two game variants differ only in this function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relief {
    /// Floor division by a constant; bounds worry levels but loses precision
    Divide(Worry),
    /// Remainder by the product of every monkey's test divisor; keeps every
    /// divisibility test exact without unbounded growth
    Modulo(Worry),
}

impl Relief {
    pub fn apply(&self, worry: u128) -> u128 {
        match self {
            Self::Divide(d) => worry / *d as u128,
            Self::Modulo(m) => worry % *m as u128,
        }
    }
}

/// One monkey: the items it holds, its inspection rule, and where it throws
#[derive(Debug, Clone)]
pub struct Monkey {
    /// Items held, in the order they will be inspected
    pub items: Vec<Worry>,
    pub op: Op,
    /// Divisibility test applied to the relieved worry level
    pub divisor: Worry,
    /// Throw target when the test passes
    pub on_true: MonkeyId,
    /// Throw target when the test fails
    pub on_false: MonkeyId,
    /// Count of items this monkey has ever inspected
    pub inspections: u64,
}

impl Monkey {
    pub fn new(items: Vec<Worry>, op: Op, divisor: Worry, on_true: MonkeyId, on_false: MonkeyId) -> Self {
        Self {
            items,
            op,
            divisor,
            on_true,
            on_false,
            inspections: 0,
        }
    }

    /// Inspect and throw every held item, draining the item list
    ///
    /// Returns the throws as (target, worry) pairs; the caller owns the
    /// arena and performs the actual deliveries.
    pub fn take_turn(&mut self, relief: Relief) -> Result<Vec<(MonkeyId, Worry)>> {
        let mut throws = Vec::with_capacity(self.items.len());
        for &item in &self.items {
            self.inspections += 1;
            let raised = relief.apply(self.op.apply(item));
            let worry = Worry::try_from(raised).map_err(|_| MonkeyError::WorryOverflow(raised))?;
            let target = if worry % self.divisor == 0 {
                self.on_true
            } else {
                self.on_false
            };
            throws.push((target, worry));
        }
        self.items.clear();
        Ok(throws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_apply() {
        assert_eq!(Op::Add(6).apply(54), 60);
        assert_eq!(Op::Mul(19).apply(79), 1501);
        assert_eq!(Op::Square.apply(5), 25);
    }

    #[test]
    fn test_square_widens_before_multiplying() {
        let big = u64::MAX;
        assert_eq!(Op::Square.apply(big), (big as u128) * (big as u128));
    }

    #[test]
    fn test_relief_variants() {
        assert_eq!(Relief::Divide(3).apply(1501), 500);
        assert_eq!(Relief::Modulo(96577).apply(1501), 1501);
        assert_eq!(Relief::Modulo(100).apply(1501), 1);
    }

    #[test]
    fn test_take_turn_routes_by_divisibility() {
        let mut monkey = Monkey::new(
            vec![79, 98],
            Op::Mul(19),
            23,
            MonkeyId(2),
            MonkeyId(3),
        );
        let throws = monkey.take_turn(Relief::Divide(3)).unwrap();
        // 79*19/3 = 500 (not divisible by 23), 98*19/3 = 620 (not divisible)
        assert_eq!(throws, vec![(MonkeyId(3), 500), (MonkeyId(3), 620)]);
        assert!(monkey.items.is_empty());
        assert_eq!(monkey.inspections, 2);
    }

    #[test]
    fn test_take_turn_overflow_is_reported() {
        let mut monkey = Monkey::new(
            vec![u64::MAX],
            Op::Square,
            7,
            MonkeyId(0),
            MonkeyId(0),
        );
        let err = monkey.take_turn(Relief::Divide(3)).unwrap_err();
        assert!(matches!(err, MonkeyError::WorryOverflow(_)));
    }
}
