//! Parses the keep-away puzzle input into a troop of monkeys
//!
//! Input is a sequence of blank-line-separated blocks:
//!
//! ```text
//! Monkey 0:
//!   Starting items: 79, 98
//!   Operation: new = old * 19
//!   Test: divisible by 23
//!     If true: throw to monkey 2
//!     If false: throw to monkey 1
//! ```

use crate::core::error::{MonkeyError, Result};
use crate::core::types::{MonkeyId, Worry};
use crate::keepaway::monkey::{Monkey, Op};
use crate::keepaway::sim::Troop;

/// Parse the full puzzle text into a troop
///
/// Throw targets are validated against the troop size up front, so the
/// simulation itself never has to handle an out-of-range delivery.
pub fn parse_troop(input: &str) -> Result<Troop> {
    let mut monkeys = Vec::new();
    for block in input.split("\n\n") {
        if block.trim().is_empty() {
            continue;
        }
        monkeys.push(parse_block(block)?);
    }
    if monkeys.is_empty() {
        return Err(MonkeyError::Parse("no monkey blocks found".to_string()));
    }

    let count = monkeys.len();
    for (idx, monkey) in monkeys.iter().enumerate() {
        for target in [monkey.on_true, monkey.on_false] {
            if target.0 >= count {
                return Err(MonkeyError::TargetOutOfRange {
                    monkey: idx,
                    target: target.0,
                    count,
                });
            }
        }
    }

    Ok(Troop::new(monkeys))
}

fn parse_block(block: &str) -> Result<Monkey> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() != 6 {
        return Err(MonkeyError::Parse(format!(
            "expected 6 lines in a monkey block, got {}",
            lines.len()
        )));
    }

    let items = parse_items(strip(lines[1], "Starting items:")?)?;
    let op = parse_op(lines[2])?;
    let divisor: Worry = parse_number(strip(lines[3], "Test: divisible by")?, lines[3])?;
    let on_true = MonkeyId(parse_number(strip(lines[4], "If true: throw to monkey")?, lines[4])?);
    let on_false = MonkeyId(parse_number(strip(lines[5], "If false: throw to monkey")?, lines[5])?);

    if divisor == 0 {
        return Err(MonkeyError::Parse(format!("zero test divisor: {:?}", lines[3])));
    }

    Ok(Monkey::new(items, op, divisor, on_true, on_false))
}

fn strip<'a>(line: &'a str, prefix: &str) -> Result<&'a str> {
    line.strip_prefix(prefix)
        .map(str::trim)
        .ok_or_else(|| MonkeyError::Parse(format!("expected {:?} line, got {:?}", prefix, line)))
}

fn parse_number<T: std::str::FromStr>(text: &str, line: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| MonkeyError::Parse(format!("bad number in {:?}", line)))
}

fn parse_items(text: &str) -> Result<Vec<Worry>> {
    text.split(',')
        .map(|item| parse_number(item, text))
        .collect()
}

/// The operation line admits exactly three forms: `old * old`, `old * N`,
/// and `old + N`
fn parse_op(line: &str) -> Result<Op> {
    let expr = strip(line, "Operation: new = old")?;
    let (symbol, operand) = expr
        .split_once(' ')
        .ok_or_else(|| MonkeyError::Parse(format!("bad operation: {:?}", line)))?;
    match (symbol, operand.trim()) {
        ("*", "old") => Ok(Op::Square),
        ("*", n) => Ok(Op::Mul(parse_number(n, line)?)),
        ("+", n) => Ok(Op::Add(parse_number(n, line)?)),
        _ => Err(MonkeyError::Parse(format!("bad operation: {:?}", line))),
    }
}
