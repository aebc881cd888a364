//! Keep-away: a troop of monkeys passes worry-valued items around
//!
//! Each round, every monkey inspects the items it holds, applies its
//! operation and the variant's worry-relief function, and throws each item
//! to one of two fixed targets depending on a divisibility test. The answer
//! is the product of the two highest inspection counts after the final
//! round.

pub mod monkey;
pub mod parser;
pub mod sim;

pub use monkey::{Monkey, Op, Relief};
pub use parser::parse_troop;
pub use sim::{part_one, part_two, Troop};
