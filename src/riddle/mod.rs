//! The shouting riddle: named monkeys yell numbers or operations over other
//! monkeys' numbers
//!
//! Variant one evaluates the number the `root` monkey yells. Variant two
//! treats `humn` as an unknown, rewrites `root` as an equality between its
//! two operands, and solves for the value `humn` must yell.

pub mod eval;
pub mod job;
pub mod parser;
pub mod solve;

pub use job::{Job, JobTable, MathOp, HUMN, ROOT};
pub use parser::parse_jobs;

use crate::core::error::Result;

/// First variant: resolve the number `root` yells
pub fn part_one(input: &str) -> Result<i64> {
    let jobs = parse_jobs(input)?;
    eval::resolve(&jobs, ROOT)
}

/// Second variant: solve the rewritten `root` equality for `humn`
pub fn part_two(input: &str) -> Result<i64> {
    let jobs = parse_jobs(input)?;
    solve::solve_for_humn(&jobs)
}
