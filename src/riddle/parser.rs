//! Parses the riddle input, one monkey per line
//!
//! ```text
//! root: pppw + sjmn
//! dbpl: 5
//! ```

use crate::core::error::{MonkeyError, Result};
use crate::riddle::job::{Job, JobTable, MathOp};

pub fn parse_jobs(input: &str) -> Result<JobTable> {
    let mut jobs = JobTable::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (name, job) = parse_line(line)?;
        if jobs.insert(name.clone(), job).is_some() {
            return Err(MonkeyError::Parse(format!("duplicate monkey {:?}", name)));
        }
    }
    if jobs.is_empty() {
        return Err(MonkeyError::Parse("no job lines found".to_string()));
    }
    Ok(jobs)
}

fn parse_line(line: &str) -> Result<(String, Job)> {
    let (name, rest) = line
        .split_once(": ")
        .ok_or_else(|| MonkeyError::Parse(format!("expected \"name: job\", got {:?}", line)))?;

    let job = match rest.trim().parse::<i64>() {
        Ok(value) => Job::Literal(value),
        Err(_) => parse_binary(rest, line)?,
    };
    Ok((name.to_string(), job))
}

fn parse_binary(rest: &str, line: &str) -> Result<Job> {
    let mut parts = rest.split_whitespace();
    let (lhs, symbol, rhs) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(lhs), Some(symbol), Some(rhs), None) => (lhs, symbol, rhs),
        _ => {
            return Err(MonkeyError::Parse(format!(
                "expected \"a <op> b\", got {:?}",
                line
            )))
        }
    };
    let op = MathOp::from_symbol(symbol)
        .ok_or_else(|| MonkeyError::Parse(format!("unknown operator in {:?}", line)))?;
    Ok(Job::Binary {
        lhs: lhs.to_string(),
        op,
        rhs: rhs.to_string(),
    })
}
