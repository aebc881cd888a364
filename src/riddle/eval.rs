//! Dependency-order evaluation of the riddle graph
//!
//! An explicit post-order walk resolves each name exactly once into an
//! append-only resolution map; a node is computed only after both of its
//! operands are present in the map.

use crate::core::error::{MonkeyError, Result};
use crate::riddle::job::{Job, JobTable};
use ahash::{AHashMap, AHashSet};

enum Frame<'a> {
    Enter(&'a str),
    Exit(&'a str),
}

/// Resolve `target` and return its value
pub fn resolve(jobs: &JobTable, target: &str) -> Result<i64> {
    let resolved = resolution_map(jobs, target)?;
    // resolution_map only returns once the target is present
    Ok(resolved[target])
}

/// Resolve `target` and every name it depends on
///
/// The returned map contains exactly the names reachable from `target`,
/// each computed once.
pub fn resolution_map<'a>(jobs: &'a JobTable, target: &'a str) -> Result<AHashMap<String, i64>> {
    let mut resolved: AHashMap<String, i64> = AHashMap::new();
    // Names on the current walk path; re-entering one means a cycle
    let mut on_path: AHashSet<&'a str> = AHashSet::new();
    let mut stack: Vec<Frame<'a>> = vec![Frame::Enter(target)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(name) => {
                if resolved.contains_key(name) {
                    continue;
                }
                if !on_path.insert(name) {
                    return Err(MonkeyError::Cycle(name.to_string()));
                }
                let job = jobs
                    .get(name)
                    .ok_or_else(|| MonkeyError::UnknownMonkey(name.to_string()))?;
                match job {
                    Job::Literal(value) => {
                        resolved.insert(name.to_string(), *value);
                        on_path.remove(name);
                    }
                    Job::Binary { lhs, rhs, .. } => {
                        stack.push(Frame::Exit(name));
                        stack.push(Frame::Enter(lhs.as_str()));
                        stack.push(Frame::Enter(rhs.as_str()));
                    }
                }
            }
            Frame::Exit(name) => {
                let Some(Job::Binary { lhs, op, rhs }) = jobs.get(name) else {
                    unreachable!("exit frames are only pushed for binary jobs");
                };
                // Both operands resolved by the frames pushed above
                let value = op.apply(resolved[lhs.as_str()], resolved[rhs.as_str()], name)?;
                resolved.insert(name.to_string(), value);
                on_path.remove(name);
            }
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riddle::parser::parse_jobs;

    #[test]
    fn test_resolves_literal_leaves_and_one_combination() {
        let jobs = parse_jobs("root: a * b\na: 6\nb: 7").unwrap();
        assert_eq!(resolve(&jobs, "root").unwrap(), 42);
    }

    #[test]
    fn test_each_name_resolved_exactly_once() {
        // `a` feeds both sides of root; the map still holds one entry per name
        let jobs = parse_jobs("root: x + y\nx: a + a\ny: a + b\na: 2\nb: 3").unwrap();
        let map = resolution_map(&jobs, "root").unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map["root"], 9);
    }

    #[test]
    fn test_sibling_dependency_is_not_a_cycle() {
        let jobs = parse_jobs("root: x + y\ny: x + c\nx: 1\nc: 2").unwrap();
        assert_eq!(resolve(&jobs, "root").unwrap(), 4);
    }

    #[test]
    fn test_only_reachable_names_are_resolved() {
        let jobs = parse_jobs("root: a + b\na: 1\nb: 2\nstray: 99").unwrap();
        let map = resolution_map(&jobs, "root").unwrap();
        assert_eq!(map.len(), 3);
        assert!(!map.contains_key("stray"));
    }

    #[test]
    fn test_unknown_operand_is_an_error() {
        let jobs = parse_jobs("root: a + ghost\na: 1").unwrap();
        let err = resolve(&jobs, "root").unwrap_err();
        assert!(matches!(err, MonkeyError::UnknownMonkey(name) if name == "ghost"));
    }

    #[test]
    fn test_cycle_is_detected() {
        let jobs = parse_jobs("root: a + b\na: b + 1\nb: a + 1\n1: 1").unwrap();
        let err = resolve(&jobs, "root").unwrap_err();
        assert!(matches!(err, MonkeyError::Cycle(_)));
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let jobs = parse_jobs("root: root + root").unwrap();
        let err = resolve(&jobs, "root").unwrap_err();
        assert!(matches!(err, MonkeyError::Cycle(name) if name == "root"));
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        // A linear chain long enough to overflow the call stack if the
        // walk were recursive
        let mut input = String::from("n0: 1\n");
        for i in 1..100_000 {
            input.push_str(&format!("n{}: n{} + n0\n", i, i - 1));
        }
        let jobs = parse_jobs(&input).unwrap();
        assert_eq!(resolve(&jobs, "n99999").unwrap(), 100_000);
    }
}
