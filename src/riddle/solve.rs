//! Symbolic variant of the riddle
//!
//! The `humn` monkey's number is treated as a free variable and `root`'s
//! job is rewritten as an equality between its two operands. Every
//! expression the input can build is affine in the free variable (a product
//! or quotient of two variable-bearing sides has no unique solution and is
//! rejected), so each side folds to `slope * humn + intercept` over exact
//! rationals and the equality reduces to a linear solve.

use crate::core::error::{MonkeyError, Result};
use crate::riddle::job::{Job, JobTable, MathOp, HUMN, ROOT};
use ahash::{AHashMap, AHashSet};
use num_rational::Ratio;
use num_traits::{One, Zero};

type Rat = Ratio<i128>;

/// Value of a subexpression as an affine function of the free variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Affine {
    slope: Rat,
    intercept: Rat,
}

impl Affine {
    fn constant(value: i64) -> Self {
        Self {
            slope: Rat::zero(),
            intercept: Rat::from_integer(value as i128),
        }
    }

    fn variable() -> Self {
        Self {
            slope: Rat::one(),
            intercept: Rat::zero(),
        }
    }

    fn is_constant(&self) -> bool {
        self.slope.is_zero()
    }
}

fn combine(op: MathOp, a: Affine, b: Affine, name: &str) -> Result<Affine> {
    match op {
        MathOp::Add => Ok(Affine {
            slope: a.slope + b.slope,
            intercept: a.intercept + b.intercept,
        }),
        MathOp::Sub => Ok(Affine {
            slope: a.slope - b.slope,
            intercept: a.intercept - b.intercept,
        }),
        MathOp::Mul => {
            if b.is_constant() {
                Ok(Affine {
                    slope: a.slope * b.intercept,
                    intercept: a.intercept * b.intercept,
                })
            } else if a.is_constant() {
                Ok(Affine {
                    slope: b.slope * a.intercept,
                    intercept: b.intercept * a.intercept,
                })
            } else {
                Err(MonkeyError::NonLinear(format!(
                    "{}: product of two sides containing the unknown",
                    name
                )))
            }
        }
        MathOp::Div => {
            if !b.is_constant() {
                return Err(MonkeyError::NonLinear(format!(
                    "{}: divisor contains the unknown",
                    name
                )));
            }
            if b.intercept.is_zero() {
                return Err(MonkeyError::DivisionByZero(name.to_string()));
            }
            Ok(Affine {
                slope: a.slope / b.intercept,
                intercept: a.intercept / b.intercept,
            })
        }
    }
}

enum Frame<'a> {
    Enter(&'a str),
    Exit(&'a str),
}

/// Fold the expression rooted at `target` to its affine form
///
/// Same dependency-order walk as [`crate::riddle::eval::resolution_map`],
/// but over affine values, with `humn` short-circuited to the bare variable
/// regardless of the job it yells.
fn fold<'a>(jobs: &'a JobTable, target: &'a str) -> Result<Affine> {
    let mut folded: AHashMap<&'a str, Affine> = AHashMap::new();
    let mut on_path: AHashSet<&'a str> = AHashSet::new();
    let mut stack: Vec<Frame<'a>> = vec![Frame::Enter(target)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(name) => {
                if folded.contains_key(name) {
                    continue;
                }
                if name == HUMN {
                    folded.insert(name, Affine::variable());
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
                        folded.insert(name, Affine::constant(*value));
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
                let value = combine(*op, folded[lhs.as_str()], folded[rhs.as_str()], name)?;
                folded.insert(name, value);
                on_path.remove(name);
            }
        }
    }

    Ok(folded[target])
}

/// Solve the rewritten root equality for the free variable
pub fn solve_for_humn(jobs: &JobTable) -> Result<i64> {
    let root = jobs
        .get(ROOT)
        .ok_or_else(|| MonkeyError::UnknownMonkey(ROOT.to_string()))?;
    let Job::Binary { lhs, rhs, .. } = root else {
        return Err(MonkeyError::Parse(format!(
            "{:?} must name two operands to equate",
            ROOT
        )));
    };

    let left = fold(jobs, lhs)?;
    let right = fold(jobs, rhs)?;

    let slope = left.slope - right.slope;
    if slope.is_zero() {
        let detail = if left.intercept == right.intercept {
            "every value of the unknown satisfies the equality".to_string()
        } else {
            format!("{} != {} for every value of the unknown", left.intercept, right.intercept)
        };
        return Err(MonkeyError::Unsatisfiable(detail));
    }

    let solution = (right.intercept - left.intercept) / slope;
    if !solution.is_integer() {
        return Err(MonkeyError::Unsatisfiable(format!(
            "solution {} is not an integer",
            solution
        )));
    }
    i64::try_from(solution.to_integer()).map_err(|_| {
        MonkeyError::Unsatisfiable(format!("solution {} is out of range", solution))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riddle::parser::parse_jobs;

    #[test]
    fn test_direct_equality() {
        let jobs = parse_jobs("root: humn + zero\nzero: 0\nhumn: 99").unwrap();
        // humn's own literal is ignored; the equality pins it to zero's value
        assert_eq!(solve_for_humn(&jobs).unwrap(), 0);
    }

    #[test]
    fn test_inverts_arithmetic_along_the_path() {
        let jobs =
            parse_jobs("root: l - r\nl: humn / two\nr: 0\ntwo: 2\nhumn: 0").unwrap();
        // root's own operator is discarded; the operands are equated,
        // so humn / 2 == 0 pins humn to 0
        assert_eq!(solve_for_humn(&jobs).unwrap(), 0);
    }

    #[test]
    fn test_fractional_slope_still_solves_exactly() {
        let jobs = parse_jobs("root: l + r\nl: humn / two\nr: 3\ntwo: 2\nhumn: 0").unwrap();
        // humn / 2 == 3  =>  humn == 6
        assert_eq!(solve_for_humn(&jobs).unwrap(), 6);
    }

    #[test]
    fn test_non_integer_solution_is_unsatisfiable() {
        let jobs = parse_jobs("root: l + r\nl: humn * two\nr: 5\ntwo: 2\nhumn: 0").unwrap();
        let err = solve_for_humn(&jobs).unwrap_err();
        assert!(matches!(err, MonkeyError::Unsatisfiable(_)));
    }

    #[test]
    fn test_quadratic_constraint_is_rejected() {
        let jobs = parse_jobs("root: l + r\nl: humn * humn\nr: 4\nhumn: 0").unwrap();
        let err = solve_for_humn(&jobs).unwrap_err();
        assert!(matches!(err, MonkeyError::NonLinear(_)));
    }

    #[test]
    fn test_unknown_free_variable_is_unsatisfiable() {
        // humn never appears, so the equality has no unknown to solve for
        let jobs = parse_jobs("root: a + b\na: 5\nb: 7").unwrap();
        let err = solve_for_humn(&jobs).unwrap_err();
        assert!(matches!(err, MonkeyError::Unsatisfiable(_)));
    }

    #[test]
    fn test_division_by_variable_is_rejected() {
        let jobs = parse_jobs("root: l + r\nl: ten / humn\nr: 5\nten: 10\nhumn: 0").unwrap();
        let err = solve_for_humn(&jobs).unwrap_err();
        assert!(matches!(err, MonkeyError::NonLinear(_)));
    }
}
