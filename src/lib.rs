//! Monkey Business - two independent jungle puzzle solvers
//!
//! `keepaway` simulates a troop of monkeys passing worry-valued items
//! around for a fixed number of rounds; `riddle` resolves an arithmetic
//! dependency graph of shouting monkeys, with a symbolic variant that
//! solves for one unknown. The solvers share no state, only the crate's
//! core types and error handling.

pub mod core;
pub mod keepaway;
pub mod riddle;
