//! Round simulation for the keep-away game
//!
//! A single troop arena owns every monkey; each round visits the monkeys in
//! index order, inspects and throws their items, and delivers the throws
//! through integer indices into the arena.

use crate::core::config::SimConfig;
use crate::core::error::Result;
use crate::core::types::{Round, Worry};
use crate::keepaway::monkey::{Monkey, Relief};
use crate::keepaway::parser::parse_troop;

/// The arena owning all monkeys, in parse order
#[derive(Debug, Clone)]
pub struct Troop {
    monkeys: Vec<Monkey>,
}

impl Troop {
    pub fn new(monkeys: Vec<Monkey>) -> Self {
        Self { monkeys }
    }

    pub fn len(&self) -> usize {
        self.monkeys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monkeys.is_empty()
    }

    pub fn monkeys(&self) -> &[Monkey] {
        &self.monkeys
    }

    /// Product of every monkey's test divisor
    ///
    /// Reducing worry modulo this product leaves every divisibility test
    /// unchanged, which keeps the second variant exact without growing
    /// worry levels beyond machine range.
    pub fn divisor_product(&self) -> Worry {
        self.monkeys.iter().map(|m| m.divisor).product()
    }

    /// Total number of items currently held across the troop
    pub fn total_items(&self) -> usize {
        self.monkeys.iter().map(|m| m.items.len()).sum()
    }

    /// Total number of inspections performed so far
    pub fn total_inspections(&self) -> u64 {
        self.monkeys.iter().map(|m| m.inspections).sum()
    }

    /// Play one round; every monkey takes one turn in index order
    ///
    /// Items thrown to a later monkey are inspected again within the same
    /// round. Returns the number of items processed this round.
    pub fn round(&mut self, relief: Relief) -> Result<u64> {
        let mut processed = 0;
        for i in 0..self.monkeys.len() {
            let throws = self.monkeys[i].take_turn(relief)?;
            processed += throws.len() as u64;
            for (target, worry) in throws {
                // Targets were validated at parse time
                self.monkeys[target.0].items.push(worry);
            }
        }
        Ok(processed)
    }

    /// Play exactly `rounds` rounds, sequentially, with no early exit
    pub fn run(&mut self, rounds: Round, relief: Relief) -> Result<()> {
        for round in 1..=rounds {
            let processed = self.round(relief)?;
            tracing::debug!(round, processed, "round complete");
        }
        Ok(())
    }

    /// Product of the two highest inspection counts
    pub fn monkey_business(&self) -> u64 {
        let mut activity: Vec<u64> = self.monkeys.iter().map(|m| m.inspections).collect();
        activity.sort_unstable_by(|a, b| b.cmp(a));
        match activity.as_slice() {
            [first, second, ..] => first * second,
            _ => 0,
        }
    }
}

/// First variant: relief is floor division by three
pub fn part_one(input: &str) -> Result<u64> {
    let config = SimConfig::default();
    let mut troop = parse_troop(input)?;
    troop.run(config.rounds, Relief::Divide(config.calm_divisor))?;
    Ok(troop.monkey_business())
}

/// Second variant: relief is reduction modulo the divisor product
pub fn part_two(input: &str) -> Result<u64> {
    let config = SimConfig::default();
    let mut troop = parse_troop(input)?;
    let product = troop.divisor_product();
    troop.run(config.rounds, Relief::Modulo(product))?;
    Ok(troop.monkey_business())
}
