//! Simulation configuration with documented constants

use crate::core::types::{Round, Worry};

/// Configuration for the keep-away simulation
///
/// Both game variants use the same round count; they differ only in the
/// worry-relief function built from these values.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of rounds to simulate
    ///
    /// Both game variants run for 20 rounds.
    pub rounds: Round,

    /// Divisor for the first variant's relief function
    ///
    /// After a monkey inspects an item, worry drops to floor(worry / 3)
    /// out of relief that the item survived.
    pub calm_divisor: Worry,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rounds: 20,
            calm_divisor: 3,
        }
    }
}
