//! Core type definitions used throughout the codebase

/// Worry level carried by an item in the keep-away game
pub type Worry = u64;

/// Round counter (simulation time unit)
pub type Round = u32;

/// Index of a monkey within its troop
///
/// Monkeys reference each other only through this index into the troop's
/// arena, never through object references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonkeyId(pub usize);

impl std::fmt::Display for MonkeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
