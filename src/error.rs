use crate::Choice;

/// Malformed game input.
///
/// Raised at construction when the problem is visible in the pools
/// themselves, otherwise at the first point the recursion would step
/// outside a well-formed game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("choice {choice} appears more than once in a pool")]
    Duplicate { choice: Choice },
    #[error("choice {choice} is negative")]
    Negative { choice: i64 },
    #[error("pools of size {active} and {waiting} cannot alternate down to a single forced move")]
    Alternation { active: usize, waiting: usize },
    #[error("the player on move has no choices left before the final move")]
    Exhausted,
    #[error("choice {choice} is not available to the player on move")]
    Unknown { choice: Choice },
    #[error("cannot parse {0:?} as a choice")]
    Parse(String),
}
