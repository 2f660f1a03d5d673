//! Memoized backward-induction solver for a two-player choice allocation game.
//!
//! Each player owns a private pool of choice values. On a turn the player to
//! move picks a value `c` from their pool, collects the sum of the next `c`
//! entries of a shared payoff sequence, and gives up that value. Players
//! alternate until one of them holds a single forced choice and the other
//! holds nothing.
//!
//! ## Core Types
//!
//! - [`GameSolver`] — owns the root position and the memo tables
//! - [`GameState`] — canonical (active pool, waiting pool, sequence offset) key
//! - [`Pool`] — ordered choices available to one player
//! - [`Sequence`] — zero-padded payoff sequence shared by both players
//! - [`Payoffs`] — (active, waiting) totals from a state onward
//!
//! ## Configuration
//!
//! [`Rules`] selects the tie-break direction and whether repeated values
//! are admitted into a pool.
//!
//! ## Inspection
//!
//! - [`Replay`] — walks a trace turn by turn and attributes payoffs
//! - [`Stats`] — cache hit/miss counters for a solver
mod error;
mod payoff;
mod pool;
mod replay;
mod rules;
mod sequence;
mod solver;
mod state;
mod stats;

pub use error::*;
pub use payoff::*;
pub use pool::*;
pub use replay::*;
pub use rules::*;
pub use sequence::*;
pub use solver::*;
pub use state::*;
pub use stats::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A choice value: how many leading sequence entries a move consumes.
pub type Choice = usize;
/// Payoff domain used by the command-line front end.
pub type Utility = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RANDOM GAME PARAMETERS
// ============================================================================
/// Largest pool handed to the first mover of a random game.
pub const RANDOM_POOL_SIZE: usize = 5;
/// Largest choice value drawn for a random pool. Must admit
/// `RANDOM_POOL_SIZE` distinct values.
pub const RANDOM_CHOICE_MAX: Choice = 6;
/// Longest raw payoff sequence drawn for a random game.
pub const RANDOM_SEQUENCE_LEN: usize = 24;
/// Payoffs of a random sequence are drawn from `-MAX..=MAX`.
pub const RANDOM_PAYOFF_MAX: i16 = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
