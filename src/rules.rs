use crate::*;
use serde::Serialize;

/// Which candidate wins when two moves are worth the same to the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TieBreak {
    /// Keep the candidate that appears first in pool order.
    #[default]
    Earliest,
    /// Let every equally valued candidate replace the incumbent.
    Latest,
}

impl TieBreak {
    /// Whether `candidate` displaces `incumbent`.
    pub fn prefers<P: PartialOrd>(&self, candidate: P, incumbent: P) -> bool {
        match self {
            Self::Earliest => candidate > incumbent,
            Self::Latest => candidate >= incumbent,
        }
    }
}

/// Solver configuration.
///
/// The default is the strict game: pools of distinct values and the
/// earliest of several equally good moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rules {
    tiebreak: TieBreak,
    repeats: bool,
}

impl Rules {
    pub fn with_tiebreak(mut self, tiebreak: TieBreak) -> Self {
        self.tiebreak = tiebreak;
        self
    }
    /// Admit pools that hold the same value more than once. Moves are
    /// still removed by position, so the engine stays unambiguous.
    pub fn with_repeats(mut self, repeats: bool) -> Self {
        self.repeats = repeats;
        self
    }
    pub fn tiebreak(&self) -> TieBreak {
        self.tiebreak
    }
    pub fn repeats(&self) -> bool {
        self.repeats
    }
    /// Validates a pool against these rules.
    pub fn admit(&self, pool: Pool) -> Result<Pool, InvalidInput> {
        match self.repeats {
            true => Ok(pool),
            false => pool.distinct(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earliest_is_strict() {
        assert!(TieBreak::Earliest.prefers(3, 2));
        assert!(!TieBreak::Earliest.prefers(2, 2));
        assert!(!TieBreak::Earliest.prefers(1, 2));
    }

    #[test]
    fn latest_takes_ties() {
        assert!(TieBreak::Latest.prefers(2.0, 2.0));
        assert!(!TieBreak::Latest.prefers(1.0, 2.0));
    }

    #[test]
    fn admit_follows_repeats() {
        let pool = Pool::from([0, 0]);
        assert_eq!(
            Rules::default().admit(pool.clone()),
            Err(InvalidInput::Duplicate { choice: 0 })
        );
        assert_eq!(Rules::default().with_repeats(true).admit(pool.clone()), Ok(pool));
    }
}
