//! Turn-by-turn walk over a trace.
use crate::*;
use serde::Serialize;
use std::ops::Not;

/// A player, named by who moves first from the replayed root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    First,
    Second,
}

impl Not for Player {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// One move of a replayed trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Turn<P> {
    pub player: Player,
    pub choice: Choice,
    pub offset: usize,
    pub payoff: P,
}

/// Iterator over the turns of a trace.
///
/// The trace is checked against the pools up front, so iteration itself
/// cannot fail. Prefixes of a full game are accepted.
pub struct Replay<'game, P> {
    sequence: &'game Sequence<P>,
    trace: &'game [Choice],
    state: GameState,
    player: Player,
    index: usize,
}

impl<'game, P> Replay<'game, P>
where
    P: Payoff,
{
    /// Fails with [`InvalidInput::Unknown`] on the first choice that the
    /// player on move does not hold.
    pub fn new(
        sequence: &'game Sequence<P>,
        root: &GameState,
        trace: &'game [Choice],
    ) -> Result<Self, InvalidInput> {
        trace
            .iter()
            .try_fold(root.clone(), |state, &choice| state.play(choice))?;
        Ok(Self {
            sequence,
            trace,
            state: root.clone(),
            player: Player::First,
            index: 0,
        })
    }
    /// Per-player totals over the whole trace, first player as `active`.
    pub fn totals(self) -> Payoffs<P> {
        self.fold(Payoffs::default(), |totals, turn| match turn.player {
            Player::First => Payoffs::new(totals.active() + turn.payoff, totals.waiting()),
            Player::Second => Payoffs::new(totals.active(), totals.waiting() + turn.payoff),
        })
    }
}

impl<'game, P> Iterator for Replay<'game, P>
where
    P: Payoff,
{
    type Item = Turn<P>;
    fn next(&mut self) -> Option<Self::Item> {
        let choice = *self.trace.get(self.index)?;
        let turn = Turn {
            player: self.player,
            choice,
            offset: self.state.offset(),
            payoff: self.sequence.window(self.state.offset(), choice),
        };
        self.state = self.state.play(choice).ok()?;
        self.player = !self.player;
        self.index += 1;
        Some(turn)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.trace.len() - self.index;
        (n, Some(n))
    }
}
