use crate::*;
use serde::Serialize;

/// The canonical memoization key for a subgame.
///
/// `GameState` names pools by role rather than by player: `active` moves
/// next, `waiting` moves after. Every move swaps the two roles, so the
/// recursion never needs to know which original player is which.
///
/// The remaining sequence is identified by its `offset` into the solver's
/// immutable padded sequence. Within one solver, equal offsets mean equal
/// suffixes, so comparing `(active, waiting, offset)` is the same as
/// comparing the full triple of pools and remaining payoffs.
///
/// Like the rest of the game tree, states are values: [`apply`](Self::apply)
/// returns a new state rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GameState {
    active: Pool,
    waiting: Pool,
    offset: usize,
}

impl GameState {
    pub fn new(active: Pool, waiting: Pool, offset: usize) -> Self {
        Self {
            active,
            waiting,
            offset,
        }
    }
    /// The opening position: nothing consumed yet.
    pub fn root(active: Pool, waiting: Pool) -> Self {
        Self::new(active, waiting, 0)
    }
    pub fn active(&self) -> &Pool {
        &self.active
    }
    pub fn waiting(&self) -> &Pool {
        &self.waiting
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
    /// Moves left to play from here.
    pub fn turns(&self) -> usize {
        self.active.len() + self.waiting.len()
    }
    /// Sequence entries still to be consumed from here.
    pub fn demand(&self) -> usize {
        self.active.demand().saturating_add(self.waiting.demand())
    }
    /// One choice left for the mover and nothing for the opponent.
    pub fn is_terminal(&self) -> bool {
        self.forced().is_some()
    }
    /// The last move of the game, if this is the final position.
    pub fn forced(&self) -> Option<Choice> {
        match self.waiting.is_empty() {
            true => self.active.only(),
            false => None,
        }
    }
    /// Checks that strict alternation can reach the terminal shape.
    ///
    /// With `a` choices on move and `b` waiting, the sizes step through
    /// `(a, b) -> (b, a - 1) -> (a - 1, b - 1)`, which lands on `(1, 0)`
    /// exactly when `a == b + 1`, or `a == b` with at least one choice each.
    pub fn feasible(&self) -> Result<(), InvalidInput> {
        let (a, b) = (self.active.len(), self.waiting.len());
        match a == b + 1 || (a == b && a > 0) {
            true => Ok(()),
            false => Err(InvalidInput::Alternation {
                active: a,
                waiting: b,
            }),
        }
    }
    /// The state after the mover spends the choice at `index`.
    pub fn apply(&self, index: usize) -> Self {
        let choice = self.active.choices()[index];
        Self {
            active: self.waiting.clone(),
            waiting: self.active.without(index),
            offset: self.offset.saturating_add(choice),
        }
    }
    /// The state after the mover spends the first occurrence of `choice`.
    pub fn play(&self, choice: Choice) -> Result<Self, InvalidInput> {
        self.active
            .position(choice)
            .map(|index| self.apply(index))
            .ok_or(InvalidInput::Unknown { choice })
    }
    /// Every move available to the mover, in pool order, as
    /// `(index, choice, next state)`.
    pub fn moves(&self) -> impl Iterator<Item = (usize, Choice, GameState)> + '_ {
        self.active
            .iter()
            .enumerate()
            .map(|(index, choice)| (index, choice, self.apply(index)))
    }
}

impl Arbitrary for GameState {
    /// A feasible root with distinct choices in each pool.
    fn random() -> Self {
        use rand::seq::SliceRandom;
        let n = rand::random_range(1..=RANDOM_POOL_SIZE);
        let m = match rand::random::<bool>() {
            true => n,
            false => n - 1,
        };
        let draw = |k: usize| {
            let mut values = (0..=RANDOM_CHOICE_MAX).collect::<Vec<Choice>>();
            values.shuffle(&mut rand::rng());
            values.into_iter().take(k).collect::<Pool>()
        };
        let active = draw(n);
        let waiting = draw(m);
        Self::root(active, waiting)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} | {} @ {}", self.active, self.waiting, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_swaps_roles() {
        let state = GameState::root(Pool::from([1, 2]), Pool::from([3, 4]));
        let next = state.apply(1);
        assert_eq!(next.active(), &Pool::from([3, 4]));
        assert_eq!(next.waiting(), &Pool::from([1]));
        assert_eq!(next.offset(), 2);
        let last = next.apply(0);
        assert_eq!(last.active(), &Pool::from([1]));
        assert_eq!(last.waiting(), &Pool::from([4]));
        assert_eq!(last.offset(), 5);
    }

    #[test]
    fn offset_saturates() {
        let state = GameState::root(Pool::from([usize::MAX, 1]), Pool::from([2]));
        let next = state.apply(0);
        assert_eq!(next.offset(), usize::MAX);
        assert_eq!(next.apply(0).offset(), usize::MAX);
        assert_eq!(state.demand(), usize::MAX);
    }

    #[test]
    fn moves_follow_pool_order() {
        let state = GameState::root(Pool::from([2, 0, 1]), Pool::from([5, 6]));
        let choices = state.moves().map(|(_, c, _)| c).collect::<Vec<_>>();
        assert_eq!(choices, vec![2, 0, 1]);
        let (index, _, child) = state.moves().nth(2).unwrap();
        assert_eq!(index, 2);
        assert_eq!(child.waiting(), &Pool::from([2, 0]));
    }

    #[test]
    fn terminal_shape() {
        assert_eq!(
            GameState::root(Pool::from([3]), Pool::default()).forced(),
            Some(3)
        );
        assert!(!GameState::root(Pool::from([3]), Pool::from([1])).is_terminal());
        assert!(!GameState::root(Pool::from([3, 1]), Pool::default()).is_terminal());
        assert!(!GameState::root(Pool::default(), Pool::default()).is_terminal());
    }

    #[test]
    fn feasibility() {
        let ok = |a: usize, b: usize| {
            GameState::root((0..a).collect(), (0..b).collect())
                .feasible()
                .is_ok()
        };
        assert!(ok(1, 0));
        assert!(ok(1, 1));
        assert!(ok(3, 2));
        assert!(ok(4, 4));
        assert!(!ok(0, 0));
        assert!(!ok(0, 1));
        assert!(!ok(2, 0));
        assert!(!ok(2, 3));
        assert_eq!(
            GameState::root(Pool::from([1]), Pool::from([1, 2])).feasible(),
            Err(InvalidInput::Alternation {
                active: 1,
                waiting: 2
            })
        );
    }

    #[test]
    fn play_by_value() {
        let state = GameState::root(Pool::from([1, 2]), Pool::from([2]));
        assert_eq!(state.play(2), Ok(state.apply(1)));
        assert_eq!(state.play(7), Err(InvalidInput::Unknown { choice: 7 }));
    }

    #[test]
    fn random_roots_are_feasible() {
        for _ in 0..64 {
            let state = GameState::random();
            assert!(state.feasible().is_ok());
            assert!(state.active().clone().distinct().is_ok());
            assert!(state.waiting().clone().distinct().is_ok());
            assert_eq!(state.offset(), 0);
        }
    }
}
