//! Memoized backward induction over the choice allocation game.
//!
//! [`GameSolver`] evaluates a subgame once per canonical [`GameState`] and
//! keeps two solver-owned tables: the optimal [`Payoffs`] of every state it
//! has visited, and the position of the winning move in that state's pool.
//! Traces are rebuilt from the second table by replaying winning moves down
//! to the forced final move.
//!
//! # Recursion
//!
//! - **Terminal**: one choice left on move and none waiting. The mover
//!   collects the next `choice` entries, the other player collects nothing.
//! - **Decision**: every move is tried in pool order. The child is solved
//!   from the opponent's point of view and lifted back with
//!   [`Payoffs::lift`]. The best candidate for the mover is kept according
//!   to the configured [`TieBreak`].
//!
//! The state space is a DAG (each move strictly shrinks the pools), so
//! table entries are written once and never invalidated.
use crate::*;
use std::collections::HashMap;

/// Solver for a single game: root position, padded sequence and memo tables.
///
/// Tables start empty, only grow, and live as long as the solver, so a
/// second query on the same solver is answered from cache.
#[derive(Debug, Clone)]
pub struct GameSolver<P> {
    root: GameState,
    sequence: Sequence<P>,
    rules: Rules,
    values: HashMap<GameState, Payoffs<P>>,
    strategies: HashMap<GameState, usize>,
    stats: Stats,
}

/// Construction.
impl<P> GameSolver<P>
where
    P: Payoff,
{
    /// Strict game: distinct values in each pool, earliest move on ties.
    pub fn new<A, B, S>(choices: A, opponent: B, sequence: S) -> Result<Self, InvalidInput>
    where
        A: IntoIterator<Item = Choice>,
        B: IntoIterator<Item = Choice>,
        S: IntoIterator<Item = P>,
    {
        Self::with_rules(choices, opponent, sequence, Rules::default())
    }
    pub fn with_rules<A, B, S>(
        choices: A,
        opponent: B,
        sequence: S,
        rules: Rules,
    ) -> Result<Self, InvalidInput>
    where
        A: IntoIterator<Item = Choice>,
        B: IntoIterator<Item = Choice>,
        S: IntoIterator<Item = P>,
    {
        let active = choices.into_iter().collect::<Pool>();
        let waiting = opponent.into_iter().collect::<Pool>();
        Self::from_parts(GameState::root(active, waiting), sequence, rules)
    }
    /// Like [`with_rules`](Self::with_rules), for callers holding signed
    /// values. Negative choices are rejected.
    pub fn signed<A, B, S>(
        choices: A,
        opponent: B,
        sequence: S,
        rules: Rules,
    ) -> Result<Self, InvalidInput>
    where
        A: IntoIterator<Item = i64>,
        B: IntoIterator<Item = i64>,
        S: IntoIterator<Item = P>,
    {
        let active = Pool::signed(choices)?;
        let waiting = Pool::signed(opponent)?;
        Self::from_parts(GameState::root(active, waiting), sequence, rules)
    }
    /// Validates `root` against `rules`, then pads `sequence` with one zero
    /// per remaining move.
    pub fn from_parts<S>(root: GameState, sequence: S, rules: Rules) -> Result<Self, InvalidInput>
    where
        S: IntoIterator<Item = P>,
    {
        let active = rules.admit(root.active().clone())?;
        let waiting = rules.admit(root.waiting().clone())?;
        let root = GameState::new(active, waiting, root.offset());
        root.feasible()?;
        Ok(Self::build(root, sequence, rules))
    }
    fn build<S>(root: GameState, sequence: S, rules: Rules) -> Self
    where
        S: IntoIterator<Item = P>,
    {
        let len = root.offset().saturating_add(root.turns());
        Self {
            sequence: Sequence::padded(sequence, len),
            root,
            rules,
            values: HashMap::new(),
            strategies: HashMap::new(),
            stats: Stats::default(),
        }
    }
}

/// Queries.
impl<P> GameSolver<P>
where
    P: Payoff,
{
    /// One optimal line of play for the whole game, first mover first.
    pub fn find_optimal(&mut self) -> Result<Vec<Choice>, InvalidInput> {
        let root = self.root.clone();
        self.solve(&root)?;
        log::debug!("solved {}", root);
        log::debug!("{}", self.stats);
        self.trace(&root).ok_or(InvalidInput::Exhausted)
    }
    /// Optimal totals for the whole game, first mover first.
    pub fn payoffs(&mut self) -> Result<Payoffs<P>, InvalidInput> {
        let root = self.root.clone();
        self.solve(&root)
    }
    /// Optimal totals for any subgame over this solver's sequence.
    pub fn solve(&mut self, state: &GameState) -> Result<Payoffs<P>, InvalidInput> {
        state.feasible()?;
        self.search(state)
    }
    /// The cached optimal line out of `state`, if it has been solved.
    pub fn trace(&self, state: &GameState) -> Option<Vec<Choice>> {
        let mut trace = Vec::with_capacity(state.turns());
        let mut state = state.clone();
        loop {
            let index = *self.strategies.get(&state)?;
            trace.push(state.active().choices()[index]);
            match state.is_terminal() {
                true => return Some(trace),
                false => state = state.apply(index),
            }
        }
    }
    /// The cached payoffs of `state`, without solving.
    pub fn value(&self, state: &GameState) -> Option<Payoffs<P>> {
        self.values.get(state).copied()
    }
    /// Walks `trace` from the root, turn by turn.
    pub fn replay<'game>(&'game self, trace: &'game [Choice]) -> Result<Replay<'game, P>, InvalidInput> {
        Replay::new(&self.sequence, &self.root, trace)
    }
    pub fn root(&self) -> &GameState {
        &self.root
    }
    pub fn sequence(&self) -> &Sequence<P> {
        &self.sequence
    }
    pub fn rules(&self) -> Rules {
        self.rules
    }
    pub fn stats(&self) -> Stats {
        self.stats
    }
    /// Number of subgames solved so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Recursion.
impl<P> GameSolver<P>
where
    P: Payoff,
{
    fn search(&mut self, state: &GameState) -> Result<Payoffs<P>, InvalidInput> {
        if let Some(payoffs) = self.values.get(state) {
            self.stats.hit();
            return Ok(*payoffs);
        }
        self.stats.miss();
        let (index, payoffs) = match state.forced() {
            Some(choice) => (
                0,
                Payoffs::new(self.sequence.window(state.offset(), choice), P::default()),
            ),
            None => self.decide(state)?,
        };
        log::trace!("{} -> {} {}", state, state.active().choices()[index], payoffs);
        self.values.insert(state.clone(), payoffs);
        self.strategies.insert(state.clone(), index);
        self.stats.store();
        Ok(payoffs)
    }
    fn decide(&mut self, state: &GameState) -> Result<(usize, Payoffs<P>), InvalidInput> {
        let tiebreak = self.rules.tiebreak();
        let mut best = None::<(usize, Payoffs<P>)>;
        for (index, choice, child) in state.moves() {
            let turn = self.sequence.window(state.offset(), choice);
            let candidate = self.search(&child)?.lift(turn);
            if best.is_none_or(|(_, incumbent)| tiebreak.prefers(candidate.active(), incumbent.active())) {
                best = Some((index, candidate));
            }
        }
        best.ok_or(InvalidInput::Exhausted)
    }
}

impl<P> Arbitrary for GameSolver<P>
where
    P: Payoff + From<i16>,
{
    fn random() -> Self {
        let sequence = Sequence::<P>::random();
        Self::build(
            GameState::random(),
            sequence.values().to_vec(),
            Rules::default(),
        )
    }
}
