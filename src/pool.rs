use crate::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::str::FromStr;

/// The choices one player has not used yet, in their original order.
///
/// A pool only ever shrinks: each move removes exactly one element by
/// position and keeps the rest in order, so any subset of the original
/// values always shows up in the same relative order. That makes the
/// derived ordered comparison a valid canonical equality.
///
/// Construction through [`From`] admits repeated values; [`distinct`](Self::distinct)
/// enforces the one-of-each rule that keeps "remove choice `c`" unambiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pool(Vec<Choice>);

impl Pool {
    /// Builds a pool from signed input, rejecting negative values.
    pub fn signed<I>(values: I) -> Result<Self, InvalidInput>
    where
        I: IntoIterator<Item = i64>,
    {
        values
            .into_iter()
            .map(|v| Choice::try_from(v).map_err(|_| InvalidInput::Negative { choice: v }))
            .collect::<Result<Vec<Choice>, InvalidInput>>()
            .map(Self)
    }
    /// Ensures no value appears twice, reporting the first repeat.
    pub fn distinct(self) -> Result<Self, InvalidInput> {
        let mut seen = BTreeSet::new();
        let repeat = self.0.iter().copied().find(|&c| !seen.insert(c));
        match repeat {
            Some(choice) => Err(InvalidInput::Duplicate { choice }),
            None => Ok(self),
        }
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn choices(&self) -> &[Choice] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = Choice> + '_ {
        self.0.iter().copied()
    }
    /// The single remaining choice, if exactly one is left.
    pub fn only(&self) -> Option<Choice> {
        match self.0.as_slice() {
            [choice] => Some(*choice),
            _ => None,
        }
    }
    /// Position of the first occurrence of `choice`.
    pub fn position(&self, choice: Choice) -> Option<usize> {
        self.0.iter().position(|&c| c == choice)
    }
    /// The pool left after spending the choice at `index`.
    pub fn without(&self, index: usize) -> Self {
        let mut choices = self.0.clone();
        choices.remove(index);
        Self(choices)
    }
    /// Sequence entries this pool consumes if every choice is played.
    /// Saturates at `usize::MAX` rather than overflowing.
    pub fn demand(&self) -> usize {
        self.0.iter().fold(0, |sum: usize, &c| sum.saturating_add(c))
    }
}

impl From<Vec<Choice>> for Pool {
    fn from(choices: Vec<Choice>) -> Self {
        Self(choices)
    }
}
impl<const K: usize> From<[Choice; K]> for Pool {
    fn from(choices: [Choice; K]) -> Self {
        Self(choices.to_vec())
    }
}
impl FromIterator<Choice> for Pool {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl From<Pool> for Vec<Choice> {
    fn from(pool: Pool) -> Self {
        pool.0
    }
}

/// Comma separated signed integers, e.g. `1,2,3`. The empty string is the
/// empty pool.
impl FromStr for Pool {
    type Err = InvalidInput;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<i64>().map_err(|_| InvalidInput::Parse(t.to_string())))
            .collect::<Result<Vec<i64>, InvalidInput>>()
            .and_then(Self::signed)
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let choices = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({})", choices)
    }
}
