use crate::*;
use serde::Serialize;

/// The shared payoff sequence, right-padded with zeros.
///
/// Built once per game and padded to one entry per remaining move. Moves
/// that reach past the end simply collect fewer entries. Never mutated
/// afterwards; subgames address a suffix by offset.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Sequence<P>(Vec<P>);

impl<P> Sequence<P>
where
    P: Payoff,
{
    /// Pads `raw` with zeros until it holds at least `len` entries.
    /// Longer input is kept as is.
    pub fn padded<I>(raw: I, len: usize) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        let mut values = raw.into_iter().collect::<Vec<P>>();
        if values.len() < len {
            values.resize(len, P::default());
        }
        Self(values)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn values(&self) -> &[P] {
        &self.0
    }
    /// Entries not yet consumed once `offset` have been.
    pub fn suffix(&self, offset: usize) -> &[P] {
        &self.0[offset.min(self.0.len())..]
    }
    /// Sum of the `width` entries starting at `offset`.
    pub fn window(&self, offset: usize, width: usize) -> P {
        self.suffix(offset).iter().take(width).copied().sum()
    }
    pub fn total(&self) -> P {
        self.0.iter().copied().sum()
    }
}

impl<P> From<Vec<P>> for Sequence<P> {
    fn from(values: Vec<P>) -> Self {
        Self(values)
    }
}

impl<P> Arbitrary for Sequence<P>
where
    P: Payoff + From<i16>,
{
    fn random() -> Self {
        let n = rand::random_range(0..=RANDOM_SEQUENCE_LEN);
        (0..n)
            .map(|_| rand::random_range(-RANDOM_PAYOFF_MAX..=RANDOM_PAYOFF_MAX))
            .map(P::from)
            .collect::<Vec<P>>()
            .into()
    }
}
