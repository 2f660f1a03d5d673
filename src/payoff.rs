use serde::Serialize;
use std::fmt::Debug;
use std::fmt::Display;
use std::iter::Sum;
use std::ops::Add;

/// Numeric domain of a payoff sequence.
///
/// Any integer or floating point type qualifies. `Default` supplies the
/// zero used for padding and for the waiting player's terminal payoff.
/// Arithmetic follows the host type: integer overflow is not guarded.
pub trait Payoff:
    Copy + Default + PartialOrd + Add<Output = Self> + Sum<Self> + Debug + Display + Send + Sync
{
}

impl<T> Payoff for T where
    T: Copy + Default + PartialOrd + Add<Output = T> + Sum<T> + Debug + Display + Send + Sync
{
}

/// Optimal totals collected from a state onward, seen from that state.
///
/// `active` belongs to the player on move, `waiting` to the other one.
/// Because every move consumes a fixed number of entries, `active + waiting`
/// is the same for every line of play out of a given state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Payoffs<P> {
    active: P,
    waiting: P,
}

impl<P> Payoffs<P>
where
    P: Payoff,
{
    pub fn new(active: P, waiting: P) -> Self {
        Self { active, waiting }
    }
    pub fn active(&self) -> P {
        self.active
    }
    pub fn waiting(&self) -> P {
        self.waiting
    }
    /// Everything consumed from this state to the end of the game.
    pub fn total(&self) -> P {
        self.active + self.waiting
    }
    /// Lifts a child subgame's payoffs into the parent that moved into it.
    ///
    /// Roles swap across a move: the child's waiting player is the parent's
    /// mover, who also banks `turn` for the move itself.
    pub fn lift(self, turn: P) -> Self {
        Self {
            active: turn + self.waiting,
            waiting: self.active,
        }
    }
}

impl<P> From<(P, P)> for Payoffs<P> {
    fn from((active, waiting): (P, P)) -> Self {
        Self { active, waiting }
    }
}
impl<P> From<Payoffs<P>> for (P, P) {
    fn from(payoffs: Payoffs<P>) -> Self {
        (payoffs.active, payoffs.waiting)
    }
}

impl<P> Display for Payoffs<P>
where
    P: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.active, self.waiting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lift_swaps_roles() {
        let child = Payoffs::new(5i64, 3);
        let parent = child.lift(2);
        assert_eq!(parent.active(), 5);
        assert_eq!(parent.waiting(), 5);
        assert_eq!(Payoffs::new(7i64, -4).lift(1), Payoffs::new(-3, 7));
    }

    #[test]
    fn lift_preserves_total_plus_turn() {
        let child = Payoffs::new(1.5f64, -0.25);
        assert_eq!(child.lift(2.0).total(), child.total() + 2.0);
    }

    #[test]
    fn tuple_conversion() {
        let payoffs = Payoffs::from((4i32, 9));
        assert_eq!(<(i32, i32)>::from(payoffs), (4, 9));
        assert_eq!(payoffs.to_string(), "(4, 9)");
    }
}
