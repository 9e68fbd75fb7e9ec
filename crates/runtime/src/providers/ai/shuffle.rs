//! Fallback move ordering.
//!
//! When the straight-line step toward a goal is blocked, the direction
//! selector tries the remaining cardinal moves in a shuffled order so a
//! blocked bot does not oscillate along the same detour every tick.
//! [`MoveShuffler`] makes that randomness injectable: production play uses
//! [`RandomShuffler`], tests pin the order with [`FixedOrder`].

use diamonds_core::CardinalDirection;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

pub trait MoveShuffler {
    /// Reorders the fallback moves in place.
    fn shuffle(&mut self, moves: &mut [CardinalDirection]);
}

impl<S: MoveShuffler + ?Sized> MoveShuffler for &mut S {
    fn shuffle(&mut self, moves: &mut [CardinalDirection]) {
        (**self).shuffle(moves);
    }
}

/// Uniform shuffle driven by any [`rand::Rng`].
#[derive(Clone, Debug)]
pub struct RandomShuffler<R = SmallRng> {
    rng: R,
}

impl RandomShuffler<SmallRng> {
    /// Reproducible shuffler for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: rand::Rng> RandomShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: rand::Rng> MoveShuffler for RandomShuffler<R> {
    fn shuffle(&mut self, moves: &mut [CardinalDirection]) {
        moves.shuffle(&mut self.rng);
    }
}

/// Deterministic ordering.
///
/// [`FixedOrder::default`] leaves the moves as given (East, South, West,
/// North). [`FixedOrder::new`] imposes an explicit order on a full set of
/// four moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedOrder {
    order: Option<[CardinalDirection; 4]>,
}

impl FixedOrder {
    /// # Panics
    ///
    /// Panics if `order` repeats a direction, since the fallback list would
    /// then lose a cardinal move.
    pub const fn new(order: [CardinalDirection; 4]) -> Self {
        assert!(is_permutation(&order), "fixed order must list each direction once");
        Self { order: Some(order) }
    }
}

const fn is_permutation(order: &[CardinalDirection; 4]) -> bool {
    let mut i = 0;
    while i < order.len() {
        let mut j = i + 1;
        while j < order.len() {
            if order[i] as u8 == order[j] as u8 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

impl MoveShuffler for FixedOrder {
    fn shuffle(&mut self, moves: &mut [CardinalDirection]) {
        if let Some(order) = self.order
            && moves.len() == order.len()
        {
            moves.copy_from_slice(&order);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CardinalDirection::*;

    #[test]
    fn fixed_order_default_is_identity() {
        let mut moves = CardinalDirection::FALLBACK_ORDER;
        FixedOrder::default().shuffle(&mut moves);
        assert_eq!(moves, [East, South, West, North]);
    }

    #[test]
    fn fixed_order_imposes_sequence() {
        let mut moves = CardinalDirection::FALLBACK_ORDER;
        FixedOrder::new([North, West, South, East]).shuffle(&mut moves);
        assert_eq!(moves, [North, West, South, East]);
    }

    #[test]
    #[should_panic(expected = "each direction once")]
    fn fixed_order_rejects_repeated_directions() {
        let _ = FixedOrder::new([East; 4]);
    }

    #[test]
    fn seeded_shuffles_are_reproducible_permutations() {
        let mut first = RandomShuffler::seeded(42);
        let mut second = RandomShuffler::seeded(42);

        for _ in 0..16 {
            let mut a = CardinalDirection::FALLBACK_ORDER;
            let mut b = CardinalDirection::FALLBACK_ORDER;
            first.shuffle(&mut a);
            second.shuffle(&mut b);
            assert_eq!(a, b);

            let mut sorted = a;
            sorted.sort_by_key(|d| d.delta());
            let mut expected = CardinalDirection::FALLBACK_ORDER;
            expected.sort_by_key(|d| d.delta());
            assert_eq!(sorted, expected);
        }
    }
}
