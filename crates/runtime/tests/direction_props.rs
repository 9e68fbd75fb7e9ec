//! Property-based tests for direction selection.

use proptest::prelude::*;

use diamonds_core::{Board, CardinalDirection, Position};
use diamonds_runtime::{AvoidSet, FixedOrder, RandomShuffler, select_direction};

const WIDTH: u32 = 8;
const HEIGHT: u32 = 8;

fn cell() -> impl Strategy<Value = Position> {
    (0..WIDTH as i32, 0..HEIGHT as i32).prop_map(|(x, y)| Position::new(x, y))
}

fn fallback_order() -> impl Strategy<Value = [CardinalDirection; 4]> {
    Just(CardinalDirection::FALLBACK_ORDER.to_vec())
        .prop_shuffle()
        .prop_map(|moves| [moves[0], moves[1], moves[2], moves[3]])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Whatever the fallback order, the chosen step is a single cardinal step
    /// that stays on the board and off every avoided cell.
    #[test]
    fn prop_step_is_legal(
        current in cell(),
        goal in cell(),
        avoid in prop::collection::btree_set(cell(), 0..12),
        order in fallback_order(),
    ) {
        let board = Board::new(WIDTH, HEIGHT);
        let avoid: AvoidSet = avoid;
        let mv = select_direction(current, Some(goal), &avoid, &board, &mut FixedOrder::new(order));

        let (dx, dy) = mv.delta();
        prop_assert!(dx.abs() + dy.abs() <= 1);
        if !mv.is_stay() {
            let next = mv.apply(current);
            prop_assert!(board.contains(next));
            prop_assert!(!avoid.contains(&next));
        }
    }

    /// A bot only stays when it is on its goal or every neighbour is blocked.
    #[test]
    fn prop_stays_only_when_boxed_in(
        current in cell(),
        goal in cell(),
        avoid in prop::collection::btree_set(cell(), 0..12),
        seed in any::<u64>(),
    ) {
        let board = Board::new(WIDTH, HEIGHT);
        let mut shuffler = RandomShuffler::seeded(seed);
        let mv = select_direction(current, Some(goal), &avoid, &board, &mut shuffler);

        if mv.is_stay() && current != goal {
            for direction in CardinalDirection::ALL {
                let next = direction.step(current);
                prop_assert!(!board.contains(next) || avoid.contains(&next));
            }
        }
    }

    /// An unblocked axis step toward the goal is always taken first.
    #[test]
    fn prop_prefers_ideal_step(current in cell(), goal in cell(), seed in any::<u64>()) {
        prop_assume!(current != goal);
        let board = Board::new(WIDTH, HEIGHT);
        let mut shuffler = RandomShuffler::seeded(seed);
        let mv = select_direction(current, Some(goal), &AvoidSet::new(), &board, &mut shuffler);

        let next = mv.apply(current);
        prop_assert!(next.manhattan_distance(goal) + 1 == current.manhattan_distance(goal));
    }
}
