use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::{evaluate, random_move, Board, Coord, GameEngine, GameState, Mark};

fn coord() -> impl Strategy<Value = Coord> {
    (0..3usize, 0..3usize).prop_map(|(c, r)| Coord::new(c, r).unwrap())
}

/// Board reached by `moves` random turns from an empty game.
fn random_state(seed: u64, moves: usize) -> GameState {
    let mut engine = GameEngine::from_seed(seed);
    let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
    for _ in 0..moves {
        if engine.state().is_over() {
            break;
        }
        let Some(c) = random_move(engine.state().board(), &mut rng) else {
            break;
        };
        engine.apply_human_move(c);
    }
    *engine.state()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Outcome is recorded exactly when the board is won or full, and the
    /// human is never behind the opponent by a move.
    #[test]
    fn reachable_states_are_consistent(seed in any::<u64>(), moves in 0..6usize) {
        let state = random_state(seed, moves);
        let board = state.board();
        prop_assert_eq!(state.outcome(), evaluate(board));
        prop_assert_eq!(evaluate(board), evaluate(board));

        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        prop_assert!(x == o || x == o + 1, "x={} o={}", x, o);
        prop_assert_eq!(board.occupied().count_ones(), x + o);
        prop_assert!((board.marks(Mark::X) & board.marks(Mark::O)).is_empty());
    }

    /// An accepted move adds the human mark and at most one reply; a
    /// rejected one leaves the state untouched.
    #[test]
    fn apply_adds_one_or_two_marks(seed in any::<u64>(), moves in 0..5usize, target in coord()) {
        let before = random_state(seed, moves);
        let mut rng = SmallRng::seed_from_u64(seed);
        match before.apply_human_move(target, &mut rng) {
            Ok(turn) => {
                let after = turn.state.board();
                prop_assert_eq!(after.get(target), Some(Mark::X));
                prop_assert_eq!(after.count(Mark::X), before.board().count(Mark::X) + 1);
                let replies = after.count(Mark::O) - before.board().count(Mark::O);
                prop_assert_eq!(replies, usize::from(turn.reply.is_some()));
                for cell in before.board().cells().filter(|c| !c.is_empty()) {
                    prop_assert_eq!(after.get(cell.coord), cell.mark);
                }
            }
            Err(_) => {
                prop_assert!(before.is_over() || before.board().get(target).is_some());
            }
        }
    }

    /// The engine ignores invalid moves silently.
    #[test]
    fn invalid_moves_are_noops(seed in any::<u64>(), moves in 0..6usize, target in coord()) {
        let state = random_state(seed, moves);
        prop_assume!(state.is_over() || state.board().get(target).is_some());
        let mut engine = GameEngine::from_state(state, SmallRng::seed_from_u64(seed));
        prop_assert_eq!(*engine.apply_human_move(target), state);
    }

    #[test]
    fn restart_always_empties(seed in any::<u64>(), moves in 0..6usize) {
        let mut engine = GameEngine::from_state(random_state(seed, moves), SmallRng::seed_from_u64(seed));
        engine.restart();
        prop_assert_eq!(*engine.state(), GameState::new());
        prop_assert_eq!(engine.state().board(), &Board::new());
    }

    /// The opponent only ever takes an empty square and terminates on any
    /// board with room left.
    #[test]
    fn opponent_picks_empty(seed in any::<u64>(), moves in 0..5usize) {
        let state = random_state(seed, moves);
        let board = state.board();
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_mul(31));
        match random_move(board, &mut rng) {
            Some(c) => prop_assert_eq!(board.get(c), None),
            None => prop_assert!(board.is_full()),
        }
    }
}
