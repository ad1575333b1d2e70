//! Property-based tests for the tic-tac-toe rules and the minimax engine.

use minimax_lib::board::{Board, Player};
use minimax_lib::boards::tic_tac_toe::{
    apply, legal_actions, utility, Cell, TicTacToeAction, TicTacToeState,
};
use minimax_lib::minimax::{evaluate_actions, max_value, min_value, minimax_decision};
use minimax_lib::playout::RandomPlayout;
use minimax_lib::random::SeededRandomGenerator;
use minimax_lib::search::MinimaxSearch;
use proptest::prelude::*;

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

// =============================================================================
// Strategies
// =============================================================================

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::PlayerA), Just(Player::PlayerB)]
}

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::PlayerA), Just(Cell::PlayerB)]
}

/// Any 3x3 grid with any player to move, reachable or not.
fn arb_grid_state() -> impl Strategy<Value = TicTacToeState> {
    (
        prop::array::uniform3(prop::array::uniform3(arb_cell())),
        arb_player(),
    )
        .prop_map(|(grid, turn)| TicTacToeState::new(grid, turn))
}

/// A position reached from the empty board by random alternating play.
fn arb_reachable_state(min_plies: usize) -> impl Strategy<Value = TicTacToeState> {
    (any::<u64>(), min_plies..=9usize).prop_map(|(seed, plies)| {
        RandomPlayout::new(SeededRandomGenerator::new(seed))
            .play_plies(&TicTacToeState::default(), plies)
    })
}

fn count(board: &TicTacToeState, mark: Cell) -> usize {
    board.grid().iter().flatten().filter(|&&c| c == mark).count()
}

fn has_line(board: &TicTacToeState, mark: Cell) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&(r, c)| board.cell(r, c) == Some(mark)))
}

// =============================================================================
// Rules
// =============================================================================

proptest! {
    #[test]
    fn utility_follows_priority_order(board in arb_grid_state()) {
        let expected = if has_line(&board, Cell::PlayerA) {
            Some(1)
        } else if has_line(&board, Cell::PlayerB) {
            Some(-1)
        } else if count(&board, Cell::Empty) == 0 {
            Some(0)
        } else {
            None
        };
        prop_assert_eq!(utility(&board), expected);
    }

    #[test]
    fn rules_are_idempotent(board in arb_grid_state()) {
        prop_assert_eq!(utility(&board), utility(&board));
        prop_assert_eq!(legal_actions(&board), legal_actions(&board));
    }

    #[test]
    fn legal_actions_cover_empty_cells_in_row_major_order(board in arb_grid_state()) {
        let actions = legal_actions(&board);
        prop_assert_eq!(actions.len(), count(&board, Cell::Empty));
        for action in &actions {
            prop_assert_eq!(board.cell(action.row(), action.col()), Some(Cell::Empty));
            prop_assert_eq!(action.player(), board.turn());
        }
        for pair in actions.windows(2) {
            prop_assert!((pair[0].row(), pair[0].col()) < (pair[1].row(), pair[1].col()));
        }
    }

    #[test]
    fn apply_never_mutates_and_flips_turn(
        board in arb_grid_state(),
        row in 0usize..3,
        col in 0usize..3,
        player in arb_player(),
    ) {
        let before = board.clone();
        let action = TicTacToeAction::new(row, col, player).unwrap();
        let after = apply(&board, &action);

        prop_assert_eq!(&board, &before);
        prop_assert_eq!(after.turn(), board.turn().opponent());
        for r in 0..3 {
            for c in 0..3 {
                let expected = if (r, c) == (row, col) && board.cell(r, c) == Some(Cell::Empty) {
                    Cell::from(player)
                } else {
                    board.cell(r, c).unwrap()
                };
                prop_assert_eq!(after.cell(r, c), Some(expected));
            }
        }
    }

    #[test]
    fn reachable_states_keep_piece_counts(board in arb_reachable_state(0)) {
        let a = count(&board, Cell::PlayerA);
        let b = count(&board, Cell::PlayerB);
        match board.turn() {
            Player::PlayerA => prop_assert_eq!(a, b),
            Player::PlayerB => prop_assert_eq!(a, b + 1),
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn decision_picks_first_optimal_action(board in arb_reachable_state(1)) {
        prop_assume!(!legal_actions(&board).is_empty());

        let (action, value) = minimax_decision(&board).unwrap();
        let maximizing = board.turn() == Player::PlayerA;
        let expected = if maximizing { max_value(&board) } else { min_value(&board) };
        if utility(&board).is_none() {
            prop_assert_eq!(value, expected);
        }

        let scored = evaluate_actions(&board);
        let position = scored.iter().position(|(a, _)| *a == action).unwrap();
        prop_assert_eq!(scored[position].1, value);
        for (_, earlier) in &scored[..position] {
            if maximizing {
                prop_assert!(*earlier < value);
            } else {
                prop_assert!(*earlier > value);
            }
        }
        for (_, other) in &scored {
            if maximizing {
                prop_assert!(*other <= value);
            } else {
                prop_assert!(*other >= value);
            }
        }
    }

    #[test]
    fn decision_works_on_unreachable_grids(board in arb_grid_state()) {
        let actions = legal_actions(&board);
        match minimax_decision(&board) {
            Ok((action, value)) => {
                prop_assert!(actions.contains(&action));
                prop_assert!((-1..=1).contains(&value));
            }
            Err(_) => prop_assert!(actions.is_empty()),
        }
    }

    #[test]
    fn optimal_play_realizes_the_minimax_value(board in arb_reachable_state(1)) {
        prop_assume!(utility(&board).is_none());

        let (_, value) = minimax_decision(&board).unwrap();
        let mut current = board;
        while current.utility().is_none() {
            let (action, _) = minimax_decision(&current).unwrap();
            current = current.perform_move(&action);
        }
        prop_assert_eq!(current.utility(), Some(value));
    }

    #[test]
    fn recorded_search_agrees_with_decision(board in arb_reachable_state(2)) {
        prop_assume!(!legal_actions(&board).is_empty());

        let (action, value) = minimax_decision(&board).unwrap();
        let mut search = MinimaxSearch::from_board(board);
        let decision = search.run().unwrap();
        prop_assert_eq!(decision.action, action);
        prop_assert_eq!(decision.value, value);

        let stats = search.get_stats();
        prop_assert_eq!(search.get_tree().unwrap().nodes().count(), stats.nodes);
        prop_assert!(stats.terminal_nodes < stats.nodes);
        prop_assert!(stats.distinct_positions <= stats.nodes);

        let line = search.principal_variation().unwrap();
        prop_assert_eq!(line.first(), Some(&action));
    }
}
