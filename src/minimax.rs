use crate::board::Board;
use crate::error::{MinimaxError, Result};
use tracing::{debug, instrument};

/// Returns the minimax value of a state where the maximizing player is to move.
///
/// Terminal states return their utility. Otherwise this is the largest
/// [`min_value`] among the successors, or `i32::MIN` if a non-terminal state has no moves.
pub fn max_value<T: Board>(board: &T) -> i32 {
    if let Some(utility) = board.utility() {
        return utility;
    }

    fold_values(
        board
            .get_available_moves()
            .iter()
            .map(|b_move| min_value(&board.perform_move(b_move))),
        true,
    )
}

/// Returns the minimax value of a state where the minimizing player is to move.
///
/// Terminal states return their utility. Otherwise this is the smallest
/// [`max_value`] among the successors, or `i32::MAX` if a non-terminal state has no moves.
pub fn min_value<T: Board>(board: &T) -> i32 {
    if let Some(utility) = board.utility() {
        return utility;
    }

    fold_values(
        board
            .get_available_moves()
            .iter()
            .map(|b_move| max_value(&board.perform_move(b_move))),
        false,
    )
}

/// Scores every available move, in the order the board generates them.
///
/// Each successor is valued from the opponent's side: with [`min_value`] when the
/// mover maximizes and with [`max_value`] when it minimizes.
pub fn evaluate_actions<T: Board>(board: &T) -> Vec<(T::Move, i32)> {
    let maximizing = board.get_current_player().is_maximizing();
    board
        .get_available_moves()
        .into_iter()
        .map(|b_move| {
            let next = board.perform_move(&b_move);
            let value = if maximizing {
                min_value(&next)
            } else {
                max_value(&next)
            };
            (b_move, value)
        })
        .collect()
}

/// Picks the optimal move for the player to move, together with its minimax value.
///
/// Among equally valued moves the first one in generation order wins.
/// Fails with [`MinimaxError::NoLegalActions`] when the board offers no moves.
#[instrument(level = "debug", skip(board))]
pub fn minimax_decision<T: Board>(board: &T) -> Result<(T::Move, i32)> {
    let maximizing = board.get_current_player().is_maximizing();
    let best = select_best(evaluate_actions(board), maximizing)
        .ok_or(MinimaxError::NoLegalActions)?;
    debug!(action = ?best.0, value = best.1, "selected action");
    Ok(best)
}

/// Folds successor values into the value of their parent: the running maximum from
/// `i32::MIN` for the maximizing side, the running minimum from `i32::MAX` otherwise.
pub(crate) fn fold_values(values: impl IntoIterator<Item = i32>, maximizing: bool) -> i32 {
    if maximizing {
        values.into_iter().fold(i32::MIN, i32::max)
    } else {
        values.into_iter().fold(i32::MAX, i32::min)
    }
}

/// Returns the first pair holding the extreme value, scanning in order.
pub(crate) fn select_best<M>(
    scored: impl IntoIterator<Item = (M, i32)>,
    maximizing: bool,
) -> Option<(M, i32)> {
    let mut best: Option<(M, i32)> = None;
    for (b_move, value) in scored {
        let improves = match &best {
            None => true,
            Some((_, best_value)) if maximizing => value > *best_value,
            Some((_, best_value)) => value < *best_value,
        };
        if improves {
            best = Some((b_move, value));
        }
    }
    best
}
