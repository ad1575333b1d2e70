use crate::board::{Board, GameOutcome, Player};

/// Represents a single node in the recorded minimax tree.
///
/// Each node stores the game state, the move that produced it and the value the
/// search assigned to it once all of its children were evaluated.
#[derive(Debug, Clone)]
pub struct SearchNode<T: Board> {
    /// The game state that this node represents.
    pub board: T,
    /// The move that led to this node's state from its parent. `None` for the root node.
    pub prev_move: Option<T::Move>,
    /// The number of plies between the root and this node.
    pub height: usize,
    /// The player whose turn it is in this node's game state.
    pub current_player: Player,
    /// The terminal utility of the state, if the game is over here.
    pub utility: Option<i32>,
    /// The minimax value, filled in after the subtree has been searched.
    pub value: Option<i32>,
}

impl<T: Board> SearchNode<T> {
    pub fn new(board: T, prev_move: Option<T::Move>, height: usize) -> Self {
        let current_player = board.get_current_player();
        let utility = board.utility();
        SearchNode {
            board,
            prev_move,
            height,
            current_player,
            utility,
            value: None,
        }
    }

    /// Whether the search stopped at this node.
    pub fn is_terminal(&self) -> bool {
        self.utility.is_some()
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from_utility(self.utility)
    }
}
