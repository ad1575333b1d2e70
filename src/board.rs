use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The central trait of the library, defining the interface for a game state.
///
/// The minimax engine only talks to a game through this trait. Implementations
/// must treat `self` as an immutable snapshot: `perform_move` returns the
/// successor state and leaves the receiver untouched.
pub trait Board: Clone {
    /// The type representing a move in the game.
    type Move: Clone + Debug;

    /// Returns the player whose turn it is to make a move.
    fn get_current_player(&self) -> Player;

    /// Returns the terminal utility of the state from the maximizing player's view:
    /// `Some(1)` when [`Player::PlayerA`] has won, `Some(-1)` when [`Player::PlayerB`]
    /// has won, `Some(0)` for a draw and `None` while the game is still going.
    fn utility(&self) -> Option<i32>;

    /// Returns a list of all legal moves available from the current state.
    ///
    /// The order is significant: the engine breaks ties in favour of the first move.
    fn get_available_moves(&self) -> Vec<Self::Move>;

    /// Applies a given move and returns the resulting state.
    fn perform_move(&self, b_move: &Self::Move) -> Self;

    /// Returns a hash value for the current board state.
    fn get_hash(&self) -> u128;

    /// Returns the current outcome of the game.
    fn get_outcome(&self) -> GameOutcome {
        GameOutcome::from_utility(self.utility())
    }
}

/// The two sides of a zero-sum game. `PlayerA` maximizes the utility, `PlayerB` minimizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The maximizing player (moves first from an empty board).
    PlayerA,
    /// The minimizing player.
    PlayerB,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }

    /// Whether this player picks the highest-valued move.
    pub fn is_maximizing(self) -> bool {
        self == Player::PlayerA
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress,
    /// The given player has won.
    Win(Player),
    /// The game has ended in a draw.
    Draw,
}

impl GameOutcome {
    /// Converts a utility value into an outcome. Any positive value is a win for
    /// [`Player::PlayerA`], any negative value a win for [`Player::PlayerB`].
    pub fn from_utility(utility: Option<i32>) -> Self {
        match utility {
            None => GameOutcome::InProgress,
            Some(0) => GameOutcome::Draw,
            Some(v) if v > 0 => GameOutcome::Win(Player::PlayerA),
            Some(_) => GameOutcome::Win(Player::PlayerB),
        }
    }

    /// Converts the outcome back into a utility value.
    pub fn utility(self) -> Option<i32> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Draw => Some(0),
            GameOutcome::Win(Player::PlayerA) => Some(1),
            GameOutcome::Win(Player::PlayerB) => Some(-1),
        }
    }

    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}
