//! A small and simple library for exhaustive minimax search.
//!
//! This library finds the game-theoretically optimal move of a two-player, zero-sum,
//! perfect-information game by walking its entire game tree. The engine is written
//! against the [`board::Board`] trait and ships with a tic-tac-toe implementation.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::board::Player;
//! use minimax_lib::boards::tic_tac_toe::TicTacToeState;
//! use minimax_lib::minimax::minimax_decision;
//! use minimax_lib::search::MinimaxSearch;
//!
//! // PlayerA opened in a corner, PlayerB is to move
//! let board = TicTacToeState::parse("---/---/--X", Player::PlayerB).unwrap();
//!
//! // Pick the optimal reply directly
//! let (action, value) = minimax_decision(&board).unwrap();
//! assert_eq!((action.row(), action.col()), (1, 1));
//! assert_eq!(value, 0);
//!
//! // Or run a search that keeps the explored tree around
//! let mut search = MinimaxSearch::builder(board)
//!     .with_tree_recording(true)
//!     .build();
//! let decision = search.run().unwrap();
//! assert_eq!(decision.action, action);
//!
//! println!("The best move is: {:?}", decision.action);
//! println!("Expected line of play: {:?}", search.principal_variation());
//! ```

/// Contains the `Board` trait and related enums that define the interface for a game.
pub mod board;
/// Contains pre-made implementations of the `Board` trait.
pub mod boards;
/// Errors returned by state construction and search.
pub mod error;
/// The minimax value functions and the decision rule.
pub mod minimax;
/// Random playouts over any `Board`.
pub mod playout;
/// Contains traits and implementations for random number generation.
pub mod random;
/// A minimax search that records statistics and the explored game tree.
pub mod search;
/// Contains the `SearchNode` struct, which represents a node in the recorded tree.
pub mod search_node;

pub use error::{MinimaxError, Result};
