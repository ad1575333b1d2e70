//! Games shipped with the library, each implementing the `Board` trait.

/// Tic-tac-toe state, actions and rules.
pub mod tic_tac_toe;
