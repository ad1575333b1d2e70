//! Random playouts. Outside the minimax engine; they exist to sample positions
//! reachable from a start state by legal alternating play.

use crate::board::Board;
use crate::random::RandomGenerator;

/// Plays uniformly random legal moves, for sampling positions reachable by
/// alternating play.
pub struct RandomPlayout<K: RandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> RandomPlayout<K> {
    pub fn new(random: K) -> Self {
        Self { random }
    }

    /// Plays until the game is over and returns every state visited, the start included.
    pub fn play<T: Board>(&mut self, board: &T) -> Vec<T> {
        let mut current = board.clone();
        let mut trajectory = vec![current.clone()];
        while let Some(next) = self.step(&current) {
            trajectory.push(next.clone());
            current = next;
        }
        trajectory
    }

    /// Plays at most `plies` moves, stopping early when the game ends.
    pub fn play_plies<T: Board>(&mut self, board: &T, plies: usize) -> T {
        let mut board = board.clone();
        for _ in 0..plies {
            match self.step(&board) {
                Some(next) => board = next,
                None => break,
            }
        }
        board
    }

    fn step<T: Board>(&mut self, board: &T) -> Option<T> {
        if board.utility().is_some() {
            return None;
        }
        let moves = board.get_available_moves();
        let b_move = self.random.choose(&moves)?;
        Some(board.perform_move(b_move))
    }
}
