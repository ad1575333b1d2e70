use crate::board::Board;
use crate::error::{MinimaxError, Result};
use crate::minimax::{fold_values, select_best};
use crate::search_node::SearchNode;
use ego_tree::{NodeId, NodeRef, Tree};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Initial node capacity reserved for the recorded tree.
pub const DEFAULT_NODE_CAPACITY: usize = 4096;

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States evaluated, the root included.
    pub nodes: usize,
    /// States where the search stopped because the utility was defined.
    pub terminal_nodes: usize,
    /// The deepest ply reached below the root.
    pub max_depth: usize,
    /// Distinct positions among the evaluated states.
    pub distinct_positions: usize,
}

/// The move chosen by a search, together with its minimax value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision<M> {
    pub action: M,
    pub value: i32,
}

/// Exhaustive minimax search that can keep the explored game tree around.
///
/// It reaches the same decision as [`crate::minimax::minimax_decision`], tie-break
/// included, but also records statistics and, when enabled, every evaluated state
/// with its minimax value so the result can be inspected afterwards.
pub struct MinimaxSearch<T: Board> {
    board: T,
    record_tree: bool,
    node_capacity: usize,
    tree: Option<Tree<SearchNode<T>>>,
    stats: SearchStats,
    positions: HashSet<u128>,
}

impl<T: Board + Default> Default for MinimaxSearch<T> {
    fn default() -> Self {
        MinimaxSearchBuilder::new(T::default()).build()
    }
}

/// A builder for creating instances of `MinimaxSearch`.
pub struct MinimaxSearchBuilder<T: Board> {
    board: T,
    record_tree: bool,
    node_capacity: usize,
}

impl<T: Board> MinimaxSearchBuilder<T> {
    /// Creates a new builder with the given initial board state.
    pub fn new(board: T) -> Self {
        Self {
            board,
            record_tree: true,
            node_capacity: DEFAULT_NODE_CAPACITY,
        }
    }

    /// Enables or disables recording of the explored tree.
    pub fn with_tree_recording(mut self, record_tree: bool) -> Self {
        self.record_tree = record_tree;
        self
    }

    /// Sets the number of nodes reserved up front for the recorded tree.
    pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    pub fn build(self) -> MinimaxSearch<T> {
        MinimaxSearch {
            board: self.board,
            record_tree: self.record_tree,
            node_capacity: self.node_capacity,
            tree: None,
            stats: SearchStats::default(),
            positions: HashSet::new(),
        }
    }
}

impl<T: Board> MinimaxSearch<T> {
    /// Returns a new builder for `MinimaxSearch`.
    pub fn builder(board: T) -> MinimaxSearchBuilder<T> {
        MinimaxSearchBuilder::new(board)
    }

    /// Creates a search with default settings.
    pub fn from_board(board: T) -> Self {
        MinimaxSearchBuilder::new(board).build()
    }

    pub fn get_board(&self) -> &T {
        &self.board
    }

    /// Returns the statistics of the last run.
    pub fn get_stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns the tree recorded by the last run, if recording is enabled.
    pub fn get_tree(&self) -> Option<&Tree<SearchNode<T>>> {
        self.tree.as_ref()
    }

    pub fn get_root(&self) -> Option<NodeRef<'_, SearchNode<T>>> {
        self.tree.as_ref().map(|tree| tree.root())
    }

    /// Searches the whole game tree below the board and picks the optimal move.
    ///
    /// Every call starts from scratch, discarding the tree and statistics of a previous run.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> Result<Decision<T::Move>> {
        let moves = self.board.get_available_moves();
        if moves.is_empty() {
            return Err(MinimaxError::NoLegalActions);
        }

        let root = self.board.clone();
        self.stats = SearchStats::default();
        self.positions.clear();
        self.tree = self
            .record_tree
            .then(|| Tree::with_capacity(SearchNode::new(root.clone(), None, 0), self.node_capacity));
        let root_id = self.tree.as_ref().map(|tree| tree.root().id());
        self.visit(&root, 0);

        let maximizing = root.get_current_player().is_maximizing();
        let mut scored = Vec::with_capacity(moves.len());
        for b_move in moves {
            let next = root.perform_move(&b_move);
            let value = self.search(next, Some(b_move.clone()), root_id, 1, !maximizing);
            scored.push((b_move, value));
        }

        let (action, value) =
            select_best(scored, maximizing).ok_or(MinimaxError::NoLegalActions)?;
        self.set_value(root_id, value);
        self.stats.distinct_positions = self.positions.len();

        debug!(
            action = ?action,
            value,
            nodes = self.stats.nodes,
            terminal_nodes = self.stats.terminal_nodes,
            max_depth = self.stats.max_depth,
            distinct_positions = self.stats.distinct_positions,
            "minimax search finished"
        );
        Ok(Decision { action, value })
    }

    /// Returns the line of play where both sides keep choosing their first optimal move.
    ///
    /// `None` until a run with tree recording has completed.
    pub fn principal_variation(&self) -> Option<Vec<T::Move>> {
        let mut node = self.get_root()?;
        node.value().value?;

        let mut line = Vec::new();
        while let Some(value) = node.value().value {
            let Some(next) = node
                .children()
                .find(|child| child.value().value == Some(value))
            else {
                break;
            };
            if let Some(b_move) = &next.value().prev_move {
                line.push(b_move.clone());
            }
            node = next;
        }
        Some(line)
    }

    fn search(
        &mut self,
        board: T,
        prev_move: Option<T::Move>,
        parent: Option<NodeId>,
        height: usize,
        maximizing: bool,
    ) -> i32 {
        self.visit(&board, height);
        let node_id = self.record(parent, &board, prev_move, height);

        let value = match board.utility() {
            Some(utility) => {
                self.stats.terminal_nodes += 1;
                utility
            }
            None => fold_values(
                board.get_available_moves().into_iter().map(|b_move| {
                    let next = board.perform_move(&b_move);
                    self.search(next, Some(b_move), node_id, height + 1, !maximizing)
                }),
                maximizing,
            ),
        };

        self.set_value(node_id, value);
        value
    }

    fn visit(&mut self, board: &T, height: usize) {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(height);
        self.positions.insert(board.get_hash());
    }

    fn record(
        &mut self,
        parent: Option<NodeId>,
        board: &T,
        prev_move: Option<T::Move>,
        height: usize,
    ) -> Option<NodeId> {
        let tree = self.tree.as_mut()?;
        let mut parent = tree.get_mut(parent?)?;
        Some(
            parent
                .append(SearchNode::new(board.clone(), prev_move, height))
                .id(),
        )
    }

    fn set_value(&mut self, node_id: Option<NodeId>, value: i32) {
        if let (Some(tree), Some(node_id)) = (self.tree.as_mut(), node_id) {
            if let Some(mut node) = tree.get_mut(node_id) {
                node.value().value = Some(value);
            }
        }
    }
}
