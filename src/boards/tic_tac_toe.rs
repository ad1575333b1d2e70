use crate::board::{Board, Player};
use crate::error::{MinimaxError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Side length of the grid.
pub const SIZE: usize = 3;

/// The eight winning lines: three rows, three columns and the two diagonals.
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

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::PlayerA),
            Cell::PlayerB => Some(Player::PlayerB),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'X' | 'x' => Ok(Cell::PlayerA),
            'O' | 'o' => Ok(Cell::PlayerB),
            '-' | '_' | '.' => Ok(Cell::Empty),
            other => Err(MinimaxError::InvalidCell(other)),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::PlayerA => Cell::PlayerA,
            Player::PlayerB => Cell::PlayerB,
        }
    }
}

/// An immutable snapshot of a tic-tac-toe game: the grid and whose turn it is.
///
/// Equality is positional: two states are equal iff every cell and the turn match.
/// The usual piece-count invariant of alternating play is not enforced, any grid is
/// accepted and evaluated purely on its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeState {
    grid: [[Cell; SIZE]; SIZE],
    turn: Player,
}

impl TicTacToeState {
    pub fn new(grid: [[Cell; SIZE]; SIZE], turn: Player) -> Self {
        Self { grid, turn }
    }

    /// Builds a state from dynamically sized rows, rejecting anything that is not 3x3.
    pub fn from_rows(rows: &[Vec<Cell>], turn: Player) -> Result<Self> {
        if rows.len() != SIZE {
            return Err(MinimaxError::InvalidRowCount(rows.len()));
        }

        let mut grid = [[Cell::Empty; SIZE]; SIZE];
        for (row, cells) in rows.iter().enumerate() {
            grid[row] = cells
                .as_slice()
                .try_into()
                .map_err(|_| MinimaxError::InvalidRowLength {
                    row,
                    len: cells.len(),
                })?;
        }
        Ok(Self::new(grid, turn))
    }

    /// Parses a compact textual grid such as `"O--/---/--X"`.
    ///
    /// Rows are separated by `/` or newlines. `X` marks [`Player::PlayerA`], `O` marks
    /// [`Player::PlayerB`], and `-`, `_` or `.` mark an empty cell. Whitespace and `|`
    /// inside a row are ignored.
    pub fn parse(text: &str, turn: Player) -> Result<Self> {
        let rows = text
            .split(['/', '\n'])
            .map(|row| {
                row.chars()
                    .filter(|c| !c.is_whitespace() && *c != '|')
                    .map(Cell::from_symbol)
                    .collect::<Result<Vec<_>>>()
            })
            .filter(|row| !matches!(row, Ok(cells) if cells.is_empty()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(&rows, turn)
    }

    pub fn grid(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.grid
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the cell at the given coordinates, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(|cell| !cell.is_empty())
    }

    fn has_line(&self, mark: Cell) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| self.grid[row][col] == mark))
    }
}

impl Default for TicTacToeState {
    /// Creates an empty grid with [`Player::PlayerA`] to move.
    fn default() -> Self {
        Self::new([[Cell::Empty; SIZE]; SIZE], Player::PlayerA)
    }
}

/// A candidate move: the acting player placing a mark at `(row, col)`.
///
/// Equality and hashing only look at the coordinates; the player is informational.
/// Deserialization goes through [`TicTacToeAction::new`], so coordinates are bounds checked.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TicTacToeAction {
    row: usize,
    col: usize,
    player: Player,
}

#[derive(Deserialize)]
#[serde(rename = "TicTacToeAction")]
struct RawAction {
    row: usize,
    col: usize,
    player: Player,
}

impl<'de> Deserialize<'de> for TicTacToeAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawAction::deserialize(deserializer)?;
        TicTacToeAction::new(raw.row, raw.col, raw.player).map_err(serde::de::Error::custom)
    }
}

impl TicTacToeAction {
    pub fn new(row: usize, col: usize, player: Player) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(MinimaxError::OutOfBounds { row, col });
        }
        Ok(Self { row, col, player })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn player(&self) -> Player {
        self.player
    }
}

impl PartialEq for TicTacToeAction {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Eq for TicTacToeAction {}

impl Hash for TicTacToeAction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

/// Returns `None` while the game is ongoing, `Some(1)` if [`Player::PlayerA`] has a
/// line, `Some(-1)` if [`Player::PlayerB`] has one and `Some(0)` for a full board.
///
/// A grid with lines for both players counts as a win for [`Player::PlayerA`].
pub fn utility(state: &TicTacToeState) -> Option<i32> {
    if state.has_line(Cell::PlayerA) {
        Some(1)
    } else if state.has_line(Cell::PlayerB) {
        Some(-1)
    } else if state.is_full() {
        Some(0)
    } else {
        None
    }
}

/// Returns one action per empty cell, in row-major order, for the player to move.
pub fn legal_actions(state: &TicTacToeState) -> Vec<TicTacToeAction> {
    let mut actions = Vec::with_capacity(SIZE * SIZE);
    for (row, cells) in state.grid.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                actions.push(TicTacToeAction {
                    row,
                    col,
                    player: state.turn,
                });
            }
        }
    }
    actions
}

/// Returns the successor state. The mark is only placed if the target cell is empty,
/// the turn passes to the opponent either way.
pub fn apply(state: &TicTacToeState, action: &TicTacToeAction) -> TicTacToeState {
    let mut grid = state.grid;
    match grid.get_mut(action.row).and_then(|r| r.get_mut(action.col)) {
        Some(target) if target.is_empty() => *target = Cell::from(action.player),
        _ => debug!(
            row = action.row,
            col = action.col,
            "target cell not empty, placement ignored"
        ),
    }
    TicTacToeState::new(grid, state.turn.opponent())
}

impl Board for TicTacToeState {
    type Move = TicTacToeAction;

    fn get_current_player(&self) -> Player {
        self.turn
    }

    fn utility(&self) -> Option<i32> {
        utility(self)
    }

    fn get_available_moves(&self) -> Vec<Self::Move> {
        legal_actions(self)
    }

    fn perform_move(&self, b_move: &Self::Move) -> Self {
        apply(self, b_move)
    }

    fn get_hash(&self) -> u128 {
        let mut hash = match self.turn {
            Player::PlayerA => 0,
            Player::PlayerB => 1,
        };
        for (i, &cell) in self.grid.iter().flatten().enumerate() {
            let cell_value = match cell {
                Cell::Empty => 0,
                Cell::PlayerA => 1,
                Cell::PlayerB => 2,
            };
            hash += cell_value * 2 * 3u128.pow(i as u32);
        }
        hash
    }
}
