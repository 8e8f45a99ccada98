use std::fmt;

use crate::error::GameError;
use crate::types::*;

/// Default board side length.
pub const DEFAULT_SIZE: usize = 5;

/// A snapshot of an Isolation game.
///
/// States are values: `forecast` hands back a new state and leaves the
/// receiver untouched, so a search can hold any number of hypothetical
/// futures without aliasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    width: usize,
    height: usize,
    /// Row-major, `height * width` entries.
    cells: Vec<Cell>,
    active: PlayerId,
    last_moves: [Option<Move>; 2],
    move_count: u32,
}

impl Default for GridState {
    fn default() -> Self {
        Self::empty(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl GridState {
    /// Empty board of the given size with player one to move.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }
        Ok(Self::empty(width, height))
    }

    fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            active: PlayerId::One,
            last_moves: [None; 2],
            move_count: 0,
        }
    }

    /// Build a mid-game position from a textual diagram, one string per row.
    ///
    /// Cell characters:
    /// - `.` or `0`: empty
    /// - `1` / `2`: the current location of player one / two
    /// - `x` / `o`: a cell player one / two occupied earlier
    ///
    /// Whitespace and `|` separators are ignored. The move count is derived
    /// from the number of occupied cells, and `active` must agree with it.
    pub fn from_diagram(rows: &[&str], active: PlayerId) -> Result<Self, GameError> {
        let parsed: Vec<Vec<char>> = rows
            .iter()
            .map(|r| r.chars().filter(|c| !c.is_whitespace() && *c != '|').collect())
            .collect();

        let height = parsed.len();
        let width = parsed.first().map(|r| r.len()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }

        let mut state = Self::empty(width, height);
        let mut marks = [0u32; 2];

        for (row, chars) in parsed.iter().enumerate() {
            if chars.len() != width {
                return Err(invalid(format!(
                    "row {row} has {} cells, expected {width}",
                    chars.len()
                )));
            }
            for (col, &ch) in chars.iter().enumerate() {
                let (cell, location) = match ch {
                    '.' | '0' => (Cell::Empty, None),
                    '1' => (Cell::Occupied(PlayerId::One), Some(PlayerId::One)),
                    '2' => (Cell::Occupied(PlayerId::Two), Some(PlayerId::Two)),
                    'x' | 'X' => (Cell::Occupied(PlayerId::One), None),
                    'o' | 'O' => (Cell::Occupied(PlayerId::Two), None),
                    other => {
                        return Err(invalid(format!(
                            "unexpected character '{other}' at ({row}, {col})"
                        )));
                    }
                };
                if let Cell::Occupied(p) = cell {
                    marks[p.idx()] += 1;
                }
                if let Some(p) = location {
                    if state.last_moves[p.idx()].is_some() {
                        return Err(invalid(format!("{p} has more than one location")));
                    }
                    state.last_moves[p.idx()] = Some(Move::new(row, col));
                }
                state.cells[row * width + col] = cell;
            }
        }

        for p in PlayerId::ALL {
            if marks[p.idx()] > 0 && state.last_moves[p.idx()].is_none() {
                return Err(invalid(format!("{p} has marks but no current location")));
            }
        }

        let expected_active = if marks[0] == marks[1] {
            PlayerId::One
        } else if marks[0] == marks[1] + 1 {
            PlayerId::Two
        } else {
            return Err(invalid(format!(
                "mark counts {} and {} cannot arise from alternating play",
                marks[0], marks[1]
            )));
        };
        if expected_active != active {
            return Err(invalid(format!(
                "{active} cannot be to move with {} and {} marks",
                marks[0], marks[1]
            )));
        }

        state.active = active;
        state.move_count = marks[0] + marks[1];
        Ok(state)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[inline]
    pub fn inactive_player(&self) -> PlayerId {
        self.active.other()
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Most recent placement of `player`, `None` before their first move.
    #[inline]
    pub fn last_move(&self, player: PlayerId) -> Option<Move> {
        self.last_moves[player.idx()]
    }

    #[inline]
    pub fn in_bounds(&self, mv: Move) -> bool {
        mv.row < self.height && mv.col < self.width
    }

    /// Cell contents, `None` when off the board.
    #[inline]
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        if self.in_bounds(mv) {
            Some(self.cells[mv.row * self.width + mv.col])
        } else {
            None
        }
    }

    #[inline]
    fn is_open(&self, mv: Move) -> bool {
        self.cell(mv) == Some(Cell::Empty)
    }

    /// True when `to` is empty and reachable from `from` by a straight
    /// slide (orthogonal or diagonal) over empty cells only.
    pub fn is_legal_move(&self, to: Move, from: Move) -> bool {
        if !self.is_open(to) {
            return false;
        }
        let dr = to.row as isize - from.row as isize;
        let dc = to.col as isize - from.col as isize;
        if (dr == 0 && dc == 0) || (dr != 0 && dc != 0 && dr.abs() != dc.abs()) {
            return false;
        }

        let dir = (dr.signum(), dc.signum());
        let mut cur = from;
        while let Some(next) = cur.step(dir) {
            if !self.is_open(next) {
                return false;
            }
            if next == to {
                return true;
            }
            cur = next;
        }
        false
    }

    /// Legality for `player` under the full rules, including the opening
    /// placements where any empty cell is allowed.
    pub fn is_legal_for(&self, player: PlayerId, mv: Move) -> bool {
        match self.slide_origin(player) {
            None => self.is_open(mv),
            Some(from) => self.is_legal_move(mv, from),
        }
    }

    /// The cell slides start from, or `None` while free placement applies.
    fn slide_origin(&self, player: PlayerId) -> Option<Move> {
        if self.move_count < 2 {
            None
        } else {
            self.last_move(player)
        }
    }

    /// All legal destinations for `player`.
    ///
    /// During the first two moves of the game every empty cell is legal.
    /// After that each of the eight directions is walked outward from the
    /// player's last placement until the first occupied or off-board cell.
    pub fn legal_moves_for(&self, player: PlayerId) -> Vec<Move> {
        let Some(from) = self.slide_origin(player) else {
            return self.blank_cells();
        };

        let mut out = Vec::with_capacity(4 * (self.width + self.height));
        for dir in DIRECTIONS {
            let mut cur = from;
            while let Some(next) = cur.step(dir).filter(|&m| self.is_open(m)) {
                out.push(next);
                cur = next;
            }
        }
        out
    }

    /// Whether `player` has at least one legal move, without collecting them.
    pub fn has_moves_for(&self, player: PlayerId) -> bool {
        match self.slide_origin(player) {
            None => self.cells.iter().any(|c| c.is_empty()),
            Some(from) => DIRECTIONS
                .iter()
                .any(|&dir| from.step(dir).is_some_and(|m| self.is_open(m))),
        }
    }

    /// Legal moves of the player to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active)
    }

    /// Legal moves of the player who just moved.
    pub fn opponent_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active.other())
    }

    /// New state with `mv` placed for the active player and the turn passed.
    ///
    /// `mv` must be legal for the active player; callers validate against
    /// [`legal_moves`](Self::legal_moves) first. Use
    /// [`try_forecast`](Self::try_forecast) for unvalidated input.
    pub fn forecast(&self, mv: Move) -> GridState {
        debug_assert!(
            self.is_legal_for(self.active, mv),
            "forecast called with illegal move {mv}"
        );
        let mut next = self.clone();
        next.apply(mv);
        next
    }

    /// Checked variant of [`forecast`](Self::forecast).
    pub fn try_forecast(&self, mv: Move) -> Result<GridState, GameError> {
        if !self.in_bounds(mv) {
            return Err(GameError::OutOfBounds {
                mv,
                width: self.width,
                height: self.height,
            });
        }
        if !self.is_open(mv) {
            return Err(GameError::Occupied { mv });
        }
        if !self.is_legal_for(self.active, mv) {
            return Err(GameError::IllegalMove {
                mv,
                player: self.active,
            });
        }
        let mut next = self.clone();
        next.apply(mv);
        Ok(next)
    }

    fn apply(&mut self, mv: Move) {
        let idx = mv.row * self.width + mv.col;
        self.cells[idx] = Cell::Occupied(self.active);
        self.last_moves[self.active.idx()] = Some(mv);
        self.active = self.active.other();
        self.move_count += 1;
    }

    /// The player to move is stuck, so the game is over.
    pub fn is_terminal(&self) -> bool {
        !self.has_moves_for(self.active)
    }

    /// `player` has won: the side to move has no legal move and it is not
    /// `player`.
    pub fn is_winner(&self, player: PlayerId) -> bool {
        player == self.inactive_player() && self.is_terminal()
    }

    /// `player` has lost: it is `player`'s turn and no legal move remains.
    pub fn is_loser(&self, player: PlayerId) -> bool {
        player == self.active && self.is_terminal()
    }

    pub fn blank_cells(&self) -> Vec<Move> {
        self.cells_matching(Cell::Empty)
    }

    pub fn cells_occupied_by(&self, player: PlayerId) -> Vec<Move> {
        self.cells_matching(Cell::Occupied(player))
    }

    fn cells_matching(&self, target: Cell) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == target)
            .map(|(i, _)| Move::new(i / self.width, i % self.width))
            .collect()
    }
}

fn invalid(message: String) -> GameError {
    GameError::InvalidPosition { message }
}

/// Renders `0` for empty cells, the player digit on each player's current
/// location and `X` on every other occupied cell.
impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let here = Move::new(row, col);
                let ch = match self.cells[row * self.width + col] {
                    Cell::Empty => '0',
                    Cell::Occupied(p) if self.last_move(p) == Some(here) => p.symbol(),
                    Cell::Occupied(_) => 'X',
                };
                if col > 0 {
                    f.write_str(" | ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
