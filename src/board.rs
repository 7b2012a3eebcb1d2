//! Square board shared by both games.
//!
//! A [`Board`] is a flat `Vec<Cell>` indexed row-major. Coordinates are signed
//! so that the toroidal variant can accept raw, un-wrapped positions and
//! normalize them on lookup. On a bounded board anything off the grid simply
//! has no cell.

use std::collections::VecDeque;
use std::fmt;

use crate::constants::ORTHOGONAL;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The color with the strictly higher score, or `None` on a tie.
    pub fn leader(black: usize, white: usize) -> Option<Color> {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Occupancy of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[inline]
    pub fn is(self, color: Color) -> bool {
        self.color() == Some(color)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A (row, col) coordinate. May lie outside the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shifted position, or `None` if it leaves the `i32` range.
    #[inline]
    pub fn checked_offset(self, dr: i32, dc: i32) -> Option<Pos> {
        Some(Pos::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
    }

    /// True if `other` is exactly one orthogonal step away, comparing the raw
    /// (un-normalized) coordinates.
    pub fn is_orthogonal_step(self, other: Pos) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 1 && dc == 0) || (dr == 0 && dc == 1)
    }

    /// Manhattan distance to the geometric center of a `size`x`size` grid.
    pub fn center_distance(self, size: usize) -> f64 {
        let center = (size as f64 - 1.0) / 2.0;
        (self.row as f64 - center).abs() + (self.col as f64 - center).abs()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Edge behavior of a board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// Off-grid coordinates do not exist.
    #[default]
    Bounded,
    /// Rows and columns wrap modulo the board size.
    Toroidal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    topology: Topology,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize, topology: Topology) -> Self {
        Self {
            size,
            topology,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a board from text rows: `X` black, `O` white, anything else empty.
    /// The board size is the number of rows.
    pub fn from_diagram(rows: &[&str], topology: Topology) -> Self {
        let mut board = Board::new(rows.len(), topology);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(rows.len()).enumerate() {
                let cell = match ch {
                    'X' => Cell::Black,
                    'O' => Cell::White,
                    _ => Cell::Empty,
                };
                board.set(Pos::new(r as i32, c as i32), cell);
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Map a position onto the grid. Bounded boards reject off-grid positions;
    /// toroidal boards wrap every position.
    pub fn normalize(&self, pos: Pos) -> Option<Pos> {
        let n = self.size as i32;
        match self.topology {
            Topology::Bounded => {
                if (0..n).contains(&pos.row) && (0..n).contains(&pos.col) {
                    Some(pos)
                } else {
                    None
                }
            }
            Topology::Toroidal if n > 0 => {
                Some(Pos::new(pos.row.rem_euclid(n), pos.col.rem_euclid(n)))
            }
            Topology::Toroidal => None,
        }
    }

    pub fn is_valid_position(&self, pos: Pos) -> bool {
        self.normalize(pos).is_some()
    }

    /// Flat index of a position, after normalization.
    pub fn index(&self, pos: Pos) -> Option<usize> {
        self.normalize(pos)
            .map(|p| p.row as usize * self.size + p.col as usize)
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Write a cell. Off-grid positions on a bounded board are ignored.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// All on-grid positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let n = self.size as i32;
        (0..n).flat_map(move |row| (0..n).map(move |col| Pos::new(row, col)))
    }

    /// Normalized cell one `(dr, dc)` step from `pos`. Toroidal boards wrap
    /// `pos` onto the grid before stepping.
    fn step(&self, pos: Pos, dr: i32, dc: i32) -> Option<Pos> {
        let base = match self.topology {
            Topology::Bounded => pos,
            Topology::Toroidal => self.normalize(pos)?,
        };
        self.normalize(base.checked_offset(dr, dc)?)
    }

    /// Normalized orthogonal neighbors. Toroidal boards always yield four.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        ORTHOGONAL
            .iter()
            .filter_map(|&(dr, dc)| self.step(pos, dr, dc))
            .collect()
    }

    /// Normalized cells of the 3x3 window centered on `pos`, center included.
    pub fn window(&self, pos: Pos) -> Vec<Pos> {
        let mut area = Vec::with_capacity(9);
        for dr in -1..=1 {
            for dc in -1..=1 {
                if let Some(p) = self.step(pos, dr, dc) {
                    area.push(p);
                }
            }
        }
        area
    }

    /// Number of `color` pieces among `cells`.
    pub fn count_in(&self, cells: &[Pos], color: Color) -> usize {
        cells
            .iter()
            .filter(|&&p| self.get(p).is_some_and(|c| c.is(color)))
            .count()
    }

    /// A piece is isolated when no orthogonal neighbor holds its own color.
    pub fn is_isolated(&self, pos: Pos, color: Color) -> bool {
        self.neighbors(pos)
            .into_iter()
            .all(|n| !self.get(n).is_some_and(|c| c.is(color)))
    }

    /// Returns `(black_count, white_count)`.
    pub fn counts(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(b, w), c| match c {
            Cell::Black => (b + 1, w),
            Cell::White => (b, w + 1),
            Cell::Empty => (b, w),
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Collect the maximal orthogonally-connected set of cells sharing the
    /// occupancy of `start`, breadth-first. Empty if `start` is off-grid.
    pub fn collect_group(&self, start: Pos) -> Vec<Pos> {
        let (Some(start), Some(cell)) = (self.normalize(start), self.get(start)) else {
            return Vec::new();
        };
        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([start]);
        let mut group = Vec::new();

        while let Some(pt) = queue.pop_front() {
            let Some(i) = self.index(pt) else { continue };
            if visited[i] {
                continue;
            }
            visited[i] = true;
            group.push(pt);
            for n in self.neighbors(pt) {
                if self.get(n) == Some(cell) {
                    queue.push_back(n);
                }
            }
        }
        group
    }

    pub fn has_liberties(&self, group: &[Pos]) -> bool {
        group
            .iter()
            .any(|&pt| self.neighbors(pt).into_iter().any(|n| self.is_empty_at(n)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in self.positions() {
            let ch = match self.get(pos) {
                Some(Cell::Black) => 'X',
                Some(Cell::White) => 'O',
                _ => '.',
            };
            write!(f, "{ch}")?;
            if pos.col as usize + 1 == self.size {
                writeln!(f)?;
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}
