//! Dots and Boxes board state.
//!
//! Every drawable edge is stored exactly once, in two flat boolean arrays
//! (horizontal and vertical segments), plus an owner mark per box. A box
//! never stores its own side count: counts are derived from the shared
//! edge arrays, so drawing one segment is a single atomic update that
//! both adjacent boxes observe at once.
//!
//! Coordinates are row-major. A board with `rows x cols` boxes has
//! `(rows + 1) x (cols + 1)` dots; box `(r, c)` has its top-left dot at
//! dot `(r, c)`.

use std::fmt;

/// A dot on the grid, `(row, col)` with `row <= rows` and `col <= cols`.
pub type Dot = (usize, usize);

/// A box on the grid, `(row, col)` with `row < rows` and `col < cols`.
pub type Cell = (usize, usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "P1"),
            Player::Two => write!(f, "P2"),
        }
    }
}

/// One of the four sides of a box.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];
}

/// A drawable segment between two adjacent dots.
///
/// Endpoints are normalized so the smaller dot comes first; two edges
/// compare equal whenever they join the same pair of dots.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    a: Dot,
    b: Dot,
}

impl Edge {
    pub fn new(a: Dot, b: Dot) -> Self {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        debug_assert!(
            (b.0 == a.0 && b.1 == a.1 + 1) || (b.1 == a.1 && b.0 == a.0 + 1),
            "edge dots must be adjacent: {a:?}-{b:?}"
        );
        Self { a, b }
    }

    /// The segment from dot `(row, col)` to `(row, col + 1)`.
    pub fn horizontal(row: usize, col: usize) -> Self {
        Self::new((row, col), (row, col + 1))
    }

    /// The segment from dot `(row, col)` to `(row + 1, col)`.
    pub fn vertical(row: usize, col: usize) -> Self {
        Self::new((row, col), (row + 1, col))
    }

    pub fn endpoints(self) -> (Dot, Dot) {
        (self.a, self.b)
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.a.0 == self.b.0
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})-({},{})", self.a.0, self.a.1, self.b.0, self.b.1)
    }
}

enum Slot {
    Horizontal(usize),
    Vertical(usize),
}

#[derive(Clone)]
pub struct Board {
    pub rows: usize,
    pub cols: usize,
    horizontal: Vec<bool>,
    vertical: Vec<bool>,
    owners: Vec<Option<Player>>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            horizontal: vec![false; (rows + 1) * cols],
            vertical: vec![false; rows * (cols + 1)],
            owners: vec![None; rows * cols],
        }
    }

    fn cell_idx(&self, (r, c): Cell) -> usize {
        r * self.cols + c
    }

    fn locate(&self, edge: Edge) -> Option<Slot> {
        let ((r, c), (r2, c2)) = edge.endpoints();
        if edge.is_horizontal() {
            (r <= self.rows && c2 == c + 1 && c2 <= self.cols)
                .then(|| Slot::Horizontal(r * self.cols + c))
        } else {
            (c <= self.cols && r2 == r + 1 && r2 <= self.rows)
                .then(|| Slot::Vertical(r * (self.cols + 1) + c))
        }
    }

    /// Whether this edge has been drawn. Edges outside the grid read as undrawn.
    pub fn is_drawn(&self, edge: Edge) -> bool {
        match self.locate(edge) {
            Some(Slot::Horizontal(i)) => self.horizontal[i],
            Some(Slot::Vertical(i)) => self.vertical[i],
            None => false,
        }
    }

    /// The edge forming `dir`'s side of `cell`.
    pub fn edge(&self, (r, c): Cell, dir: Direction) -> Edge {
        match dir {
            Direction::Top => Edge::horizontal(r, c),
            Direction::Bottom => Edge::horizontal(r + 1, c),
            Direction::Left => Edge::vertical(r, c),
            Direction::Right => Edge::vertical(r, c + 1),
        }
    }

    #[inline]
    pub fn side_drawn(&self, cell: Cell, dir: Direction) -> bool {
        self.is_drawn(self.edge(cell, dir))
    }

    /// How many of the four sides of `cell` are drawn.
    pub fn sides(&self, cell: Cell) -> u8 {
        Direction::ALL
            .iter()
            .filter(|&&dir| self.side_drawn(cell, dir))
            .count() as u8
    }

    pub fn owner(&self, cell: Cell) -> Option<Player> {
        self.owners[self.cell_idx(cell)]
    }

    /// The one or two boxes bordering an edge, boundary edges having one.
    pub(crate) fn adjoining(&self, edge: Edge) -> [Option<Cell>; 2] {
        let (r, c) = edge.endpoints().0;
        if edge.is_horizontal() {
            [
                (r > 0).then(|| (r - 1, c)),
                (r < self.rows).then(|| (r, c)),
            ]
        } else {
            [
                (c > 0).then(|| (r, c - 1)),
                (c < self.cols).then(|| (r, c)),
            ]
        }
    }

    /// Draw `edge` for `player`, marking every box the segment completes.
    ///
    /// Drawing a taken or out-of-grid edge is reported as illegal and
    /// leaves the board untouched.
    pub fn draw(&mut self, edge: Edge, player: Player) -> DrawResult {
        match self.locate(edge) {
            Some(Slot::Horizontal(i)) => {
                if self.horizontal[i] {
                    return DrawResult::illegal();
                }
                self.horizontal[i] = true;
            }
            Some(Slot::Vertical(i)) => {
                if self.vertical[i] {
                    return DrawResult::illegal();
                }
                self.vertical[i] = true;
            }
            None => return DrawResult::illegal(),
        }
        let mut closed = 0;
        for cell in self.adjoining(edge).into_iter().flatten() {
            if self.sides(cell) == 4 {
                let idx = self.cell_idx(cell);
                self.owners[idx] = Some(player);
                closed += 1;
            }
        }
        DrawResult { legal: true, closed }
    }

    /// Boxes in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }

    /// Every undrawn edge, horizontals first.
    pub fn undrawn_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for r in 0..=self.rows {
            for c in 0..self.cols {
                if !self.horizontal[r * self.cols + c] {
                    edges.push(Edge::horizontal(r, c));
                }
            }
        }
        for r in 0..self.rows {
            for c in 0..=self.cols {
                if !self.vertical[r * (self.cols + 1) + c] {
                    edges.push(Edge::vertical(r, c));
                }
            }
        }
        edges
    }

    pub fn is_complete(&self) -> bool {
        self.horizontal.iter().all(|&d| d) && self.vertical.iter().all(|&d| d)
    }

    /// Boxes owned by `player`.
    pub fn score(&self, player: Player) -> usize {
        self.owners.iter().filter(|&&o| o == Some(player)).count()
    }
}

#[derive(Debug)]
pub struct DrawResult {
    pub legal: bool,
    pub closed: u8,
}

impl DrawResult {
    fn illegal() -> Self {
        DrawResult {
            legal: false,
            closed: 0,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..=self.rows {
            for c in 0..self.cols {
                let mark = if self.is_drawn(Edge::horizontal(r, c)) {
                    "--"
                } else {
                    "  "
                };
                write!(f, "+{mark}")?;
            }
            writeln!(f, "+")?;
            if r < self.rows {
                for c in 0..=self.cols {
                    let bar = if self.is_drawn(Edge::vertical(r, c)) {
                        '|'
                    } else {
                        ' '
                    };
                    write!(f, "{bar}")?;
                    if c < self.cols {
                        let mark = match self.owner((r, c)) {
                            Some(Player::One) => "1 ",
                            Some(Player::Two) => "2 ",
                            None => "  ",
                        };
                        write!(f, "{mark}")?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_normalizes_endpoints() {
        assert_eq!(Edge::new((1, 1), (0, 1)), Edge::new((0, 1), (1, 1)));
        assert!(Edge::horizontal(0, 0).is_horizontal());
        assert!(!Edge::vertical(0, 0).is_horizontal());
    }

    #[test]
    fn test_cell_sides_follow_shared_edges() {
        let mut board = Board::new(2, 2);
        assert_eq!(board.sides((0, 0)), 0);
        // The segment between the two top boxes belongs to both.
        let shared = board.edge((0, 0), Direction::Right);
        assert_eq!(shared, board.edge((0, 1), Direction::Left));
        assert!(board.draw(shared, Player::One).legal);
        assert_eq!(board.sides((0, 0)), 1);
        assert_eq!(board.sides((0, 1)), 1);
        assert_eq!(board.sides((1, 0)), 0);
    }

    #[test]
    fn test_redrawing_an_edge_is_illegal() {
        let mut board = Board::new(1, 1);
        let top = board.edge((0, 0), Direction::Top);
        assert!(board.draw(top, Player::One).legal);
        let again = board.draw(top, Player::Two);
        assert!(!again.legal);
        assert_eq!(again.closed, 0);
    }

    #[test]
    fn test_out_of_grid_edge_is_illegal() {
        let mut board = Board::new(1, 1);
        let outside = Edge::horizontal(5, 0);
        assert!(!board.is_drawn(outside));
        assert!(!board.draw(outside, Player::One).legal);
    }

    #[test]
    fn test_fourth_side_closes_and_marks_owner() {
        let mut board = Board::new(1, 1);
        for dir in [Direction::Top, Direction::Bottom, Direction::Left] {
            let result = board.draw(board.edge((0, 0), dir), Player::One);
            assert!(result.legal);
            assert_eq!(result.closed, 0);
        }
        assert_eq!(board.sides((0, 0)), 3);
        assert_eq!(board.owner((0, 0)), None);
        let last = board.draw(board.edge((0, 0), Direction::Right), Player::Two);
        assert!(last.legal);
        assert_eq!(last.closed, 1);
        assert_eq!(board.owner((0, 0)), Some(Player::Two));
        assert!(board.is_complete());
        assert_eq!(board.score(Player::Two), 1);
        assert_eq!(board.score(Player::One), 0);
    }

    #[test]
    fn test_one_edge_can_close_two_boxes() {
        let mut board = Board::new(1, 2);
        // Everything except the segment shared by the two boxes.
        for edge in [
            Edge::horizontal(0, 0),
            Edge::horizontal(0, 1),
            Edge::horizontal(1, 0),
            Edge::horizontal(1, 1),
            Edge::vertical(0, 0),
            Edge::vertical(0, 2),
        ] {
            assert!(board.draw(edge, Player::One).legal);
        }
        let shared = board.draw(Edge::vertical(0, 1), Player::Two);
        assert_eq!(shared.closed, 2);
        assert_eq!(board.score(Player::Two), 2);
    }

    #[test]
    fn test_undrawn_edges_counts_the_grid() {
        let board = Board::new(2, 3);
        // 3 rows of 3 horizontals plus 2 rows of 4 verticals.
        assert_eq!(board.undrawn_edges().len(), 3 * 3 + 2 * 4);
    }
}
