use std::{
    fmt::Display,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::find::{MapStorage, MapTrait, NodeReference, PathFinder, PathFinderState, Visited};

/// Number of files and ranks on the board
pub const BOARD_SIZE: i32 = 8;

/// The knight offsets in the order they are tried during the search
pub const KNIGHT_MOVES: [Move; 8] = [
    Move::new(-2, -1),
    Move::new(-2, 1),
    Move::new(-1, -2),
    Move::new(-1, 2),
    Move::new(1, -2),
    Move::new(1, 2),
    Move::new(2, -1),
    Move::new(2, 1),
];

/// Ordered squares from the start to the target, both included
pub type Path = Vec<Square>;

/// A square on the board. Values outside the board can be represented, use [`Square::is_on_board`]
/// to check.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub file: i32,
    pub rank: i32,
}

impl Square {
    #[inline]
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.file) && (0..BOARD_SIZE).contains(&self.rank)
    }

    /// Iterate over all squares of the board, rank by rank
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square::new(file, rank)))
    }
}

impl NodeReference for Square {}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = SearchError;

    /// Parses `file,rank`, e.g. `4,4`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || SearchError::ParseSquare(s.to_string());

        let (file, rank) = s.split_once(',').ok_or_else(err)?;
        let file = file.trim().parse::<i32>().map_err(|_| err())?;
        let rank = rank.trim().parse::<i32>().map_err(|_| err())?;

        Ok(Square::new(file, rank))
    }
}

/// A coordinate offset between two squares
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub file: i32,
    pub rank: i32,
}

impl Move {
    #[inline]
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    pub fn between(from: Square, to: Square) -> Move {
        to - from
    }

    pub fn is_knight_move(self) -> bool {
        KNIGHT_MOVES.contains(&self)
    }
}

impl Add<Move> for Square {
    type Output = Square;

    #[inline]
    fn add(self, rhs: Move) -> Square {
        Square::new(self.file + rhs.file, self.rank + rhs.rank)
    }
}

impl Sub for Square {
    type Output = Move;

    #[inline]
    fn sub(self, rhs: Square) -> Move {
        Move::new(self.file - rhs.file, self.rank - rhs.rank)
    }
}

/// The standard 8x8 board where every square can be reached by a knight
#[derive(Copy, Clone, Debug, Default)]
pub struct Board;

/// Per-square storage for the board, one slot for each of the 64 squares
#[derive(Debug)]
pub struct SquareStorage<T>([T; (BOARD_SIZE * BOARD_SIZE) as usize]);

impl<T> SquareStorage<T> {
    #[inline]
    fn index(square: Square) -> usize {
        (square.rank * BOARD_SIZE + square.file) as usize
    }
}

impl<T: Copy + 'static> MapStorage<T> for SquareStorage<T> {
    type Reference = Square;

    fn get(&self, node: Square) -> T {
        self.0[Self::index(node)]
    }

    fn get_mut(&mut self, node: Square) -> &mut T {
        &mut self.0[Self::index(node)]
    }
}

impl<T: Display> Display for SquareStorage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in self.0.chunks(BOARD_SIZE as usize) {
            for cell in rank {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl MapTrait for Board {
    type Reference = Square;
    type Storage<T: Default + Copy + 'static> = SquareStorage<T>;

    fn is_valid(&self, node: Square) -> bool {
        node.is_on_board()
    }

    fn neighbors_of(&self, node: Square) -> impl Iterator<Item = Square> {
        KNIGHT_MOVES
            .into_iter()
            .map(move |m| node + m)
            .filter(|square| square.is_on_board())
    }

    fn create_storage<T: Default + Copy + 'static>(&self) -> SquareStorage<T> {
        SquareStorage([T::default(); (BOARD_SIZE * BOARD_SIZE) as usize])
    }
}

fn check_squares<M: MapTrait<Reference = Square>>(
    map: &M,
    start: Square,
    target: Square,
) -> Result<()> {
    for square in [start, target] {
        if !map.is_valid(square) {
            return Err(SearchError::InvalidSquare(square));
        }
    }
    Ok(())
}

fn into_path(state: PathFinderState<Square>, start: Square, target: Square) -> Result<Path> {
    match state {
        PathFinderState::PathFound(result) => Ok(result.path),
        PathFinderState::NoPathFound | PathFinderState::Computing => {
            Err(SearchError::NoPathFound { start, target })
        }
    }
}

/// Compute one shortest sequence of knight moves from `start` to `target` on the standard board.
///
/// Among equally short paths the one found first when trying [`KNIGHT_MOVES`] in order is
/// returned, so the result is the same on every call.
pub fn find_shortest_path(start: Square, target: Square) -> Result<Path> {
    check_squares(&Board, start, target)?;

    let (state, visited) =
        PathFinder::new(start, target, Board.create_storage::<Visited<Square>>()).finish(&Board);

    log::trace!("moves needed from {start}:\n{visited}");

    into_path(state, start, target)
}

/// Same as [`find_shortest_path`] but on any map of squares, e.g. one where parts of the board
/// are unreachable.
pub fn find_shortest_path_on<M: MapTrait<Reference = Square>>(
    map: &M,
    start: Square,
    target: Square,
) -> Result<Path> {
    check_squares(map, start, target)?;

    let (state, _) =
        PathFinder::new(start, target, map.create_storage::<Visited<Square>>()).finish(map);

    into_path(state, start, target)
}

/// Minimal number of knight moves between two squares
pub fn knight_distance(start: Square, target: Square) -> Result<usize> {
    find_shortest_path(start, target).map(|path| path.len() - 1)
}
