//! Shortest knight paths on a chess board.
//!
//! [`find::PathFinder`] is a breadth-first search over any [`MapTrait`] implementation, the
//! [`board`] module plugs the knight's moves on the standard 8x8 board into it.

pub mod board;
pub mod error;
pub mod find;

pub use board::{
    find_shortest_path, find_shortest_path_on, knight_distance, Board, Move, Path, Square,
    SquareStorage, BOARD_SIZE, KNIGHT_MOVES,
};
pub use error::SearchError;
pub use find::{
    MapStorage, MapTrait, NodeReference, PathFinder, PathFinderState, PathResult, Visited,
    VisitedItem,
};
