pub mod error;
pub mod game;
pub mod grid;
pub mod tic_tac_toe;

pub use error::GameError;
pub use game::{BoardCell, FinishedState, Game, GameBoard, GameState};
pub use grid::{Grid, GridIndex};

pub type PlayerId = u64;
pub type GameResult<T> = Result<T, GameError>;
