pub mod area;
pub mod game;

pub use area::{
    AreaCommand, AreaError, AreaResult, CommandReply, GameArea, GameId, GameInfo, MatchHistory,
    MatchResult, Participant,
};
pub use game::{
    BoardCell, FinishedState, Game, GameBoard, GameError, GameResult, GameState, PlayerId,
};
