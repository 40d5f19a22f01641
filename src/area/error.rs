use super::GameId;
use crate::game::GameError;

pub type AreaResult<T> = Result<T, AreaError>;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AreaError {
    #[error("no game in progress")]
    NoGameInProgress,
    #[error("game id mismatch (expected: {expected}, found: {found})")]
    GameIdMismatch { expected: GameId, found: GameId },
    #[error("unsupported command: {kind}")]
    UnsupportedCommand { kind: &'static str },
    #[error(transparent)]
    Game(#[from] GameError),
}

impl AreaError {
    pub fn game_id_mismatch(expected: GameId, found: GameId) -> Self {
        Self::GameIdMismatch { expected, found }
    }

    pub fn unsupported_command(kind: &'static str) -> Self {
        Self::UnsupportedCommand { kind }
    }
}
