use super::PlayerId;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("game is not in progress")]
    NotInProgress,
    #[error("other player's turn (expected: {expected}, found: {found})")]
    NotYourTurn { expected: PlayerId, found: PlayerId },
    #[error("cell ({row}, {col}) is occupied")]
    CellIsOccupied { row: usize, col: usize },
    #[error("cell ({row}, {col}) is out of bounds")]
    CellOutOfBounds { row: usize, col: usize },
    #[error("can't join a finished game")]
    GameIsFinished,
    #[error("player {id} is already in the game")]
    AlreadyInGame { id: PlayerId },
    #[error("no free player slots left")]
    GameFull,
    #[error("player {id} is not in the game")]
    NotInGame { id: PlayerId },
    #[error("player slots are corrupted")]
    PlayerSlotsCorrupted,
}

impl GameError {
    pub fn not_your_turn(expected: PlayerId, found: PlayerId) -> Self {
        Self::NotYourTurn { expected, found }
    }

    pub fn cell_is_occupied(row: usize, col: usize) -> Self {
        Self::CellIsOccupied { row, col }
    }

    pub fn cell_out_of_bounds(row: usize, col: usize) -> Self {
        Self::CellOutOfBounds { row, col }
    }

    pub fn already_in_game(id: PlayerId) -> Self {
        Self::AlreadyInGame { id }
    }

    pub fn not_in_game(id: PlayerId) -> Self {
        Self::NotInGame { id }
    }
}
