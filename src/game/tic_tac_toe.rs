use std::fmt::{Display, Formatter};

use generic_array::typenum::U3;
use smallvec::SmallVec;

use super::error::GameError;
use super::game::{BoardCell, Game, GameState};
use super::grid::{Grid, GridIndex};
use super::{GameResult, PlayerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Sign {
    X,
    O,
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::X => f.write_str("X"),
            Sign::O => f.write_str("O"),
        }
    }
}

/// Seat of one participant: their identity and the mark they play with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    id: PlayerId,
    sign: Sign,
}

impl Player {
    pub fn new(id: PlayerId, sign: Sign) -> Player {
        Self { id, sign }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }
}

/// One move as delivered by the transport and as recorded in the move log.
/// The `sign` of an inbound move is advisory only: the engine stamps the
/// mover's seat sign so a participant can never claim the opponent's mark.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GameMove {
    pub position: GridIndex,
    pub sign: Sign,
}

impl GameMove {
    pub fn new(position: GridIndex, sign: Sign) -> Self {
        Self { position, sign }
    }
}

type Cell = BoardCell<Sign>;
type Board = Grid<Cell, U3, U3>;

/// Rules engine for one tic-tac-toe match.
#[derive(Clone, Debug)]
pub struct TicTacToe {
    players: SmallVec<[Player; 2]>,
    board: Board,
    moves: Vec<GameMove>,
    state: GameState,
}

impl Game for TicTacToe {
    const NUM_PLAYERS: usize = 2;
    type TurnData = GameMove;
    type Board = Board;

    fn new() -> Self {
        Self {
            players: SmallVec::new(),
            board: Board::default(),
            moves: Vec::new(),
            state: GameState::WaitingToStart,
        }
    }

    fn join(&mut self, id: PlayerId) -> GameResult<()> {
        if self.is_finished() {
            return Err(GameError::GameIsFinished);
        }
        if self.players.iter().any(|p| p.id == id) {
            return Err(GameError::already_in_game(id));
        }
        if self.players.len() == Self::NUM_PLAYERS {
            return Err(GameError::GameFull);
        }
        let sign = if self.players.is_empty() {
            Sign::X
        } else {
            Sign::O
        };
        self.players.push(Player::new(id, sign));
        if self.players.len() == Self::NUM_PLAYERS {
            self.set_state(GameState::InProgress);
        }
        Ok(())
    }

    fn leave(&mut self, id: PlayerId) -> GameResult<()> {
        let seat = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(GameError::not_in_game(id))?;
        self.players.remove(seat);
        if self.players.is_empty() {
            self.end();
        } else if self.players.len() == 1 && self.state == GameState::InProgress {
            // departure from a live match forfeits it to the remaining player
            let winner = self.players[0].id;
            self.set_winner(winner);
        }
        Ok(())
    }

    fn update(&mut self, id: PlayerId, data: Self::TurnData) -> GameResult<GameState> {
        if self.state != GameState::InProgress {
            return Err(GameError::NotInProgress);
        }
        let mover = *self.get_player_by_sign(self.sign_to_move())?;
        if mover.id != id {
            return Err(GameError::not_your_turn(mover.id, id));
        }

        let position = data.position;
        let cell = self
            .board
            .get_mut(position)
            .ok_or(GameError::cell_out_of_bounds(position.row(), position.col()))?;
        if cell.is_some() {
            return Err(GameError::cell_is_occupied(position.row(), position.col()));
        }
        // the mark comes from the seat, not from the move payload
        **cell = Some(mover.sign);
        self.moves.push(GameMove::new(position, mover.sign));

        if self.line_completed(position, mover.sign) {
            return Ok(self.set_winner(id));
        }
        if self.board.all().all(|c| c.is_some()) {
            return Ok(self.set_draw());
        }
        Ok(self.state)
    }

    fn end(&mut self) {
        self.players.clear();
        self.board = Board::default();
        self.moves.clear();
        self.state = GameState::WaitingToStart;
    }

    fn board(&self) -> &Self::Board {
        &self.board
    }

    fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}

impl TicTacToe {
    pub fn get_player_by_sign(&self, sign: Sign) -> GameResult<&Player> {
        self.players
            .iter()
            .find(|player| player.sign == sign)
            .ok_or(GameError::PlayerSlotsCorrupted)
    }

    /// Applied moves of the current round, in play order.
    pub fn moves(&self) -> &[GameMove] {
        &self.moves
    }

    /// Whose mark plays next, derived from move log parity.
    fn sign_to_move(&self) -> Sign {
        if self.moves.len() % 2 == 0 {
            Sign::X
        } else {
            Sign::O
        }
    }

    /// Checks only the lines through the just-played cell instead of
    /// rescanning the whole board.
    fn line_completed(&self, position: GridIndex, sign: Sign) -> bool {
        let n = Board::rows();
        let owns = |row, col| *self.board[GridIndex::new(row, col)] == Some(sign);
        let (r, c) = (position.row(), position.col());
        (0..n).all(|col| owns(r, col))
            || (0..n).all(|row| owns(row, c))
            || (r == c && (0..n).all(|i| owns(i, i)))
            || (r + c == n - 1 && (0..n).all(|i| owns(i, n - 1 - i)))
    }
}
