use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

use generic_array::ArrayLength;

use super::grid::Grid;
use super::{GameResult, PlayerId};

/// Single cell of a game board, occupied or empty.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T: Display> Display for BoardCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(val) => write!(f, "[{}]", val),
            None => f.write_str("[ ]"),
        }
    }
}

impl<T> From<T> for BoardCell<T> {
    fn from(value: T) -> Self {
        Self(Option::from(value))
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for BoardCell<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum FinishedState {
    Win(PlayerId),
    Draw,
}

/// Lifecycle of a single match.
/// `WaitingToStart` means not all player slots are filled yet,
/// `InProgress` means the match is live and accepts moves.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum GameState {
    WaitingToStart,
    InProgress,
    Finished(FinishedState),
}

pub trait GameBoard {
    type Item;

    fn content(&self) -> Vec<Vec<Self::Item>>;
}

impl<T, R: ArrayLength, C: ArrayLength> GameBoard for Grid<T, R, C>
where
    T: Clone,
{
    type Item = T;

    fn content(&self) -> Vec<Vec<Self::Item>> {
        self.iter()
            .map(|row| row.iter().cloned().collect())
            .collect()
    }
}

/// Capability set shared by every turn-based grid game hosted in a venue area.
/// The area controller only talks to this trait, never to a concrete game type.
pub trait Game: Sized {
    const NUM_PLAYERS: usize;
    type TurnData;
    type Board: GameBoard;

    fn new() -> Self;

    /// Seat a player. Slots are assigned in join order.
    fn join(&mut self, id: PlayerId) -> GameResult<()>;

    /// Unseat a player. Departure from a live match forfeits it
    /// to the remaining player.
    fn leave(&mut self, id: PlayerId) -> GameResult<()>;

    /// Apply one move on behalf of `id` and return the resulting state.
    fn update(&mut self, id: PlayerId, data: Self::TurnData) -> GameResult<GameState>;

    /// Reset the match to a fresh, empty round.
    fn end(&mut self);

    fn board(&self) -> &Self::Board;

    /// Currently seated players, in join order.
    fn player_ids(&self) -> Vec<PlayerId>;

    fn state(&self) -> GameState;
    fn set_state(&mut self, state: GameState);

    fn is_finished(&self) -> bool {
        matches!(self.state(), GameState::Finished(_))
    }

    fn winner(&self) -> Option<PlayerId> {
        match self.state() {
            GameState::Finished(FinishedState::Win(id)) => Some(id),
            _ => None,
        }
    }

    fn set_draw(&mut self) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Draw));
        self.state()
    }

    fn set_winner(&mut self, id: PlayerId) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Win(id)));
        self.state()
    }

    fn board_content(&self) -> Vec<Vec<<Self::Board as GameBoard>::Item>> {
        self.board().content()
    }
}
