pub mod command;
pub mod error;
pub mod history;

use std::collections::HashMap;

use log::{debug, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::game::{Game, GameBoard, GameState, PlayerId};

pub use command::{AreaCommand, CommandReply};
pub use error::{AreaError, AreaResult};
pub use history::{MatchHistory, MatchResult};

pub type GameId = u64;

type BoardItem<T> = <<T as Game>::Board as GameBoard>::Item;

/// Acting identity as resolved by the player directory of the venue.
#[derive(Clone, Debug, PartialEq)]
pub struct Participant {
    pub id: PlayerId,
    pub name: String,
}

impl Participant {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Read-only snapshot of the active game, pushed to subscribers on every
/// observable change.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GameInfo<B> {
    pub game_id: GameId,
    pub players: Vec<PlayerId>,
    pub state: GameState,
    pub board: Vec<Vec<B>>,
}

#[derive(Debug)]
struct ActiveGame<T> {
    id: GameId,
    game: T,
    recorded: bool,
}

/// Command router for one venue area hosting a single game at a time.
///
/// Commands are handled one at a time against the exclusively owned engine;
/// callers serialize delivery per area, hosts that share an area across
/// threads wrap it themselves.
pub struct GameArea<T: Game> {
    next_game_id: GameId,
    active: Option<ActiveGame<T>>,
    names: HashMap<PlayerId, String>,
    history: MatchHistory,
    subscribers: Vec<UnboundedSender<GameInfo<BoardItem<T>>>>,
}

impl<T: Game> Default for GameArea<T>
where
    BoardItem<T>: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Game> GameArea<T>
where
    BoardItem<T>: Clone,
{
    pub fn new() -> Self {
        Self {
            next_game_id: 1,
            active: None,
            names: HashMap::new(),
            history: MatchHistory::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn handle_command(
        &mut self,
        actor: &Participant,
        command: AreaCommand<T::TurnData>,
    ) -> AreaResult<CommandReply> {
        match command {
            AreaCommand::JoinGame => self.handle_join(actor),
            AreaCommand::GameMove { game_id, mov } => self.handle_move(actor, game_id, mov),
            AreaCommand::LeaveGame { game_id } => self.handle_leave(actor, game_id),
            other => Err(AreaError::unsupported_command(other.kind())),
        }
    }

    /// Identity of the active game, if any.
    pub fn active_game_id(&self) -> Option<GameId> {
        self.active.as_ref().map(|active| active.id)
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn game_info(&self) -> Option<GameInfo<BoardItem<T>>> {
        self.active.as_ref().map(|active| GameInfo {
            game_id: active.id,
            players: active.game.player_ids(),
            state: active.game.state(),
            board: active.game.board_content(),
        })
    }

    /// Registers an observer; it receives a snapshot after every successful
    /// command. Closed receivers are dropped on the next notification.
    pub fn subscribe(&mut self) -> UnboundedReceiver<GameInfo<BoardItem<T>>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    fn handle_join(&mut self, actor: &Participant) -> AreaResult<CommandReply> {
        let game_id = match self.active.as_mut().filter(|a| !a.game.is_finished()) {
            Some(active) => {
                active.game.join(actor.id)?;
                active.id
            }
            // no engine, or the previous match ended: start a fresh one
            None => {
                let mut game = T::new();
                game.join(actor.id)?;
                let id = self.next_game_id;
                self.next_game_id += 1;
                self.active = Some(ActiveGame {
                    id,
                    game,
                    recorded: false,
                });
                id
            }
        };
        self.names.insert(actor.id, actor.name.clone());
        debug!("player {} joined game {}", actor.id, game_id);
        self.notify();
        Ok(CommandReply::Joined { game_id })
    }

    fn handle_move(
        &mut self,
        actor: &Participant,
        game_id: GameId,
        mov: T::TurnData,
    ) -> AreaResult<CommandReply> {
        let active = self.active.as_mut().ok_or(AreaError::NoGameInProgress)?;
        if active.id != game_id {
            return Err(AreaError::game_id_mismatch(active.id, game_id));
        }
        active.game.update(actor.id, mov)?;
        debug!("player {} moved in game {}", actor.id, game_id);
        self.record_if_finished(actor);
        self.notify();
        Ok(CommandReply::Accepted)
    }

    fn handle_leave(&mut self, actor: &Participant, game_id: GameId) -> AreaResult<CommandReply> {
        let active = self.active.as_mut().ok_or(AreaError::NoGameInProgress)?;
        if active.id != game_id {
            return Err(AreaError::game_id_mismatch(active.id, game_id));
        }
        active.game.leave(actor.id)?;
        let remaining = active.game.player_ids().len();
        debug!("player {} left game {}", actor.id, game_id);
        self.record_if_finished(actor);
        if remaining == 1 {
            // the forfeited round is in the ledger; reset the board for a
            // rematch under the same game identity
            if let Some(active) = self.active.as_mut() {
                active.game.end();
                active.recorded = false;
            }
        }
        self.notify();
        Ok(CommandReply::Accepted)
    }

    /// Folds the outcome into the ledger on the transition to a finished
    /// state. The `recorded` flag keeps a later terminal-state command from
    /// counting the same round twice.
    fn record_if_finished(&mut self, actor: &Participant) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.recorded || !active.game.is_finished() {
            return;
        }
        let winner_name = active.game.winner().and_then(|id| {
            if id == actor.id {
                Some(actor.name.clone())
            } else {
                self.names.get(&id).cloned()
            }
        });
        let opponent_name = active
            .game
            .player_ids()
            .into_iter()
            .find(|&id| id != actor.id)
            .and_then(|id| self.names.get(&id).cloned());
        self.history.record(
            active.id,
            &actor.name,
            opponent_name.as_deref(),
            winner_name.as_deref(),
        );
        active.recorded = true;
        debug!("recorded result of game {}", active.id);
    }

    fn notify(&mut self) {
        let Some(info) = self.game_info() else {
            return;
        };
        self.subscribers.retain(|tx| {
            if tx.send(info.clone()).is_err() {
                warn!("dropping closed area subscriber");
                return false;
            }
            true
        });
    }
}
