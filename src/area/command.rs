use super::GameId;

/// Commands a venue delivers to an area, parameterized by the move payload of
/// the hosted game. The venue protocol carries more kinds than a game area
/// understands; anything but the three game commands is rejected by name.
#[derive(Clone, Debug, PartialEq)]
pub enum AreaCommand<M> {
    JoinGame,
    GameMove { game_id: GameId, mov: M },
    LeaveGame { game_id: GameId },
    Chat { message: String },
}

impl<M> AreaCommand<M> {
    pub fn kind(&self) -> &'static str {
        match self {
            AreaCommand::JoinGame => "JoinGame",
            AreaCommand::GameMove { .. } => "GameMove",
            AreaCommand::LeaveGame { .. } => "LeaveGame",
            AreaCommand::Chat { .. } => "Chat",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommandReply {
    Joined { game_id: GameId },
    Accepted,
}
