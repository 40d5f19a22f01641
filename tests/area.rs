use venue_games::game::grid::GridIndex;
use venue_games::game::tic_tac_toe::{GameMove, Sign, TicTacToe};
use venue_games::{
    AreaCommand, AreaError, CommandReply, FinishedState, GameArea, GameError, GameId, GameState,
    Participant,
};

type TttArea = GameArea<TicTacToe>;
type Command = AreaCommand<GameMove>;

fn alice() -> Participant {
    Participant::new(1, "alice")
}

fn bob() -> Participant {
    Participant::new(2, "bob")
}

fn mv(game_id: GameId, row: usize, col: usize) -> Command {
    AreaCommand::GameMove {
        game_id,
        mov: GameMove::new(GridIndex::new(row, col), Sign::X),
    }
}

/// Joins both players and returns the id of the started game.
fn start_match(area: &mut TttArea) -> GameId {
    let CommandReply::Joined { game_id } = area.handle_command(&alice(), Command::JoinGame).unwrap()
    else {
        panic!("join must reply with a game id");
    };
    area.handle_command(&bob(), Command::JoinGame).unwrap();
    game_id
}

/// Alice takes the top row while Bob answers in the middle row.
fn play_top_row_win(area: &mut TttArea, game_id: GameId) {
    area.handle_command(&alice(), mv(game_id, 0, 0)).unwrap();
    area.handle_command(&bob(), mv(game_id, 1, 1)).unwrap();
    area.handle_command(&alice(), mv(game_id, 0, 1)).unwrap();
    area.handle_command(&bob(), mv(game_id, 1, 0)).unwrap();
    area.handle_command(&alice(), mv(game_id, 0, 2)).unwrap();
}

#[test]
fn test_join_starts_and_fills_a_game() {
    let mut area = TttArea::new();
    let reply = area.handle_command(&alice(), Command::JoinGame).unwrap();
    assert_eq!(reply, CommandReply::Joined { game_id: 1 });
    assert_eq!(area.game_info().unwrap().state, GameState::WaitingToStart);

    let reply = area.handle_command(&bob(), Command::JoinGame).unwrap();
    assert_eq!(reply, CommandReply::Joined { game_id: 1 });

    let info = area.game_info().unwrap();
    assert_eq!(info.state, GameState::InProgress);
    assert_eq!(info.players, vec![1, 2]);
}

#[test]
fn test_win_is_recorded_in_history() {
    let mut area = TttArea::new();
    let game_id = start_match(&mut area);
    play_top_row_win(&mut area, game_id);

    let info = area.game_info().unwrap();
    assert_eq!(info.state, GameState::Finished(FinishedState::Win(1)));

    let result = area.history().find(game_id).unwrap();
    assert_eq!(result.scores["alice"], 1);
    assert_eq!(result.scores["bob"], 0);
}

#[test]
fn test_forfeit_by_departure() {
    let mut area = TttArea::new();
    let game_id = start_match(&mut area);

    area.handle_command(&alice(), Command::LeaveGame { game_id })
        .unwrap();

    // the forfeit went into the ledger and the board was reset for a rematch
    let result = area.history().find(game_id).unwrap();
    assert_eq!(result.scores["alice"], 0);
    assert_eq!(result.scores["bob"], 1);

    let info = area.game_info().unwrap();
    assert_eq!(info.state, GameState::WaitingToStart);
    assert!(info.players.is_empty());
}

#[test]
fn test_draw_is_recorded_without_winner() {
    let mut area = TttArea::new();
    let game_id = start_match(&mut area);
    let sequence = [
        (alice(), 0, 0),
        (bob(), 0, 1),
        (alice(), 0, 2),
        (bob(), 1, 1),
        (alice(), 1, 0),
        (bob(), 1, 2),
        (alice(), 2, 1),
        (bob(), 2, 0),
        (alice(), 2, 2),
    ];
    for (actor, row, col) in sequence {
        area.handle_command(&actor, mv(game_id, row, col)).unwrap();
    }

    let info = area.game_info().unwrap();
    assert_eq!(info.state, GameState::Finished(FinishedState::Draw));

    let result = area.history().find(game_id).unwrap();
    assert_eq!(result.scores["alice"], 0);
    assert_eq!(result.scores["bob"], 0);
}

#[test]
fn test_third_join_is_rejected() {
    let mut area = TttArea::new();
    start_match(&mut area);
    let before = area.game_info();

    let carol = Participant::new(3, "carol");
    let err = area.handle_command(&carol, Command::JoinGame).unwrap_err();
    assert_eq!(err, AreaError::Game(GameError::GameFull));
    assert_eq!(area.game_info(), before);
}

#[test]
fn test_game_id_mismatch() {
    let mut area = TttArea::new();
    let game_id = start_match(&mut area);

    let err = area.handle_command(&alice(), mv(99, 0, 0)).unwrap_err();
    assert_eq!(
        err,
        AreaError::GameIdMismatch {
            expected: game_id,
            found: 99
        }
    );
    let err = area
        .handle_command(&alice(), Command::LeaveGame { game_id: 99 })
        .unwrap_err();
    assert_eq!(
        err,
        AreaError::GameIdMismatch {
            expected: game_id,
            found: 99
        }
    );
}

#[test]
fn test_commands_without_active_game() {
    let mut area = TttArea::new();
    let err = area.handle_command(&alice(), mv(1, 0, 0)).unwrap_err();
    assert_eq!(err, AreaError::NoGameInProgress);

    let err = area
        .handle_command(&alice(), Command::LeaveGame { game_id: 1 })
        .unwrap_err();
    assert_eq!(err, AreaError::NoGameInProgress);
}

#[test]
fn test_unsupported_command() {
    let mut area = TttArea::new();
    start_match(&mut area);
    let err = area
        .handle_command(
            &alice(),
            Command::Chat {
                message: "gg".to_string(),
            },
        )
        .unwrap_err();
    assert_eq!(err, AreaError::unsupported_command("Chat"));
}

#[test]
fn test_engine_errors_propagate_unmodified() {
    let mut area = TttArea::new();
    let game_id = start_match(&mut area);

    let err = area.handle_command(&bob(), mv(game_id, 0, 0)).unwrap_err();
    assert_eq!(err, AreaError::Game(GameError::not_your_turn(1, 2)));

    area.handle_command(&alice(), mv(game_id, 0, 0)).unwrap();
    let err = area.handle_command(&bob(), mv(game_id, 0, 0)).unwrap_err();
    assert_eq!(err, AreaError::Game(GameError::cell_is_occupied(0, 0)));
}

#[test]
fn test_subscribers_see_every_successful_command_only() {
    let mut area = TttArea::new();
    let mut updates = area.subscribe();

    area.handle_command(&alice(), Command::JoinGame).unwrap();
    area.handle_command(&bob(), Command::JoinGame).unwrap();
    area.handle_command(&alice(), mv(1, 0, 0)).unwrap();
    assert!(area.handle_command(&alice(), mv(1, 0, 0)).is_err());

    let mut seen = Vec::new();
    while let Ok(info) = updates.try_recv() {
        seen.push(info.state);
    }
    assert_eq!(
        seen,
        vec![
            GameState::WaitingToStart,
            GameState::InProgress,
            GameState::InProgress,
        ]
    );
}

#[test]
fn test_finished_game_is_replaced_on_next_join() {
    let mut area = TttArea::new();
    let first = start_match(&mut area);
    play_top_row_win(&mut area, first);

    let reply = area.handle_command(&alice(), Command::JoinGame).unwrap();
    assert_eq!(reply, CommandReply::Joined { game_id: 2 });
    assert_ne!(first, 2);
    assert_eq!(area.game_info().unwrap().state, GameState::WaitingToStart);
}

#[test]
fn test_leave_after_decided_game_does_not_double_count() {
    let mut area = TttArea::new();
    let game_id = start_match(&mut area);
    play_top_row_win(&mut area, game_id);

    // the winner walking away must not bump their score again
    area.handle_command(&alice(), Command::LeaveGame { game_id })
        .unwrap();
    let result = area.history().find(game_id).unwrap();
    assert_eq!(result.scores["alice"], 1);
    assert_eq!(result.scores["bob"], 0);
}

#[test]
fn test_rematch_under_same_id_accumulates_scores() {
    let mut area = TttArea::new();
    let game_id = start_match(&mut area);

    // round 1: alice forfeits
    area.handle_command(&alice(), Command::LeaveGame { game_id })
        .unwrap();
    // round 2: same game identity, alice wins outright
    assert_eq!(
        area.handle_command(&alice(), Command::JoinGame).unwrap(),
        CommandReply::Joined { game_id }
    );
    area.handle_command(&bob(), Command::JoinGame).unwrap();
    play_top_row_win(&mut area, game_id);

    let result = area.history().find(game_id).unwrap();
    assert_eq!(result.scores["alice"], 1);
    assert_eq!(result.scores["bob"], 1);
}
